/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Desired-state comparison for repository profiles.
//!
//! The API object carries server-only fields (numeric id, status, audit
//! data). Comparison first trims it down to the user-controlled slice, then
//! diffs field by field; an empty diff means no modify call is needed.

use model::profile::{ProtocolType, RepositoryProfile};
use serde::Serialize;
use serde_json::{Map, Value};

/// The user-controlled slice of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<ProtocolType>,
    pub share_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Reduce an API profile to its comparison fields, dropping `id`, `status`
/// and everything else the operator does not control.
pub fn trim_api_response(profile: &RepositoryProfile) -> ProfileFields {
    ProfileFields {
        profile_name: profile.profile_name.clone(),
        protocol_type: profile.protocol_type,
        share_path: profile.share_path.clone(),
        description: profile.description.clone(),
    }
}

/// Field-level diff, keyed by wire name, valued with the desired state.
///
/// Fields the operator left unset (`None`) are not diffed; an absent
/// description does not mean "clear the description on the server".
pub fn diff_fields(current: &ProfileFields, desired: &ProfileFields) -> Map<String, Value> {
    let mut diff = Map::new();
    if current.profile_name != desired.profile_name {
        diff.insert(
            "profileName".into(),
            Value::String(desired.profile_name.clone()),
        );
    }
    if let Some(protocol_type) = desired.protocol_type
        && current.protocol_type != Some(protocol_type)
    {
        diff.insert(
            "protocolType".into(),
            Value::String(protocol_type.to_string()),
        );
    }
    if current.share_path != desired.share_path {
        diff.insert("sharePath".into(), Value::String(desired.share_path.clone()));
    }
    if let Some(description) = &desired.description
        && current.description.as_deref() != Some(description.as_str())
    {
        diff.insert("description".into(), Value::String(description.clone()));
    }
    diff
}
