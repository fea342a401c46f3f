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

//! OMEVV firmware repository profile wire shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::{Display, EnumString};

/// Transport of the firmware catalog share.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ProtocolType {
    Nfs,
    Cifs,
    Http,
    Https,
}

/// Credentials for an authenticated catalog share. All fields default to
/// empty strings, which is what the API expects for anonymous shares.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareCredential {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub domain: String,
}

/// Body of profile create and modify calls. Field names map the user-facing
/// settings onto the API's camelCase vocabulary (`name` -> `profileName`,
/// `catalog_path` -> `sharePath`).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub profile_name: String,
    pub protocol_type: ProtocolType,
    pub share_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub profile_type: String,
    pub share_credential: ShareCredential,
}

impl ProfilePayload {
    /// The only profile type these handlers manage.
    pub const PROFILE_TYPE_FIRMWARE: &'static str = "Firmware";
}

/// A profile as the API reports it. Server-assigned fields (`id`, `status`)
/// ride alongside the user-controlled ones; anything this model does not
/// name is kept in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryProfile {
    pub id: i64,
    pub profile_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<ProtocolType>,
    pub share_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of the share reachability probe issued before mutating calls.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestConnectionPayload {
    pub check_path_only: bool,
    pub protocol_type: ProtocolType,
    pub catalog_path: String,
    pub share_credential: ShareCredential,
}
