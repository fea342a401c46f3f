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

//! Redfish wire shapes used by the session handlers.

use serde::{Deserialize, Serialize};

/// Body of the session-create POST.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionCredentials {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// The slice of the Redfish service root the session handlers navigate:
/// `Links.Sessions.@odata.id` points at the sessions collection. A service
/// root without that link fails deserialization, which is the intended
/// behavior for a non-conformant endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceRoot {
    #[serde(rename = "Links")]
    pub links: ServiceRootLinks,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceRootLinks {
    #[serde(rename = "Sessions")]
    pub sessions: ODataRef,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ODataRef {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}
