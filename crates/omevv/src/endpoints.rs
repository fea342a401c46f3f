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

//! OMEVV gateway paths used by the profile handlers.

pub const GATEWAY_BASE: &str = "/omevv/GatewayService/v1";

/// Every OMEVV request carries the owning vCenter's UUID in this header.
pub const VCENTER_ID_HEADER: &str = "x_omivv-api-vcenter-identifier";

pub fn repository_profiles() -> String {
    format!("{GATEWAY_BASE}/RepositoryProfiles")
}

pub fn repository_profile(id: i64) -> String {
    format!("{GATEWAY_BASE}/RepositoryProfiles/{id}")
}

pub fn test_connection() -> String {
    format!("{GATEWAY_BASE}/RepositoryProfiles/TestConnection")
}
