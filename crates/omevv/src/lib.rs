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

//! OMEVV firmware repository profile management.
//!
//! Profiles are keyed by their user-supplied name. Every handler run starts
//! with a lookup of the current collection, then converges toward the desired
//! state with at most one mutating call: create when the name is absent,
//! modify when the trimmed field diff is non-empty, delete when the name is
//! present. Share reachability is probed before any mutation.

pub mod diff;
pub mod endpoints;
pub mod handlers;
pub mod profile_api;

pub use diff::{ProfileFields, diff_fields, trim_api_response};
pub use handlers::{
    CreateFirmwareRepositoryProfile, DeleteFirmwareRepositoryProfile,
    ModifyFirmwareRepositoryProfile, ProfileSettings,
};
pub use profile_api::FirmwareProfileApi;
