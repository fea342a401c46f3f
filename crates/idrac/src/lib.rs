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

//! iDRAC Redfish session management.
//!
//! Two handlers, one REST mutation each: [CreateSession] logs in (POST to the
//! sessions collection, token comes back in a response header) and
//! [DeleteSession] logs a session out by ID. The sessions collection URL is
//! discovered from the service root on every run rather than hardcoded.

pub mod session;

pub use session::{CreateSession, DeleteSession, sessions_url};
