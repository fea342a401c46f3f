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

//! The result contract every handler run ends in: changed/failed flags, a
//! human-readable message, and operation-specific payload data.

use openmanage_rest::RestError;
use serde::Serialize;
use serde_json::Value;

pub const CHANGES_FOUND_MSG: &str = "Changes found to be applied.";
pub const NO_CHANGES_FOUND_MSG: &str = "No changes found to be applied.";
pub const CONNECTION_FAILURE_MSG: &str =
    "Unable to complete the operation. Please check the connection details.";

/// OMEVV vendor code for "the resource is already in the requested state".
/// An HTTP error carrying this code is a benign no-op, not a failure.
pub const ALREADY_IN_REQUESTED_STATE_CODE: &str = "18001";

/// Outcome of one handler invocation.
///
/// Exactly one of three shapes: a change report (`changed`), a no-change
/// report (neither flag), or a failure (`failed`). Payload fields are set
/// only by the operations that produce them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModuleResult {
    pub changed: bool,
    pub failed: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Value>,
    /// Check-mode preview of the fields a real run would send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Value>,
}

impl ModuleResult {
    fn new(changed: bool, failed: bool, msg: impl Into<String>) -> Self {
        Self {
            changed,
            failed,
            msg: msg.into(),
            session_data: None,
            x_auth_token: None,
            profile: None,
            diff: None,
        }
    }

    pub fn changed(msg: impl Into<String>) -> Self {
        Self::new(true, false, msg)
    }

    pub fn unchanged(msg: impl Into<String>) -> Self {
        Self::new(false, false, msg)
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self::new(false, true, msg)
    }

    pub fn with_session_data(mut self, session_data: Value) -> Self {
        self.session_data = Some(session_data);
        self
    }

    pub fn with_auth_token(mut self, x_auth_token: Option<String>) -> Self {
        self.x_auth_token = x_auth_token;
        self
    }

    pub fn with_profile(mut self, profile: Value) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_diff(mut self, diff: Value) -> Self {
        self.diff = Some(diff);
        self
    }

    /// Map a REST error onto the flat report taxonomy: transport problems and
    /// the "already in the requested state" vendor code are non-failing
    /// no-change reports; everything else is a failure carrying the
    /// endpoint's message.
    pub fn from_rest_error(err: &RestError) -> Self {
        if err.is_transport() {
            return Self::unchanged(CONNECTION_FAILURE_MSG);
        }
        if err.error_code() == Some(ALREADY_IN_REQUESTED_STATE_CODE) {
            return Self::unchanged(err.endpoint_message().unwrap_or(NO_CHANGES_FOUND_MSG));
        }
        match err.endpoint_message() {
            Some(message) => Self::failure(message),
            None => Self::failure(err.to_string()),
        }
    }
}
