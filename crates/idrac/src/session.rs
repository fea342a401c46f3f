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

use http::{Method, StatusCode};
use model::report::{CHANGES_FOUND_MSG, NO_CHANGES_FOUND_MSG};
use model::{ModuleResult, ServiceRoot, SessionCredentials};
use openmanage_rest::{RestClient, RestError};

pub const REDFISH_SERVICE_ROOT: &str = "/redfish/v1";
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

pub const SESSION_CREATED_MSG: &str = "The session has been created successfully.";
pub const SESSION_DELETED_MSG: &str = "The session has been deleted successfully.";

fn operation_failure(operation: &str) -> String {
    format!("Unable to '{operation}' a session.")
}

/// Resolve the sessions collection URL from the service root link graph.
/// A root document without the `Links.Sessions` entry fails here and the
/// error propagates; there is no hardcoded fallback.
pub async fn sessions_url(client: &dyn RestClient) -> Result<String, RestError> {
    let root = client
        .invoke_request(Method::GET, REDFISH_SERVICE_ROOT, None)
        .await?;
    let service_root: ServiceRoot = serde_json::from_value(root.json_data)?;
    Ok(service_root.links.sessions.odata_id)
}

/// Logs in: one POST of the credentials to the sessions collection.
///
/// There is no idempotency check; running this twice creates two sessions on
/// the controller.
pub struct CreateSession<'a> {
    client: &'a dyn RestClient,
    credentials: SessionCredentials,
}

impl<'a> CreateSession<'a> {
    pub fn new(
        client: &'a dyn RestClient,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials: SessionCredentials {
                user_name: username.into(),
                password: password.into(),
            },
        }
    }

    pub async fn execute(&self) -> Result<ModuleResult, RestError> {
        let url = sessions_url(self.client).await?;
        let body = serde_json::to_value(&self.credentials)?;
        let response = self
            .client
            .invoke_request(Method::POST, &url, Some(&body))
            .await?;

        if response.status_code != StatusCode::CREATED {
            tracing::debug!(status = %response.status_code, "session create was not accepted");
            return Ok(ModuleResult::failure(operation_failure("create")));
        }

        let token = response.header(AUTH_TOKEN_HEADER);
        Ok(ModuleResult::changed(SESSION_CREATED_MSG)
            .with_session_data(response.json_data)
            .with_auth_token(token))
    }
}

/// Logs out a session by ID.
///
/// The session resource is probed with a GET first and every branch keys off
/// that probe's status code: in check mode 200 predicts "changes found" and
/// anything else predicts "no changes". The probe status, not check-mode
/// intent, drives the prediction; this is long-standing observable behavior.
pub struct DeleteSession<'a> {
    client: &'a dyn RestClient,
    session_id: String,
    check_mode: bool,
}

impl<'a> DeleteSession<'a> {
    pub fn new(client: &'a dyn RestClient, session_id: impl Into<String>, check_mode: bool) -> Self {
        Self {
            client,
            session_id: session_id.into(),
            check_mode,
        }
    }

    pub async fn execute(&self) -> Result<ModuleResult, RestError> {
        let base = sessions_url(self.client).await?;
        let url = format!("{base}/{}", self.session_id);

        // An HTTP error status on the probe (e.g. 404 for an absent session)
        // is part of the branching, not a failure.
        let probe_status = match self.client.invoke_request(Method::GET, &url, None).await {
            Ok(response) => response.status_code,
            Err(RestError::Http { status, .. }) => status,
            Err(err) => return Err(err),
        };

        if self.check_mode {
            if probe_status == StatusCode::OK {
                return Ok(ModuleResult::changed(CHANGES_FOUND_MSG));
            }
            return Ok(ModuleResult::unchanged(NO_CHANGES_FOUND_MSG));
        }

        if probe_status != StatusCode::OK {
            return Ok(ModuleResult::unchanged(NO_CHANGES_FOUND_MSG));
        }

        let response = self
            .client
            .invoke_request(Method::DELETE, &url, None)
            .await?;
        if response.status_code == StatusCode::OK {
            Ok(ModuleResult::changed(SESSION_DELETED_MSG))
        } else {
            Ok(ModuleResult::unchanged(NO_CHANGES_FOUND_MSG))
        }
    }
}
