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

//! Profile handlers: each run converges one named profile toward its desired
//! state with at most one mutating call.

use model::ModuleResult;
use model::profile::{ProfilePayload, RepositoryProfile, ShareCredential, TestConnectionPayload};
use model::report::{CHANGES_FOUND_MSG, CONNECTION_FAILURE_MSG, NO_CHANGES_FOUND_MSG};
use openmanage_rest::{RestClient, RestError};
use serde_json::Value;

use crate::diff::{ProfileFields, diff_fields, trim_api_response};
use crate::profile_api::FirmwareProfileApi;

pub const PROFILE_CREATED_MSG: &str =
    "Successfully created the OMEVV firmware repository profile.";
pub const PROFILE_CREATE_FAILED_MSG: &str =
    "Unable to create the OMEVV firmware repository profile.";
pub const PROFILE_MODIFIED_MSG: &str =
    "Successfully modified the OMEVV firmware repository profile.";
pub const PROFILE_MODIFY_FAILED_MSG: &str =
    "Unable to modify the OMEVV firmware repository profile.";
pub const PROFILE_DELETED_MSG: &str =
    "Successfully deleted the OMEVV firmware repository profile.";
pub const PROFILE_DELETE_FAILED_MSG: &str =
    "Unable to delete the OMEVV firmware repository profile.";

fn profile_not_found(name: &str) -> String {
    format!("Unable to complete the operation because the '{name}' is not a valid 'profile_name'.")
}

/// Desired state for one firmware repository profile, as the operator
/// supplied it. Field names here are the user-facing vocabulary; the wire
/// vocabulary is produced by [ProfileSettings::payload_details].
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    pub name: String,
    pub description: Option<String>,
    pub protocol_type: model::ProtocolType,
    pub catalog_path: String,
    pub share_username: Option<String>,
    pub share_password: Option<String>,
    pub share_domain: Option<String>,
}

impl ProfileSettings {
    pub fn share_credential(&self) -> ShareCredential {
        ShareCredential {
            username: self.share_username.clone().unwrap_or_default(),
            password: self.share_password.clone().unwrap_or_default(),
            domain: self.share_domain.clone().unwrap_or_default(),
        }
    }

    /// The create/modify body, mapped onto the API's field names.
    pub fn payload_details(&self) -> ProfilePayload {
        ProfilePayload {
            profile_name: self.name.clone(),
            protocol_type: self.protocol_type,
            share_path: self.catalog_path.clone(),
            description: self.description.clone(),
            profile_type: ProfilePayload::PROFILE_TYPE_FIRMWARE.into(),
            share_credential: self.share_credential(),
        }
    }

    /// The comparison slice of the desired state.
    pub fn desired_fields(&self) -> ProfileFields {
        ProfileFields {
            profile_name: self.name.clone(),
            protocol_type: Some(self.protocol_type),
            share_path: self.catalog_path.clone(),
            description: self.description.clone(),
        }
    }

    fn connection_probe(&self) -> TestConnectionPayload {
        TestConnectionPayload {
            check_path_only: false,
            protocol_type: self.protocol_type,
            catalog_path: self.catalog_path.clone(),
            share_credential: self.share_credential(),
        }
    }
}

/// `state: present` for a profile name that may or may not exist yet.
/// An existing name falls through to the modify handler, so repeated runs
/// converge instead of erroring on the duplicate.
pub struct CreateFirmwareRepositoryProfile<'a> {
    client: &'a dyn RestClient,
    settings: ProfileSettings,
    check_mode: bool,
}

impl<'a> CreateFirmwareRepositoryProfile<'a> {
    pub fn new(client: &'a dyn RestClient, settings: ProfileSettings, check_mode: bool) -> Self {
        Self {
            client,
            settings,
            check_mode,
        }
    }

    pub async fn execute(&self) -> Result<ModuleResult, RestError> {
        let api = FirmwareProfileApi::new(self.client);
        if let Some(existing) = api.find_by_name(&self.settings.name).await? {
            tracing::debug!(profile = %self.settings.name, id = existing.id, "profile exists, converging");
            return ModifyFirmwareRepositoryProfile::new(
                self.client,
                self.settings.clone(),
                self.check_mode,
            )
            .apply(existing)
            .await;
        }

        if self.check_mode {
            let preview = serde_json::to_value(self.settings.payload_details())?;
            return Ok(ModuleResult::changed(CHANGES_FOUND_MSG).with_diff(preview));
        }

        self.create_profile(&api).await
    }

    async fn create_profile(&self, api: &FirmwareProfileApi<'_>) -> Result<ModuleResult, RestError> {
        if !api.test_connection(&self.settings.connection_probe()).await? {
            return Ok(ModuleResult::failure(CONNECTION_FAILURE_MSG));
        }
        let response = api.create(&self.settings.payload_details()).await?;
        if !response.success {
            return Ok(ModuleResult::failure(PROFILE_CREATE_FAILED_MSG));
        }
        let profile = api.by_id(created_profile_id(&response.json_data)?).await?;
        Ok(ModuleResult::changed(PROFILE_CREATED_MSG).with_profile(serde_json::to_value(profile)?))
    }
}

/// Field-diff-driven update of an existing profile. An empty diff
/// short-circuits without a mutating call.
pub struct ModifyFirmwareRepositoryProfile<'a> {
    client: &'a dyn RestClient,
    settings: ProfileSettings,
    check_mode: bool,
}

impl<'a> ModifyFirmwareRepositoryProfile<'a> {
    pub fn new(client: &'a dyn RestClient, settings: ProfileSettings, check_mode: bool) -> Self {
        Self {
            client,
            settings,
            check_mode,
        }
    }

    pub async fn execute(&self) -> Result<ModuleResult, RestError> {
        let api = FirmwareProfileApi::new(self.client);
        match api.find_by_name(&self.settings.name).await? {
            Some(current) => self.apply(current).await,
            None => Ok(ModuleResult::failure(profile_not_found(&self.settings.name))),
        }
    }

    /// Converge against an already-fetched current state.
    pub async fn apply(&self, current: RepositoryProfile) -> Result<ModuleResult, RestError> {
        let api = FirmwareProfileApi::new(self.client);
        let diff = diff_fields(&trim_api_response(&current), &self.settings.desired_fields());
        if diff.is_empty() {
            return Ok(ModuleResult::unchanged(NO_CHANGES_FOUND_MSG));
        }
        let diff = Value::Object(diff);

        if self.check_mode {
            return Ok(ModuleResult::changed(CHANGES_FOUND_MSG).with_diff(diff));
        }

        if !api.test_connection(&self.settings.connection_probe()).await? {
            return Ok(ModuleResult::failure(CONNECTION_FAILURE_MSG));
        }
        let response = api.modify(current.id, &self.settings.payload_details()).await?;
        if !response.success {
            return Ok(ModuleResult::failure(PROFILE_MODIFY_FAILED_MSG));
        }
        let updated = api.by_id(current.id).await?;
        Ok(ModuleResult::changed(PROFILE_MODIFIED_MSG)
            .with_profile(serde_json::to_value(updated)?)
            .with_diff(diff))
    }
}

/// `state: absent`. A name that is already gone is a no-op, not an error.
pub struct DeleteFirmwareRepositoryProfile<'a> {
    client: &'a dyn RestClient,
    name: String,
    check_mode: bool,
}

impl<'a> DeleteFirmwareRepositoryProfile<'a> {
    pub fn new(client: &'a dyn RestClient, name: impl Into<String>, check_mode: bool) -> Self {
        Self {
            client,
            name: name.into(),
            check_mode,
        }
    }

    pub async fn execute(&self) -> Result<ModuleResult, RestError> {
        let api = FirmwareProfileApi::new(self.client);
        let Some(existing) = api.find_by_name(&self.name).await? else {
            return Ok(ModuleResult::unchanged(NO_CHANGES_FOUND_MSG));
        };

        if self.check_mode {
            return Ok(ModuleResult::changed(CHANGES_FOUND_MSG));
        }

        let response = api.delete(existing.id).await?;
        if response.success {
            Ok(ModuleResult::changed(PROFILE_DELETED_MSG))
        } else {
            Ok(ModuleResult::failure(PROFILE_DELETE_FAILED_MSG))
        }
    }
}

// Create answers with the new profile's numeric ID, either bare or wrapped.
fn created_profile_id(body: &Value) -> Result<i64, RestError> {
    body.as_i64()
        .or_else(|| body.get("id").and_then(Value::as_i64))
        .ok_or_else(|| {
            RestError::UnexpectedResponse(
                "profile create response did not carry the new profile id".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn created_profile_id_accepts_bare_and_wrapped_bodies() {
        assert_eq!(created_profile_id(&json!(1996)).unwrap(), 1996);
        assert_eq!(created_profile_id(&json!({"id": 1000})).unwrap(), 1000);
        assert!(created_profile_id(&json!({"status": "Success"})).is_err());
    }
}
