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

// Thin wrapper over the RepositoryProfiles namespace. One method, one
// request; interpretation of the outcome stays with the handlers.

use http::Method;
use model::profile::{ProfilePayload, RepositoryProfile, TestConnectionPayload};
use openmanage_rest::{RestClient, RestError, RestResponse};

use crate::endpoints;

pub struct FirmwareProfileApi<'a> {
    client: &'a dyn RestClient,
}

impl<'a> FirmwareProfileApi<'a> {
    pub fn new(client: &'a dyn RestClient) -> Self {
        Self { client }
    }

    /// GET the full profile collection.
    pub async fn list(&self) -> Result<Vec<RepositoryProfile>, RestError> {
        let response = self
            .client
            .invoke_request(Method::GET, &endpoints::repository_profiles(), None)
            .await?;
        Ok(serde_json::from_value(response.json_data)?)
    }

    /// Look a profile up by its name, the user-facing key.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<RepositoryProfile>, RestError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|profile| profile.profile_name == name))
    }

    pub async fn by_id(&self, id: i64) -> Result<RepositoryProfile, RestError> {
        let response = self
            .client
            .invoke_request(Method::GET, &endpoints::repository_profile(id), None)
            .await?;
        Ok(serde_json::from_value(response.json_data)?)
    }

    pub async fn create(&self, payload: &ProfilePayload) -> Result<RestResponse, RestError> {
        let body = serde_json::to_value(payload)?;
        self.client
            .invoke_request(Method::POST, &endpoints::repository_profiles(), Some(&body))
            .await
    }

    pub async fn modify(
        &self,
        id: i64,
        payload: &ProfilePayload,
    ) -> Result<RestResponse, RestError> {
        let body = serde_json::to_value(payload)?;
        self.client
            .invoke_request(Method::PUT, &endpoints::repository_profile(id), Some(&body))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<RestResponse, RestError> {
        self.client
            .invoke_request(Method::DELETE, &endpoints::repository_profile(id), None)
            .await
    }

    /// Probe the catalog share before mutating; the response `success` flag
    /// is the verdict.
    pub async fn test_connection(
        &self,
        payload: &TestConnectionPayload,
    ) -> Result<bool, RestError> {
        let body = serde_json::to_value(payload)?;
        let response = self
            .client
            .invoke_request(Method::POST, &endpoints::test_connection(), Some(&body))
            .await?;
        Ok(response.success)
    }
}
