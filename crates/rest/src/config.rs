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

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::RestError;

pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one management endpoint (an iDRAC or an OMEVV
/// appliance). Flag/environment/config-file precedence is resolved by the
/// caller; this struct carries the final values only.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub validate_certs: bool,
    pub ca_path: Option<PathBuf>,
    pub timeout: Duration,
}

impl EndpointConfig {
    pub fn new(
        hostname: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
            validate_certs: true,
            ca_path: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_validate_certs(mut self, validate_certs: bool) -> Self {
        self.validate_certs = validate_certs;
        self
    }

    pub fn with_ca_path(mut self, ca_path: Option<PathBuf>) -> Self {
        self.ca_path = ca_path;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The request base URL. A bare hostname becomes `https://host:port`; a
    /// hostname that already carries a scheme is used as-is, which is how the
    /// test suite points a client at a local mock server.
    pub fn base_url(&self) -> Result<Url, RestError> {
        if self.hostname.contains("://") {
            return Ok(Url::parse(&self.hostname)?);
        }
        Ok(Url::parse(&format!(
            "https://{}:{}",
            self.hostname, self.port
        ))?)
    }
}
