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

use async_trait::async_trait;
use http::header::ACCEPT;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::config::EndpointConfig;
use crate::error::RestError;

/// One HTTP exchange, reduced to what the handlers branch on.
#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status_code: StatusCode,
    pub json_data: Value,
    pub headers: HeaderMap,
    /// Derived from the status class; the OMEVV handlers branch on this.
    pub success: bool,
}

impl RestResponse {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    }
}

/// The capability the handlers are built over. Exactly one round trip per
/// call; no retries, no connection state beyond the underlying pool.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Perform one request against the endpoint.
    ///
    /// Statuses below 400 come back as a [RestResponse]; 4xx/5xx statuses
    /// surface as [RestError::Http] with the vendor error body attached, so
    /// callers that need to branch on an error status match on that variant.
    async fn invoke_request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<RestResponse, RestError>;
}

/// Production [RestClient] over reqwest with rustls.
///
/// Credentials ride as HTTP basic auth on every request; endpoints that hand
/// out tokens instead (the Redfish session create) simply ignore them.
pub struct HttpRestClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: String,
    extra_headers: HeaderMap,
}

impl HttpRestClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, RestError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout);
        if !config.validate_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(ca_path) = &config.ca_path {
            let pem = std::fs::read(ca_path)?;
            let cert = reqwest::Certificate::from_pem(&pem).map_err(RestError::Transport)?;
            builder = builder.add_root_certificate(cert);
        }
        let http = builder.build().map_err(RestError::Transport)?;
        Ok(Self {
            http,
            base_url: config.base_url()?,
            username: config.username.clone(),
            password: config.password.clone(),
            extra_headers: HeaderMap::new(),
        })
    }

    /// Attach a header to every request this client sends, e.g. the OMEVV
    /// vCenter identifier.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.extra_headers.insert(name, value);
        self
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn invoke_request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<RestResponse, RestError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%method, %url, "invoking endpoint request");

        let mut request = self
            .http
            .request(method, url)
            .headers(self.extra_headers.clone())
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json");
        if let Some(body) = payload {
            request = request.json(body);
        }

        let response = request.send().await.map_err(RestError::Transport)?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await.map_err(RestError::Transport)?;
        let json_data = parse_body(&text);

        if status.is_client_error() || status.is_server_error() {
            tracing::debug!(%status, "endpoint returned error status");
            return Err(RestError::http(status, json_data));
        }

        Ok(RestResponse {
            status_code: status,
            json_data,
            headers,
            success: status.is_success(),
        })
    }
}

// Mutating calls routinely answer with an empty body, and a few firmware
// endpoints answer plain text; neither is an error at this layer.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        assert_eq!(parse_body("1000"), Value::from(1000));
        assert_eq!(parse_body("catalog OK"), Value::String("catalog OK".into()));
    }
}
