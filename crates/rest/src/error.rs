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

// Error types for the REST seam. The taxonomy is deliberately flat: an
// invocation either never reached the endpoint (Transport), reached it and got
// an HTTP error status (Http, with the vendor error body attached), or got a
// payload that does not match the expected shape.

use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// RestError covers every way a single invoke_request round trip can fail.
// Nothing is retried; the caller turns each variant into a final report.
#[derive(Error, Debug)]
pub enum RestError {
    // Transport occurs before any HTTP status was obtained
    // (DNS, TLS handshake, connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    // Http occurs when the endpoint answered with a 4xx/5xx status.
    // The vendor error body, when present, rides along.
    #[error("the endpoint returned HTTP {status}{}", message_suffix(error))]
    Http {
        status: StatusCode,
        error: Option<ErrorBody>,
        body: Value,
    },

    // UnexpectedResponse occurs when a 2xx payload does not carry the
    // fields the handler needs.
    #[error("unexpected response payload: {0}")]
    UnexpectedResponse(String),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("error while handling json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error. Does the file exist? {0}")]
    Io(#[from] std::io::Error),
}

impl RestError {
    /// Build the Http variant, extracting the vendor error body from the
    /// response payload when one is present.
    pub fn http(status: StatusCode, body: Value) -> Self {
        Self::Http {
            status,
            error: ErrorBody::from_json(&body),
            body,
        }
    }

    /// The vendor error code embedded in an HTTP error response, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Http {
                error: Some(body), ..
            } => body.error_code.as_deref(),
            _ => None,
        }
    }

    /// The human-readable message embedded in an HTTP error response, if any.
    pub fn endpoint_message(&self) -> Option<&str> {
        match self {
            Self::Http {
                error: Some(body), ..
            } => body.message.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Vendor error body embedded in HTTP error responses.
///
/// OMEVV reports a flat `{"errorCode": "...", "message": "..."}` object.
/// Redfish wraps the equivalent under an `error` object with the message in
/// `@Message.ExtendedInfo`. Both shapes reduce to this pair.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn from_json(body: &Value) -> Option<Self> {
        let obj = body.as_object()?;
        if obj.contains_key("errorCode") || obj.contains_key("message") {
            return serde_json::from_value(body.clone()).ok();
        }
        let error = obj.get("error")?;
        let message = error
            .get("@Message.ExtendedInfo")
            .and_then(|info| info.get(0))
            .and_then(|entry| entry.get("Message"))
            .or_else(|| error.get("message"))
            .and_then(Value::as_str)
            .map(ToString::to_string);
        let error_code = error
            .get("code")
            .and_then(Value::as_str)
            .map(ToString::to_string);
        Some(Self {
            error_code,
            message,
        })
    }
}

fn message_suffix(error: &Option<ErrorBody>) -> String {
    match error.as_ref().and_then(|body| body.message.as_deref()) {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}
