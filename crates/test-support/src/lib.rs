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

//! Scripted [RestClient] doubles for handler tests.
//!
//! A [StubRestClient] replays a queue of canned responses in call order and
//! records every request it saw, so tests can assert both the branching on
//! response content and the exact number of round trips a handler issued.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use openmanage_rest::{RestClient, RestError, RestResponse};
use serde_json::Value;

/// One request as a handler issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub payload: Option<Value>,
}

/// Replays canned outcomes in FIFO order; panics on an unscripted request so
/// a handler that issues more calls than a test expects fails loudly.
#[derive(Default)]
pub struct StubRestClient {
    responses: Mutex<VecDeque<Result<RestResponse, RestError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubRestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, status: u16, json_data: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(response(status, json_data)));
        self
    }

    pub fn with_response_header(
        self,
        status: u16,
        json_data: Value,
        header: (&'static str, &str),
    ) -> Self {
        let mut canned = response(status, json_data);
        canned.headers.insert(
            HeaderName::from_static(header.0),
            HeaderValue::from_str(header.1).expect("test header value"),
        );
        self.responses.lock().unwrap().push_back(Ok(canned));
        self
    }

    pub fn with_error(self, err: RestError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestClient for StubRestClient {
    async fn invoke_request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<RestResponse, RestError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.clone(),
            path: path.to_string(),
            payload: payload.cloned(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted request: {method} {path}"))
    }
}

/// A canned response with the success flag derived from the status, the same
/// way the production client derives it.
pub fn response(status: u16, json_data: Value) -> RestResponse {
    let status_code = StatusCode::from_u16(status).expect("test status code");
    RestResponse {
        status_code,
        json_data,
        headers: HeaderMap::new(),
        success: status_code.is_success(),
    }
}

/// An HTTP-error outcome carrying an OMEVV-style vendor error body.
pub fn vendor_error(status: u16, error_code: &str, message: &str) -> RestError {
    RestError::http(
        StatusCode::from_u16(status).expect("test status code"),
        serde_json::json!({"errorCode": error_code, "message": message}),
    )
}
