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

// tests/client.rs
// Round-trip tests for HttpRestClient against a local mock server.

use http::{HeaderName, HeaderValue, Method};
use openmanage_rest::{EndpointConfig, HttpRestClient, RestClient, RestError};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> HttpRestClient {
    let config = EndpointConfig::new(server.url(), "admin", "password");
    HttpRestClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn get_returns_status_json_and_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/redfish/v1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-test-marker", "present")
        .with_body(r#"{"Links": {"Sessions": {"@odata.id": "/redfish/v1/SessionService/Sessions"}}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .invoke_request(Method::GET, "/redfish/v1", None)
        .await
        .expect("request should succeed");

    mock.assert_async().await;
    assert!(response.success);
    assert_eq!(response.status_code, 200);
    assert_eq!(response.header("x-test-marker").as_deref(), Some("present"));
    assert_eq!(
        response.json_data["Links"]["Sessions"]["@odata.id"],
        "/redfish/v1/SessionService/Sessions"
    );
}

#[tokio::test]
async fn post_sends_json_payload_and_basic_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/redfish/v1/SessionService/Sessions")
        .match_header("authorization", mockito::Matcher::Regex("^Basic ".into()))
        .match_header("accept", "application/json")
        .match_body(mockito::Matcher::Json(
            json!({"UserName": "admin", "Password": "password"}),
        ))
        .with_status(201)
        .with_header("X-Auth-Token", "token123")
        .with_body(r#"{"Id": "74"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .invoke_request(
            Method::POST,
            "/redfish/v1/SessionService/Sessions",
            Some(&json!({"UserName": "admin", "Password": "password"})),
        )
        .await
        .expect("request should succeed");

    mock.assert_async().await;
    assert_eq!(response.status_code, 201);
    assert_eq!(response.header("X-Auth-Token").as_deref(), Some("token123"));
}

#[tokio::test]
async fn error_status_surfaces_vendor_error_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/omevv/GatewayService/v1/RepositoryProfiles")
        .with_status(400)
        .with_body(r#"{"errorCode": "18001", "message": "Profile already exists."}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .invoke_request(
            Method::POST,
            "/omevv/GatewayService/v1/RepositoryProfiles",
            Some(&json!({"profileName": "test"})),
        )
        .await
        .expect_err("400 should map to RestError::Http");

    assert!(matches!(err, RestError::Http { .. }));
    assert_eq!(err.error_code(), Some("18001"));
    assert_eq!(err.endpoint_message(), Some("Profile already exists."));
}

#[tokio::test]
async fn extra_headers_ride_on_every_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/omevv/GatewayService/v1/RepositoryProfiles")
        .match_header("x_omivv-api-vcenter-identifier", "vc-uuid-1")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server).with_header(
        HeaderName::from_static("x_omivv-api-vcenter-identifier"),
        HeaderValue::from_static("vc-uuid-1"),
    );
    client
        .invoke_request(Method::GET, "/omevv/GatewayService/v1/RepositoryProfiles", None)
        .await
        .expect("request should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn empty_delete_body_parses_as_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/omevv/GatewayService/v1/RepositoryProfiles/1996")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .invoke_request(
            Method::DELETE,
            "/omevv/GatewayService/v1/RepositoryProfiles/1996",
            None,
        )
        .await
        .expect("request should succeed");

    assert!(response.success);
    assert!(response.json_data.is_null());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Nothing listens on this port.
    let config = EndpointConfig::new("http://127.0.0.1:1", "admin", "password");
    let client = HttpRestClient::new(&config).expect("client should build");

    let err = client
        .invoke_request(Method::GET, "/redfish/v1", None)
        .await
        .expect_err("connection refused should map to RestError::Transport");
    assert!(err.is_transport());
}
