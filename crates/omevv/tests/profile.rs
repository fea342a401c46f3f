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

// tests/profile.rs
// Convergence behavior of the profile handlers against a scripted RestClient.

use assert_json_diff::assert_json_eq;
use http::Method;
use model::{ModuleResult, ProtocolType};
use omevv::{
    CreateFirmwareRepositoryProfile, DeleteFirmwareRepositoryProfile,
    ModifyFirmwareRepositoryProfile, ProfileSettings,
};
use openmanage_test_support::{StubRestClient, vendor_error};
use serde_json::json;

const SHARE_PATH: &str = "https://downloads.dell.com/catalog/catalog.xml.gz";
const PROFILES_URL: &str = "/omevv/GatewayService/v1/RepositoryProfiles";

fn settings() -> ProfileSettings {
    ProfileSettings {
        name: "Dell Default Catalog".into(),
        description: Some("Latest Firmware From Dell".into()),
        protocol_type: ProtocolType::Https,
        catalog_path: SHARE_PATH.into(),
        share_username: None,
        share_password: None,
        share_domain: None,
    }
}

fn existing_profile() -> serde_json::Value {
    json!({
        "id": 1000,
        "profileName": "Dell Default Catalog",
        "protocolType": "HTTPS",
        "sharePath": SHARE_PATH,
        "description": "Latest Firmware From Dell",
        "status": "Success",
    })
}

#[test]
fn payload_details_maps_user_names_onto_wire_names() {
    let payload = serde_json::to_value(settings().payload_details()).unwrap();
    assert_json_eq!(
        payload,
        json!({
            "profileName": "Dell Default Catalog",
            "protocolType": "HTTPS",
            "sharePath": SHARE_PATH,
            "description": "Latest Firmware From Dell",
            "profileType": "Firmware",
            "shareCredential": {"username": "", "password": "", "domain": ""},
        })
    );
}

#[tokio::test]
async fn create_issues_exactly_one_create_call_when_the_name_is_absent() {
    let client = StubRestClient::new()
        .with_response(200, json!([]))
        .with_response(200, json!({}))
        .with_response(200, json!(1000))
        .with_response(200, existing_profile());

    let result = CreateFirmwareRepositoryProfile::new(&client, settings(), false)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(
        result.msg,
        "Successfully created the OMEVV firmware repository profile."
    );
    assert_eq!(result.profile, Some(existing_profile()));

    let calls = client.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0].method, Method::GET);
    assert_eq!(calls[0].path, PROFILES_URL);
    assert_eq!(calls[1].method, Method::POST);
    assert_eq!(calls[1].path, format!("{PROFILES_URL}/TestConnection"));
    assert_eq!(calls[2].method, Method::POST);
    assert_eq!(calls[2].path, PROFILES_URL);
    assert_eq!(calls[3].path, format!("{PROFILES_URL}/1000"));
}

#[tokio::test]
async fn create_reports_failure_when_the_success_flag_is_false() {
    let client = StubRestClient::new()
        .with_response(200, json!([]))
        .with_response(200, json!({}))
        .with_response(304, json!(null));

    let result = CreateFirmwareRepositoryProfile::new(&client, settings(), false)
        .execute()
        .await
        .unwrap();

    assert!(result.failed);
    assert_eq!(
        result.msg,
        "Unable to create the OMEVV firmware repository profile."
    );
}

#[tokio::test]
async fn create_fails_without_mutating_when_the_share_is_unreachable() {
    let client = StubRestClient::new()
        .with_response(200, json!([]))
        .with_response(304, json!(null));

    let result = CreateFirmwareRepositoryProfile::new(&client, settings(), false)
        .execute()
        .await
        .unwrap();

    assert!(result.failed);
    assert_eq!(
        result.msg,
        "Unable to complete the operation. Please check the connection details."
    );
    // Lookup + probe only; the create POST never went out.
    assert_eq!(client.calls().len(), 2);
}

#[tokio::test]
async fn create_in_check_mode_previews_the_payload_without_mutating() {
    let client = StubRestClient::new().with_response(200, json!([]));

    let result = CreateFirmwareRepositoryProfile::new(&client, settings(), true)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "Changes found to be applied.");
    assert_eq!(
        result.diff,
        Some(serde_json::to_value(settings().payload_details()).unwrap())
    );
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn create_with_an_existing_identical_profile_reports_no_changes() {
    let client = StubRestClient::new().with_response(200, json!([existing_profile()]));

    let result = CreateFirmwareRepositoryProfile::new(&client, settings(), false)
        .execute()
        .await
        .unwrap();

    assert!(!result.changed);
    assert!(!result.failed);
    assert_eq!(result.msg, "No changes found to be applied.");
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn create_with_an_existing_divergent_profile_falls_through_to_modify() {
    let mut desired = settings();
    desired.catalog_path = "https://mirror.internal/catalog/catalog.xml.gz".into();

    let updated = json!({
        "id": 1000,
        "profileName": "Dell Default Catalog",
        "protocolType": "HTTPS",
        "sharePath": "https://mirror.internal/catalog/catalog.xml.gz",
        "description": "Latest Firmware From Dell",
        "status": "Success",
    });
    let client = StubRestClient::new()
        .with_response(200, json!([existing_profile()]))
        .with_response(200, json!({}))
        .with_response(200, json!(null))
        .with_response(200, updated.clone());

    let result = CreateFirmwareRepositoryProfile::new(&client, desired, false)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(
        result.msg,
        "Successfully modified the OMEVV firmware repository profile."
    );
    assert_eq!(result.profile, Some(updated));

    let calls = client.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[2].method, Method::PUT);
    assert_eq!(calls[2].path, format!("{PROFILES_URL}/1000"));
}

#[tokio::test]
async fn modify_with_an_empty_diff_short_circuits() {
    let client = StubRestClient::new().with_response(200, json!([existing_profile()]));

    let result = ModifyFirmwareRepositoryProfile::new(&client, settings(), false)
        .execute()
        .await
        .unwrap();

    assert!(!result.changed);
    assert_eq!(result.msg, "No changes found to be applied.");
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn modify_issues_one_update_and_reports_the_changed_fields() {
    let mut desired = settings();
    desired.description = Some("Mirrored catalog".into());

    let updated = json!({
        "id": 1000,
        "profileName": "Dell Default Catalog",
        "protocolType": "HTTPS",
        "sharePath": SHARE_PATH,
        "description": "Mirrored catalog",
        "status": "Success",
    });
    let client = StubRestClient::new()
        .with_response(200, json!([existing_profile()]))
        .with_response(200, json!({}))
        .with_response(200, json!(null))
        .with_response(200, updated);

    let result = ModifyFirmwareRepositoryProfile::new(&client, desired, false)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(result.diff, Some(json!({"description": "Mirrored catalog"})));

    let puts: Vec<_> = client
        .calls()
        .into_iter()
        .filter(|call| call.method == Method::PUT)
        .collect();
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].payload.as_ref().unwrap()["description"],
        json!("Mirrored catalog")
    );
}

#[tokio::test]
async fn modify_in_check_mode_reports_the_diff_without_mutating() {
    let mut desired = settings();
    desired.description = Some("Mirrored catalog".into());

    let client = StubRestClient::new().with_response(200, json!([existing_profile()]));

    let result = ModifyFirmwareRepositoryProfile::new(&client, desired, true)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "Changes found to be applied.");
    assert_eq!(result.diff, Some(json!({"description": "Mirrored catalog"})));
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn modify_of_a_missing_profile_is_a_failure() {
    let client = StubRestClient::new().with_response(200, json!([]));

    let result = ModifyFirmwareRepositoryProfile::new(&client, settings(), false)
        .execute()
        .await
        .unwrap();

    assert!(result.failed);
    assert_eq!(
        result.msg,
        "Unable to complete the operation because the 'Dell Default Catalog' is not a valid 'profile_name'."
    );
}

#[tokio::test]
async fn delete_of_a_missing_profile_is_a_noop() {
    let client = StubRestClient::new().with_response(200, json!([]));

    let result = DeleteFirmwareRepositoryProfile::new(&client, "Dell Default Catalog", false)
        .execute()
        .await
        .unwrap();

    assert!(!result.changed);
    assert!(!result.failed);
    assert_eq!(result.msg, "No changes found to be applied.");
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn delete_of_an_existing_profile_issues_one_delete_call() {
    let client = StubRestClient::new()
        .with_response(200, json!([existing_profile()]))
        .with_response(200, json!(null));

    let result = DeleteFirmwareRepositoryProfile::new(&client, "Dell Default Catalog", false)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(
        result.msg,
        "Successfully deleted the OMEVV firmware repository profile."
    );

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].method, Method::DELETE);
    assert_eq!(calls[1].path, format!("{PROFILES_URL}/1000"));
}

#[tokio::test]
async fn delete_in_check_mode_predicts_changes_without_mutating() {
    let client = StubRestClient::new().with_response(200, json!([existing_profile()]));

    let result = DeleteFirmwareRepositoryProfile::new(&client, "Dell Default Catalog", true)
        .execute()
        .await
        .unwrap();

    assert!(result.changed);
    assert_eq!(result.msg, "Changes found to be applied.");
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn already_in_requested_state_surfaces_as_a_benign_no_change() {
    let client = StubRestClient::new()
        .with_response(200, json!([existing_profile()]))
        .with_error(vendor_error(400, "18001", "Profile already in the requested state."));

    let err = DeleteFirmwareRepositoryProfile::new(&client, "Dell Default Catalog", false)
        .execute()
        .await
        .unwrap_err();

    let report = ModuleResult::from_rest_error(&err);
    assert!(!report.changed);
    assert!(!report.failed);
    assert_eq!(report.msg, "Profile already in the requested state.");
}
