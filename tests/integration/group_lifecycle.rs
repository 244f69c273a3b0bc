//! Group lifecycle over HTTP.

use crate::common::builders::GroupBuilder;
use crate::common::{create_test_handler, json_request, request, response_json};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_members_round_trip() {
    let handler = create_test_handler();

    let response = handler
        .handle(json_request(
            Method::POST,
            "/Groups",
            &json!({"displayName": "eng", "members": [{"value": "u1"}]}),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let group = response_json(&response);
    assert_eq!(group["displayName"], "eng");
    assert_eq!(group["members"], json!([{"value": "u1"}]));
    assert_eq!(
        group["schemas"],
        json!(["urn:ietf:params:scim:schemas:core:2.0:Group"])
    );
    assert_eq!(group["meta"]["resourceType"], "Group");
}

#[tokio::test]
async fn test_member_reference_uses_dollar_ref() {
    let handler = create_test_handler();
    let payload = GroupBuilder::new("admins")
        .with_member_details("u1", "Alice", "https://example.com/v2/Users/u1")
        .with_member("u2")
        .build();

    let response = handler
        .handle(json_request(Method::POST, "/Groups", &payload))
        .await;
    let group = response_json(&response);

    assert_eq!(group["members"], payload["members"]);
    assert_eq!(group["members"][0]["$ref"], "https://example.com/v2/Users/u1");
}

#[tokio::test]
async fn test_legacy_ref_key_is_accepted() {
    let handler = create_test_handler();

    let response = handler
        .handle(json_request(
            Method::POST,
            "/Groups",
            &json!({"displayName": "ops", "members": [{"value": "u1", "ref": "/Users/u1"}]}),
        ))
        .await;
    let group = response_json(&response);

    assert_eq!(group["members"][0]["$ref"], "/Users/u1");
    assert!(group["members"][0].get("ref").is_none());
}

#[tokio::test]
async fn test_group_lifecycle() {
    let handler = create_test_handler();

    let created = handler
        .handle(json_request(
            Method::POST,
            "/v2/Groups",
            &GroupBuilder::new("eng").with_member("u1").build(),
        ))
        .await;
    let group = response_json(&created);
    let path = format!("/v2/Groups/{}", group["id"].as_str().unwrap());

    let replaced = handler
        .handle(json_request(
            Method::PUT,
            &path,
            &GroupBuilder::new("engineering")
                .with_member("u1")
                .with_member("u2")
                .build(),
        ))
        .await;
    assert_eq!(replaced.status(), StatusCode::OK);
    let updated = response_json(&replaced);
    assert_eq!(updated["displayName"], "engineering");
    assert_eq!(updated["members"].as_array().unwrap().len(), 2);
    assert_eq!(updated["meta"]["created"], group["meta"]["created"]);

    let fetched = handler.handle(request(Method::GET, &path, "")).await;
    assert_eq!(response_json(&fetched), updated);

    assert_eq!(
        handler.handle(request(Method::DELETE, &path, "")).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        handler.handle(request(Method::DELETE, &path, "")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_users_and_groups_do_not_share_ids() {
    let handler = create_test_handler();

    let created = handler
        .handle(json_request(Method::POST, "/Users", &json!({"userName": "alice"})))
        .await;
    let id = response_json(&created)["id"].as_str().unwrap().to_string();

    let as_group = handler
        .handle(request(Method::GET, &format!("/Groups/{}", id), ""))
        .await;
    assert_eq!(as_group.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_null_members_are_accepted() {
    let handler = create_test_handler();

    let created = handler
        .handle(json_request(
            Method::POST,
            "/Groups",
            &json!({"displayName": "eng", "members": null}),
        ))
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let group = response_json(&created);
    assert!(group.get("members").is_none());

    let path = format!("/Groups/{}", group["id"].as_str().unwrap());
    let replaced = handler
        .handle(json_request(
            Method::PUT,
            &path,
            &json!({"displayName": "eng", "members": null, "schemas": null}),
        ))
        .await;
    assert_eq!(replaced.status(), StatusCode::OK);
}
