//! Many in-flight requests against one shared store.

use crate::common::builders::UserBuilder;
use crate::common::{create_test_handler, json_request, request, response_json};
use futures::future::join_all;
use http::{Method, StatusCode};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let handler = create_test_handler();

    let creates = (0..50).map(|i| {
        let handler = &handler;
        async move {
            let payload = UserBuilder::new(&format!("user{}", i)).build();
            handler
                .handle(json_request(Method::POST, "/Users", &payload))
                .await
        }
    });
    let responses = join_all(creates).await;

    let ids: HashSet<String> = responses
        .iter()
        .map(|response| {
            assert_eq!(response.status(), StatusCode::CREATED);
            response_json(response)["id"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(handler.server().storage().count("users").await, 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_spawned_requests_share_one_store() {
    let handler = Arc::new(create_test_handler());

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                let (path, body) = if i % 2 == 0 {
                    ("/Users", json!({"userName": format!("user{}", i)}))
                } else {
                    ("/Groups", json!({"displayName": format!("group{}", i)}))
                };
                let created = handler.handle(json_request(Method::POST, path, &body)).await;
                let id = response_json(&created)["id"].as_str().unwrap().to_string();

                let fetched = handler
                    .handle(request(Method::GET, &format!("{}/{}", path, id), ""))
                    .await;
                assert_eq!(fetched.status(), StatusCode::OK);
                assert_eq!(response_json(&fetched), response_json(&created));
            })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("task panicked");
    }

    let stats = handler.server().storage().stats().await;
    assert_eq!(stats.total_resources, 20);
    assert_eq!(handler.server().storage().count("groups").await, 10);
}

#[tokio::test]
async fn test_concurrent_replaces_last_write_wins() {
    let handler = create_test_handler();

    let created = handler
        .handle(json_request(Method::POST, "/Users", &json!({"userName": "base"})))
        .await;
    let user = response_json(&created);
    let path = format!("/Users/{}", user["id"].as_str().unwrap());

    let replaces = (0..10).map(|i| {
        let handler = &handler;
        let path = path.clone();
        async move {
            handler
                .handle(json_request(
                    Method::PUT,
                    &path,
                    &json!({"userName": format!("name{}", i)}),
                ))
                .await
        }
    });
    let responses = join_all(replaces).await;
    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));

    let final_state = response_json(&handler.handle(request(Method::GET, &path, "")).await);
    let names: HashSet<String> = (0..10).map(|i| format!("name{}", i)).collect();
    assert!(names.contains(final_state["userName"].as_str().unwrap()));
    assert_eq!(final_state["meta"]["created"], user["meta"]["created"]);
}

#[tokio::test]
async fn test_concurrent_deletes_remove_exactly_once() {
    let handler = create_test_handler();

    let created = handler
        .handle(json_request(Method::POST, "/Groups", &json!({"displayName": "eng"})))
        .await;
    let path = format!("/Groups/{}", response_json(&created)["id"].as_str().unwrap());

    let deletes = (0..5).map(|_| handler.handle(request(Method::DELETE, &path, "")));
    let statuses: Vec<StatusCode> = join_all(deletes)
        .await
        .iter()
        .map(|r| r.status())
        .collect();

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::NOT_FOUND)
            .count(),
        4
    );
}
