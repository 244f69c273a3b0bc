//! Property-based tests for identity and metadata synthesis.
//!
//! Generates User payloads with arbitrary attribute values, including
//! client-supplied `id` and `meta`, and checks the invariants every
//! created or replaced resource must satisfy.

use proptest::prelude::*;
use scim_directory::resource::{RequestContext, User};
use scim_directory::storage::InMemoryStorage;
use scim_directory::{ScimError, ScimServer};
use serde_json::{Value, json};

fn user_payload() -> impl Strategy<Value = Value> {
    (
        "[a-z][a-z0-9._-]{0,20}",
        proptest::option::of("[A-Za-z ]{1,30}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-zA-Z0-9-]{1,36}"),
        proptest::collection::vec("[a-z]{1,8}@example\\.com", 0..4),
    )
        .prop_map(|(user_name, display_name, active, client_id, emails)| {
            let mut payload = json!({ "userName": user_name });
            if let Some(display_name) = display_name {
                payload["displayName"] = json!(display_name);
            }
            if let Some(active) = active {
                payload["active"] = json!(active);
            }
            if let Some(client_id) = client_id {
                payload["id"] = json!(client_id);
                payload["meta"] = json!({"location": "https://client.example/"});
            }
            if !emails.is_empty() {
                let entries: Vec<Value> = emails
                    .iter()
                    .enumerate()
                    .map(|(i, e)| json!({"value": e, "primary": i == 0}))
                    .collect();
                payload["emails"] = json!(entries);
            }
            payload
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn created_users_carry_server_identity(payload in user_payload()) {
        tokio_test::block_on(async {
            let server = ScimServer::new(InMemoryStorage::new());
            let context = RequestContext::with_generated_id();
            let raw = serde_json::to_vec(&payload).unwrap();

            let user = server.users().create(&raw, &context).await.unwrap();
            let meta = user.meta.clone().unwrap();

            prop_assert!(!user.id.is_empty());
            prop_assert_ne!(Some(user.id.as_str()), payload["id"].as_str());
            prop_assert_eq!(meta.created, meta.last_modified);
            prop_assert_eq!(
                meta.location,
                format!("http://localhost:8080/v2/Users/{}", user.id)
            );
            prop_assert_eq!(user.user_name.as_deref(), payload["userName"].as_str());

            let fetched = server.users().read(&user.id, &context).await.unwrap();
            prop_assert_eq!(fetched, user);
            Ok(())
        })?;
    }

    #[test]
    fn replace_keeps_created_and_advances_last_modified(
        first in user_payload(),
        second in user_payload(),
    ) {
        tokio_test::block_on(async {
            let server = ScimServer::new(InMemoryStorage::new());
            let context = RequestContext::with_generated_id();

            let created: User = server
                .users()
                .create(&serde_json::to_vec(&first).unwrap(), &context)
                .await
                .unwrap();
            let replaced = server
                .users()
                .replace(&created.id, &serde_json::to_vec(&second).unwrap(), &context)
                .await
                .unwrap();

            let before = created.meta.unwrap();
            let after = replaced.meta.clone().unwrap();
            prop_assert_eq!(&replaced.id, &created.id);
            prop_assert_eq!(after.created, before.created);
            prop_assert!(after.last_modified > before.last_modified);
            prop_assert_eq!(after.location, before.location);

            let fetched = server.users().read(&created.id, &context).await.unwrap();
            prop_assert_eq!(fetched, replaced);
            Ok(())
        })?;
    }

    #[test]
    fn arbitrary_bytes_never_panic(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
        tokio_test::block_on(async {
            let server = ScimServer::new(InMemoryStorage::new());
            let result = server
                .groups()
                .create(&raw, &RequestContext::with_generated_id())
                .await;

            match result {
                Ok(group) => prop_assert!(!group.id.is_empty()),
                Err(e) => prop_assert!(matches!(e, ScimError::MalformedInput { .. }), "expected MalformedInput, got {:?}", e),
            }
            Ok(())
        })?;
    }
}
