use flatpack_license::{DeviceRegistry, LicenseError, DEVICE_LIMIT};
use flatpack_store::{DeviceRecord, MemoryRemoteStore, RemoteStore};
use flatpack_types::DeviceId;
use serde_json::json;
use std::sync::Arc;

fn registry_over(store: Arc<MemoryRemoteStore>) -> DeviceRegistry {
    DeviceRegistry::new(store)
}

#[tokio::test]
async fn fresh_account_registers_first_device() {
    let store = Arc::new(MemoryRemoteStore::new());
    let registry = registry_over(store.clone());

    let device_id = registry.register_device("user@flatpack.dev").await.unwrap();

    let doc = store.fetch("user@flatpack.dev").await.unwrap().unwrap();
    let record = DeviceRecord::from_document(doc).unwrap();
    assert!(record.is_pro);
    assert_eq!(record.devices, vec![device_id]);
    assert!(record.last_login.is_some());
}

#[tokio::test]
async fn quota_allows_exactly_two_devices() {
    let store = Arc::new(MemoryRemoteStore::new());
    let registry = registry_over(store.clone());

    let first = registry.register_device("user@flatpack.dev").await.unwrap();
    let second = registry.register_device("user@flatpack.dev").await.unwrap();
    assert_ne!(first, second);

    let err = registry
        .register_device("user@flatpack.dev")
        .await
        .unwrap_err();
    assert!(matches!(err, LicenseError::DeviceLimitExceeded(n) if n == DEVICE_LIMIT));

    // The stored record is untouched by the rejected call.
    let doc = store.fetch("user@flatpack.dev").await.unwrap().unwrap();
    let record = DeviceRecord::from_document(doc).unwrap();
    assert_eq!(record.devices, vec![first, second]);
}

#[tokio::test]
async fn rejection_preserves_preexisting_record() {
    let store = Arc::new(MemoryRemoteStore::new());
    let d1 = DeviceId::new();
    let d2 = DeviceId::new();
    store
        .seed(
            "user@flatpack.dev",
            json!({
                "is_pro": true,
                "devices": [d1.to_string(), d2.to_string()],
                "last_login": "2024-11-02T09:00:00Z",
            }),
        )
        .await;

    let registry = registry_over(store.clone());
    let err = registry
        .register_device("user@flatpack.dev")
        .await
        .unwrap_err();
    assert!(matches!(err, LicenseError::DeviceLimitExceeded(_)));

    let doc = store.fetch("user@flatpack.dev").await.unwrap().unwrap();
    assert_eq!(doc["devices"], json!([d1.to_string(), d2.to_string()]));
    assert_eq!(doc["last_login"], json!("2024-11-02T09:00:00Z"));
}

#[tokio::test]
async fn registration_merges_instead_of_replacing() {
    let store = Arc::new(MemoryRemoteStore::new());
    store
        .seed(
            "user@flatpack.dev",
            json!({"devices": [], "support_tier": "gold"}),
        )
        .await;

    let registry = registry_over(store.clone());
    registry.register_device("user@flatpack.dev").await.unwrap();

    let doc = store.fetch("user@flatpack.dev").await.unwrap().unwrap();
    // Field owned by another system survives the registration write.
    assert_eq!(doc["support_tier"], json!("gold"));
    assert_eq!(doc["is_pro"], json!(true));
}

#[tokio::test]
async fn accounts_are_independent() {
    let store = Arc::new(MemoryRemoteStore::new());
    let registry = registry_over(store.clone());

    registry.register_device("a@example.com").await.unwrap();
    registry.register_device("a@example.com").await.unwrap();
    // A full quota on one account does not affect another.
    registry.register_device("b@example.com").await.unwrap();
}

#[tokio::test]
async fn malformed_remote_document_is_a_store_error() {
    let store = Arc::new(MemoryRemoteStore::new());
    store
        .seed("user@flatpack.dev", json!({"devices": ["not-a-uuid"]}))
        .await;

    let registry = registry_over(store);
    let err = registry
        .register_device("user@flatpack.dev")
        .await
        .unwrap_err();
    assert!(matches!(err, LicenseError::Store(_)));
}
