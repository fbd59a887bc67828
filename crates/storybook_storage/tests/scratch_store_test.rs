//! Tests for scratch artifact staging.

use storybook_error::{StorageErrorKind, StorybookErrorKind, StorybookResult};
use storybook_storage::{ArtifactKey, ScratchStore};
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn test_stage_and_read() {
    let temp_dir = TempDir::new().unwrap();
    let store = ScratchStore::new(temp_dir.path()).unwrap();
    let key = ArtifactKey::new(Uuid::new_v4(), 0, "png");

    let staged = store.stage(&key, b"Hello, panda!").await.unwrap();
    assert!(staged.path().exists());
    assert_eq!(staged.path(), store.path_for(&key));
    assert_eq!(staged.read().await.unwrap(), b"Hello, panda!");
}

#[tokio::test]
async fn test_drop_removes_artifact_and_request_dir() {
    let temp_dir = TempDir::new().unwrap();
    let store = ScratchStore::new(temp_dir.path()).unwrap();
    let request_id = Uuid::new_v4();
    let key = ArtifactKey::new(request_id, 3, "jpg");

    let staged = store.stage(&key, b"pixels").await.unwrap();
    let path = staged.path().to_path_buf();
    drop(staged);

    assert!(!path.exists());
    assert!(!temp_dir.path().join(request_id.to_string()).exists());
}

async fn stage_then_fail(store: &ScratchStore, key: &ArtifactKey) -> StorybookResult<()> {
    let staged = store.stage(key, b"doomed").await?;
    assert!(staged.path().exists());
    Err(storybook_error::StorageError::new(StorageErrorKind::FileRead(
        "simulated failure".to_string(),
    )))?
}

#[tokio::test]
async fn test_error_path_still_removes_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let store = ScratchStore::new(temp_dir.path()).unwrap();
    let key = ArtifactKey::new(Uuid::new_v4(), 1, "png");

    let result = stage_then_fail(&store, &key).await;
    assert!(result.is_err());
    assert!(!store.path_for(&key).exists());
}

#[tokio::test]
async fn test_keys_are_unique_per_request_and_page() {
    let temp_dir = TempDir::new().unwrap();
    let store = ScratchStore::new(temp_dir.path()).unwrap();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let a = store.path_for(&ArtifactKey::new(first, 0, "png"));
    let b = store.path_for(&ArtifactKey::new(first, 1, "png"));
    let c = store.path_for(&ArtifactKey::new(second, 0, "png"));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[tokio::test]
async fn test_concurrent_requests_do_not_collide() {
    let temp_dir = TempDir::new().unwrap();
    let store = ScratchStore::new(temp_dir.path()).unwrap();
    let key_a = ArtifactKey::new(Uuid::new_v4(), 0, "png");
    let key_b = ArtifactKey::new(Uuid::new_v4(), 0, "png");

    let (a, b) = tokio::join!(store.stage(&key_a, b"first"), store.stage(&key_b, b"second"));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(a.read().await.unwrap(), b"first");
    assert_eq!(b.read().await.unwrap(), b"second");
}

#[tokio::test]
async fn test_read_after_external_delete_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = ScratchStore::new(temp_dir.path()).unwrap();
    let key = ArtifactKey::new(Uuid::new_v4(), 0, "png");

    let staged = store.stage(&key, b"gone soon").await.unwrap();
    std::fs::remove_file(staged.path()).unwrap();

    let err = staged.read().await.unwrap_err();
    match err.kind() {
        StorybookErrorKind::Storage(storage) => {
            assert!(matches!(storage.kind, StorageErrorKind::NotFound(_)))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_key_display() {
    let id = Uuid::nil();
    let key = ArtifactKey::new(id, 2, "png");
    assert_eq!(
        key.to_string(),
        "00000000-0000-0000-0000-000000000000/page_2.png"
    );
    assert_eq!(key.page(), 2);
    assert_eq!(key.request_id(), id);
}
