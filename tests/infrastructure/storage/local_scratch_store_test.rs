use bytes::Bytes;

use medivoice::application::ports::{ScratchStore, ScratchStoreError};
use medivoice::domain::ArtifactName;
use medivoice::infrastructure::storage::LocalScratchStore;

fn create_test_store() -> (tempfile::TempDir, LocalScratchStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_stored_artifact_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let name = ArtifactName::new("recording_1.wav").unwrap();

    store
        .put(&name, Bytes::from_static(b"recorded audio"))
        .await
        .unwrap();

    let fetched = store.fetch(&name).await.unwrap();
    assert_eq!(fetched, b"recorded audio");
}

#[tokio::test]
async fn given_missing_artifact_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();
    let name = ArtifactName::new("recording_404.wav").unwrap();

    let result = store.fetch(&name).await;

    assert!(matches!(result, Err(ScratchStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_artifact_name_when_resolving_path_then_lives_under_the_root() {
    let (dir, store) = create_test_store();
    let name = ArtifactName::new("response_9.wav").unwrap();

    assert_eq!(
        store.absolute_path(&name),
        dir.path().join("response_9.wav")
    );
}

#[test]
fn given_missing_nested_root_when_constructing_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("scratch").join("medivoice");

    LocalScratchStore::new(&nested).unwrap();

    assert!(nested.is_dir());
}
