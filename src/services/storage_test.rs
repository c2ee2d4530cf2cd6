use super::*;

fn test_root() -> PathBuf {
    std::env::temp_dir().join(format!("arrow-admin-storage-{}", Uuid::new_v4()))
}

// =============================================================================
// sanitize_filename
// =============================================================================

#[test]
fn sanitize_filename_keeps_simple_names() {
    assert_eq!(sanitize_filename("logo.png"), Some("logo.png".to_owned()));
}

#[test]
fn sanitize_filename_replaces_path_separators() {
    assert_eq!(sanitize_filename("a/b\\c.png"), Some("a_b_c.png".to_owned()));
}

#[test]
fn sanitize_filename_rejects_dot_dot() {
    assert_eq!(sanitize_filename(".."), None);
}

#[test]
fn sanitize_filename_rejects_empty() {
    assert_eq!(sanitize_filename("   "), None);
}

#[test]
fn sanitize_filename_trims_leading_dots() {
    assert_eq!(sanitize_filename("..hidden.png"), Some("hidden.png".to_owned()));
}

#[test]
fn sanitize_filename_rejects_all_underscores() {
    assert_eq!(sanitize_filename("///"), None);
}

// =============================================================================
// unique_object_name / public_url
// =============================================================================

#[test]
fn unique_object_name_keeps_filename_suffix() {
    let name = unique_object_name("logo.png");
    assert!(name.ends_with("-logo.png"));
}

#[test]
fn unique_object_name_two_calls_differ() {
    assert_ne!(unique_object_name("logo.png"), unique_object_name("logo.png"));
}

#[test]
fn public_url_matches_serve_mount() {
    assert_eq!(public_url("client-images", "abc-logo.png"), "/uploads/client-images/abc-logo.png");
}

// =============================================================================
// is_known_bucket
// =============================================================================

#[test]
fn known_buckets_accepted() {
    for bucket in BUCKETS {
        assert!(is_known_bucket(bucket), "{bucket} should be known");
    }
}

#[test]
fn unknown_bucket_rejected() {
    assert!(!is_known_bucket("secrets"));
}

// =============================================================================
// save_object
// =============================================================================

#[tokio::test]
async fn save_object_writes_file_and_reports_url() {
    let root = test_root();
    let stored = save_object(&root, "slider-images", "hero.jpg", b"jpeg-bytes")
        .await
        .expect("save should succeed");

    assert_eq!(stored.bucket, "slider-images");
    assert!(stored.object.ends_with("-hero.jpg"));
    assert_eq!(stored.public_url, format!("/uploads/slider-images/{}", stored.object));

    let on_disk = tokio::fs::read(root.join("slider-images").join(&stored.object))
        .await
        .expect("file should exist");
    assert_eq!(on_disk, b"jpeg-bytes");

    let _ = tokio::fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn save_object_rejects_unknown_bucket() {
    let root = test_root();
    let err = save_object(&root, "not-a-bucket", "x.png", b"data").await.unwrap_err();
    assert!(matches!(err, StorageError::UnknownBucket(_)));
    assert!(!root.exists(), "nothing should be created for a rejected bucket");
}

#[tokio::test]
async fn save_object_rejects_empty_body() {
    let root = test_root();
    let err = save_object(&root, "client-images", "logo.png", b"").await.unwrap_err();
    assert!(matches!(err, StorageError::EmptyObject));
    assert!(!root.exists(), "nothing should be created for an empty body");
}

#[tokio::test]
async fn save_object_rejects_traversal_name() {
    let root = test_root();
    let err = save_object(&root, "client-images", "..", b"data").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidName(_)));
}
