use super::*;

// =============================================================================
// storage_error_to_status
// =============================================================================

#[test]
fn unknown_bucket_maps_to_400() {
    let err = StorageError::UnknownBucket("secrets".into());
    assert_eq!(storage_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn invalid_name_maps_to_400() {
    let err = StorageError::InvalidName("..".into());
    assert_eq!(storage_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn empty_object_maps_to_400() {
    assert_eq!(storage_error_to_status(&StorageError::EmptyObject), StatusCode::BAD_REQUEST);
}

#[test]
fn io_error_maps_to_500() {
    let err = StorageError::Io(std::io::Error::other("disk on fire"));
    assert_eq!(storage_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// upload handler against the filesystem (no database required)
// =============================================================================

mod handler {
    use super::*;
    use crate::services::session::SessionIdentity;
    use crate::state::test_helpers;
    use uuid::Uuid;

    fn test_auth() -> AuthAdmin {
        AuthAdmin {
            identity: SessionIdentity { id: Uuid::new_v4(), email: "tests@arrowstructures.example".into() },
            token: String::new(),
        }
    }

    #[tokio::test]
    async fn upload_persists_and_reports_public_url() {
        let state = test_helpers::test_app_state();
        let Json(stored) = upload(
            State(state.clone()),
            test_auth(),
            Path("slider-images".to_owned()),
            Query(UploadQuery { filename: "hero.jpg".into() }),
            Bytes::from_static(b"jpeg-bytes"),
        )
        .await
        .expect("upload should succeed");

        assert!(stored.public_url.starts_with("/uploads/slider-images/"));
        let on_disk = state.media_root.join("slider-images").join(&stored.object);
        assert!(on_disk.exists());
        let _ = std::fs::remove_file(on_disk);
    }

    #[tokio::test]
    async fn upload_empty_body_is_bad_request() {
        let state = test_helpers::test_app_state();
        let err = upload(
            State(state),
            test_auth(),
            Path("slider-images".to_owned()),
            Query(UploadQuery { filename: "hero.jpg".into() }),
            Bytes::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn upload_unknown_bucket_is_bad_request() {
        let state = test_helpers::test_app_state();
        let err = upload(
            State(state),
            test_auth(),
            Path("secrets".to_owned()),
            Query(UploadQuery { filename: "hero.jpg".into() }),
            Bytes::from_static(b"data"),
        )
        .await
        .unwrap_err();
        assert_eq!(err, StatusCode::BAD_REQUEST);
    }
}
