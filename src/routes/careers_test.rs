use super::*;

// =============================================================================
// Body deserialization — the wire contract the client form converter targets.
// =============================================================================

#[test]
fn new_career_accepts_numeric_salaries() {
    let body: NewCareer = serde_json::from_str(
        r#"{"job_title":"Structural Engineer","min_salary":50000,"max_salary":80000}"#,
    )
    .unwrap();
    assert_eq!(body.job_title, "Structural Engineer");
    assert_eq!(body.min_salary, Some(50000.0));
    assert_eq!(body.max_salary, Some(80000.0));
}

#[test]
fn new_career_salaries_default_to_null() {
    let body: NewCareer = serde_json::from_str(r#"{"job_title":"Site Foreman"}"#).unwrap();
    assert_eq!(body.min_salary, None);
    assert_eq!(body.max_salary, None);
    assert!(!body.remote_work_available);
    assert!(!body.publish_immediately);
}

#[test]
fn new_career_rejects_string_salary() {
    let parsed = serde_json::from_str::<NewCareer>(r#"{"job_title":"Engineer","min_salary":"50000"}"#);
    assert!(parsed.is_err(), "string salaries must be converted before the write");
}

#[test]
fn career_patch_all_fields_optional() {
    let patch: CareerPatch = serde_json::from_str("{}").unwrap();
    assert!(patch.job_title.is_none());
    assert!(patch.min_salary.is_none());
    assert!(patch.remote_work_available.is_none());
}

// =============================================================================
// Round-trip and delete idempotence against a live database.
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::session::SessionIdentity;
    use crate::state::test_helpers;

    fn test_auth() -> AuthAdmin {
        AuthAdmin {
            identity: SessionIdentity { id: Uuid::new_v4(), email: "tests@arrowstructures.example".into() },
            token: String::new(),
        }
    }

    fn sample_posting() -> NewCareer {
        NewCareer {
            job_title: "Structural Engineer".into(),
            department: "engineering".into(),
            location: "Coimbatore".into(),
            job_type: "full-time".into(),
            job_description: "Design and review structural drawings.".into(),
            requirements: "B.E. Civil, 5 years experience".into(),
            benefits: "Health insurance".into(),
            min_salary: Some(50000.0),
            max_salary: Some(80000.0),
            remote_work_available: false,
            publish_immediately: true,
        }
    }

    #[tokio::test]
    async fn insert_then_fetch_returns_equal_record() {
        let state = test_helpers::live_app_state().await;

        let (status, Json(created)) =
            create(State(state.clone()), test_auth(), Json(sample_posting())).await.expect("insert");
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = fetch(State(state.clone()), test_auth(), Path(created.id)).await.expect("fetch");
        assert_eq!(fetched.job_title, "Structural Engineer");
        assert_eq!(fetched.department, "engineering");
        assert_eq!(fetched.min_salary, Some(50000.0));
        assert_eq!(fetched.max_salary, Some(80000.0));
        assert!(fetched.publish_immediately);

        let _ = remove(State(state), test_auth(), Path(created.id)).await;
    }

    #[tokio::test]
    async fn delete_missing_id_is_noop_success() {
        let state = test_helpers::live_app_state().await;

        let Json(outcome) = remove(State(state), test_auth(), Path(Uuid::new_v4())).await.expect("delete");
        assert_eq!(outcome["ok"], true);
        assert_eq!(outcome["deleted"], false);
    }

    #[tokio::test]
    async fn delete_twice_second_reports_nothing_deleted() {
        let state = test_helpers::live_app_state().await;
        let (_, Json(created)) =
            create(State(state.clone()), test_auth(), Json(sample_posting())).await.expect("insert");

        let Json(first) = remove(State(state.clone()), test_auth(), Path(created.id)).await.expect("delete");
        assert_eq!(first["deleted"], true);

        let Json(second) = remove(State(state), test_auth(), Path(created.id)).await.expect("delete");
        assert_eq!(second["ok"], true);
        assert_eq!(second["deleted"], false);
    }

    #[tokio::test]
    async fn fetch_missing_id_is_not_found() {
        let state = test_helpers::live_app_state().await;
        let err = fetch(State(state), test_auth(), Path(Uuid::new_v4())).await.unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }
}
