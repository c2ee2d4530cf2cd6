use super::*;

#[test]
fn identity_round_trip() {
    let identity = Identity { id: "abc".into(), email: "admin@arrowstructures.example".into() };
    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, identity);
}

#[test]
fn career_deserializes_numeric_salaries() {
    let career: Career = serde_json::from_str(
        r#"{"id":"1","job_title":"Structural Engineer","min_salary":50000.0,"max_salary":80000.0}"#,
    )
    .unwrap();
    assert_eq!(career.min_salary, Some(50000.0));
    assert_eq!(career.max_salary, Some(80000.0));
    assert!(!career.remote_work_available);
}

#[test]
fn career_missing_salaries_default_to_none() {
    let career: Career = serde_json::from_str(r#"{"id":"1","job_title":"Foreman"}"#).unwrap();
    assert_eq!(career.min_salary, None);
    assert_eq!(career.max_salary, None);
}

#[test]
fn blog_missing_optional_fields_default() {
    let blog: Blog = serde_json::from_str(r#"{"id":"1","title":"Groundbreaking"}"#).unwrap();
    assert_eq!(blog.category, None);
    assert_eq!(blog.image, "");
    assert!(!blog.featured_post);
}

#[test]
fn client_record_round_trip_preserves_logo_url() {
    let record = ClientRecord {
        id: "1".into(),
        client_name: "Acme Builders".into(),
        client_logo_url: "/uploads/client-images/x-logo.png".into(),
        ..ClientRecord::default()
    };
    let json = serde_json::to_string(&record).unwrap();
    let restored: ClientRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
}
