use super::*;

// =============================================================================
// parse_optional_salary
// =============================================================================

#[test]
fn plain_number_parses() {
    assert_eq!(parse_optional_salary("50000"), Ok(Some(50000.0)));
    assert_eq!(parse_optional_salary("80000"), Ok(Some(80000.0)));
}

#[test]
fn decimal_number_parses() {
    assert_eq!(parse_optional_salary("50000.50"), Ok(Some(50000.5)));
}

#[test]
fn whitespace_is_trimmed() {
    assert_eq!(parse_optional_salary("  60000 "), Ok(Some(60000.0)));
}

#[test]
fn empty_input_is_null() {
    assert_eq!(parse_optional_salary(""), Ok(None));
    assert_eq!(parse_optional_salary("   "), Ok(None));
}

#[test]
fn junk_is_rejected_with_message() {
    let err = parse_optional_salary("fifty grand").unwrap_err();
    assert!(err.contains("fifty grand"));
}

#[test]
fn currency_symbols_are_rejected() {
    assert!(parse_optional_salary("$50000").is_err());
}

// =============================================================================
// image_url_for_write — upload failure short-circuits the record write
// =============================================================================

#[test]
fn no_file_keeps_existing_url() {
    assert_eq!(
        image_url_for_write(UploadOutcome::NoFile, "/uploads/client-images/old.png"),
        Ok("/uploads/client-images/old.png".to_owned())
    );
}

#[test]
fn uploaded_url_replaces_existing() {
    assert_eq!(
        image_url_for_write(UploadOutcome::Uploaded("/uploads/client-images/new.png".into()), "old.png"),
        Ok("/uploads/client-images/new.png".to_owned())
    );
}

#[test]
fn failed_upload_aborts_the_write() {
    let result = image_url_for_write(UploadOutcome::Failed("upload failed: 500".into()), "");
    assert_eq!(result, Err("upload failed: 500".to_owned()));
}
