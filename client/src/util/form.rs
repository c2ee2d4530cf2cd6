//! Form input conversion helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record store carries numbers and nulls where forms carry text;
//! conversion happens here, before any write is issued, so a bad input
//! surfaces as a form error instead of a rejected request.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Convert a salary text input to the numeric wire value.
/// Empty input means "not specified" and becomes null.
///
/// # Errors
///
/// Returns a user-facing message when the input is not a number.
pub fn parse_optional_salary(input: &str) -> Result<Option<f64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("\"{trimmed}\" is not a valid salary"))
}

/// Outcome of the upload step that precedes an image-bearing record write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file selected; keep whatever URL the form already has.
    NoFile,
    /// Upload succeeded with this public URL.
    Uploaded(String),
    /// Upload failed; the dependent write must not be issued.
    Failed(String),
}

/// Resolve the image URL a record write should carry.
///
/// # Errors
///
/// Returns the upload failure message. The caller aborts the write and
/// shows a toast, leaving no partial record behind.
pub fn image_url_for_write(outcome: UploadOutcome, existing: &str) -> Result<String, String> {
    match outcome {
        UploadOutcome::NoFile => Ok(existing.to_owned()),
        UploadOutcome::Uploaded(url) => Ok(url),
        UploadOutcome::Failed(message) => Err(message),
    }
}
