use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::AppState;

/// Strip an optional trailing extension from a path segment.
///
/// Clients may append `.webp` or similar for link previews; the suffix
/// carries no meaning server-side. Only the part after the last `.` is
/// discarded, so dots inside the identifier survive.
pub fn submission_id(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((id, _ext)) => id,
        None => segment,
    }
}

/// Serve raw image bytes by submission id.
/// Route: GET /rawi/:id
pub async fn serve_raw(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    let id = submission_id(&segment);
    let submission = state.catalogue.submission(id).ok_or(ApiError::NotFound)?;

    let content_type = if submission.is_animated {
        "image/gif"
    } else {
        "image/webp"
    };

    // Payload bytes are refcounted; cloning does not copy the image.
    let mut response = (StatusCode::OK, submission.payload.clone()).into_response();
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type),
    );

    // Pre-compressed bytes go out verbatim; no layer re-compresses them.
    if state.catalogue.is_precompressed() {
        headers.insert(
            header::CONTENT_ENCODING,
            HeaderValue::from_static("gzip"),
        );
    }

    // Cache for 1 hour (the catalogue is immutable until the next restart)
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::submission_id;

    #[test]
    fn extension_is_stripped() {
        assert_eq!(submission_id("abc123.webp"), "abc123");
        assert_eq!(submission_id("abc123.png.gif"), "abc123.png");
    }

    #[test]
    fn bare_identifier_passes_through() {
        assert_eq!(submission_id("abc123"), "abc123");
    }

    #[test]
    fn only_last_segment_is_dropped() {
        assert_eq!(submission_id("a.b.c"), "a.b");
    }

    #[test]
    fn stripping_is_idempotent_on_stripped_ids() {
        assert_eq!(submission_id(submission_id("abc123.webp")), "abc123");
    }
}
