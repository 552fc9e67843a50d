use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use chrono::DateTime;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::sync::Arc;

use super::images::submission_id;
use crate::api::response::ApiError;
use crate::AppState;

const PAGE_STYLE: &str =
    ":root{background-color:#202124;}*,:after,:before{box-sizing:border-box;margin:0 auto;}";

/// Serve the HTML preview page for a submission.
/// Route: GET /i/:id
pub async fn serve_preview(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Response, ApiError> {
    let id = submission_id(&segment);
    let submission = state.catalogue.submission(id).ok_or(ApiError::NotFound)?;

    // Unresolved authors degrade to an empty display name.
    let username = state
        .catalogue
        .user(&submission.author_id)
        .map(|user| user.username.as_str())
        .unwrap_or("");

    let page = render_preview(
        &state.config.site_name,
        id,
        username,
        submission.timestamp_ms,
    );

    Ok(Html(page.into_string()).into_response())
}

/// Static page structure with exactly four interpolation points: the raw
/// image URL, the page permalink, the author name, and the timestamp.
/// Usernames are untrusted input; maud escapes every interpolated value.
fn render_preview(site_name: &str, id: &str, username: &str, timestamp_ms: i64) -> Markup {
    let raw_url = format!("/rawi/{id}");
    let page_url = format!("/i/{id}");
    let description = format!(
        "Submitted by {username} on {}",
        format_timestamp(timestamp_ms)
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                title { (site_name) }
                meta name="viewport" content="width=device-width,initial-scale=1";
                meta property="og:title" content=(site_name);
                meta property="og:image" content=(raw_url);
                meta property="og:url" content=(page_url);
                meta property="og:description" content=(description);
                meta property="twitter:title" content=(site_name);
                meta property="twitter:image" content=(raw_url);
                meta name="theme-color" content="#5655b0";
                meta name="twitter:card" content="summary_large_image";
                style { (PreEscaped(PAGE_STYLE)) }
            }
            body {
                img style="height: 100vh; display: block;" src=(raw_url);
            }
        }
    }
}

fn format_timestamp(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        // Out-of-range timestamp from the store; show it rather than drop it.
        None => timestamp_ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, render_preview};

    #[test]
    fn preview_embeds_urls_author_and_timestamp() {
        let page = render_preview("Image Server", "x1", "alice", 1_700_000_000_000).into_string();

        assert!(page.contains("/rawi/x1"));
        assert!(page.contains("/i/x1"));
        assert!(page.contains("alice"));
        assert!(page.contains("2023-11-14 22:13:20 UTC"));
    }

    #[test]
    fn username_markup_is_escaped() {
        let page =
            render_preview("Image Server", "x1", "<script>alert(1)</script>", 0).into_string();

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn unresolvable_timestamp_falls_back_to_millis() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
