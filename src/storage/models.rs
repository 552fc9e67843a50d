use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A user-submitted image stored in redb.
///
/// Records are written by the submission tooling and only read here; once a
/// record is loaded into the catalogue its fields never change for the
/// lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    /// Selects `image/gif` output instead of `image/webp`.
    pub is_animated: bool,
    /// Best-effort reference to a User. A dangling reference renders as an
    /// empty author name, never an error.
    pub author_id: String,
    /// Creation time, milliseconds since epoch.
    pub timestamp_ms: i64,
    pub payload: Bytes,
}

/// An account that may own submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Opaque hash, checked by the submission tooling, never here.
    pub password_hash: String,
    pub max_upload_size_mb: u32,
    pub is_admin: bool,
    #[serde(default)]
    pub submitted_ids: Vec<String>,
}
