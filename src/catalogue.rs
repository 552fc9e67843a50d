//! In-memory mirror of the document store, built once at startup.
//!
//! The catalogue is the only data request handlers ever touch: after a
//! successful load it is immutable for the process lifetime, so concurrent
//! readers need no synchronization. A restart is the only way to pick up
//! store changes.

use std::collections::HashMap;
use std::io::Write;

use bytes::Bytes;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::storage::models::{Submission, User};
use crate::storage::{Database, DatabaseError};

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Failed to read catalogue from store: {0}")]
    Store(#[from] DatabaseError),
    #[error("Failed to compress payload for submission {id}: {source}")]
    Compression {
        id: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct Catalogue {
    submissions: HashMap<String, Submission>,
    users: HashMap<String, User>,
    admins: HashMap<String, User>,
    precompressed: bool,
}

impl Catalogue {
    /// Load every submission and user record into memory.
    ///
    /// With `precompress` set, each payload is replaced by its gzip-compressed
    /// form (best compression) so request handling never repeats that work.
    /// Any read, decode, or compression failure aborts the load; the caller
    /// must not serve requests from a partially built catalogue.
    pub fn load(db: &Database, precompress: bool) -> Result<Self, CatalogueError> {
        let mut submissions = HashMap::new();
        for mut submission in db.list_submissions()? {
            if precompress {
                submission.payload = compress(&submission.id, &submission.payload)?;
            }
            submissions.insert(submission.id.clone(), submission);
        }

        let mut users = HashMap::new();
        let mut admins = HashMap::new();
        for user in db.list_users()? {
            if user.is_admin {
                admins.insert(user.id.clone(), user.clone());
            }
            users.insert(user.id.clone(), user);
        }

        tracing::info!(
            submissions = submissions.len(),
            users = users.len(),
            admins = admins.len(),
            precompressed = precompress,
            "Catalogue loaded"
        );

        Ok(Self {
            submissions,
            users,
            admins,
            precompressed: precompress,
        })
    }

    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.submissions.get(id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn admins(&self) -> &HashMap<String, User> {
        &self.admins
    }

    /// Whether payloads were gzip-compressed at load time. When true, raw
    /// responses carry `Content-Encoding: gzip` and the bytes go out verbatim.
    pub fn is_precompressed(&self) -> bool {
        self.precompressed
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn admin_count(&self) -> usize {
        self.admins.len()
    }
}

fn compress(id: &str, payload: &[u8]) -> Result<Bytes, CatalogueError> {
    let io_err = |source| CatalogueError::Compression {
        id: id.to_string(),
        source,
    };

    let mut encoder = GzEncoder::new(Vec::with_capacity(payload.len()), Compression::best());
    encoder.write_all(payload).map_err(io_err)?;
    let compressed = encoder.finish().map_err(io_err)?;
    Ok(Bytes::from(compressed))
}
