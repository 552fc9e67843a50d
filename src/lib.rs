//! image-server - serves user-submitted images from an in-memory catalogue
//!
//! This crate loads every submission and user record from an embedded
//! document store once at startup, then answers requests entirely from
//! memory:
//! - Raw image bytes by id, optionally gzip pre-compressed at load time
//! - Server-rendered HTML preview pages with social-embed metadata
//! - No write path, no refresh: a restart is the only way to pick up changes

pub mod api;
pub mod catalogue;
pub mod config;
pub mod storage;

use catalogue::Catalogue;
use config::Config;

/// Shared application state. The catalogue is immutable after construction,
/// so handlers read it concurrently without locks.
pub struct AppState {
    pub config: Config,
    pub catalogue: Catalogue,
}
