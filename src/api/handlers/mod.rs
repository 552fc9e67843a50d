mod admin;
mod images;
mod preview;

pub use admin::{health, index};
pub use images::{serve_raw, submission_id};
pub use preview::serve_preview;
