//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `bs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `bs-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
