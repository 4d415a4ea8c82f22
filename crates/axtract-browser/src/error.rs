//! Extraction pipeline errors.

use thiserror::Error;

/// Errors surfaced by a [`PageDriver`](crate::driver::PageDriver)
/// implementation.
#[derive(Debug, Error)]
pub enum DriverError {
    /// No active page to operate on.
    #[error("no active page: {0}")]
    NoActivePage(String),

    /// JavaScript evaluation failed in the page.
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// The underlying automation protocol failed.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The page did not respond in time.
    #[error("timeout: {0}")]
    Timeout(String),
}

/// Errors surfaced by [`PageExtractor::extract`](crate::PageExtractor::extract).
///
/// Per-node anomalies never appear here; they are absorbed into deletion
/// markers during reconciliation. Only failures that make the whole call
/// meaningless (no page, snapshot not decodable) propagate.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The driver failed outright.
    #[error("driver failure: {0}")]
    Driver(#[from] DriverError),

    /// The host snapshot did not decode into a tree.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}
