//! Page capability seam.
//!
//! The engine never talks to a browser directly; it is handed something
//! that can run a JavaScript function in the live page and capture an
//! accessibility snapshot. A CDP page session or a Playwright page adapts
//! onto this trait in the embedding application.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DriverError;

/// Capabilities the extraction pipeline requires from the host page.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Run a JavaScript function in the page with a single JSON argument
    /// and return its JSON result.
    ///
    /// `function` is a complete function expression (`(params) => {...}`);
    /// `args` is passed as `params`. Used for marker injection, cleanup
    /// and per-element probes.
    async fn evaluate(&self, function: &str, args: Value) -> Result<Value, DriverError>;

    /// Capture the accessibility tree of the current page.
    ///
    /// `interesting_only` requests the host's semantic filter that drops
    /// purely decorative nodes. Returns `Value::Null` when the page has no
    /// tree to report.
    async fn accessibility_snapshot(&self, interesting_only: bool) -> Result<Value, DriverError>;
}
