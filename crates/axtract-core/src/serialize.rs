//! Snapshot serialization.

use crate::node::AxNode;

/// Compact JSON form handed to the caller.
pub fn to_json(tree: &AxNode) -> Result<String, serde_json::Error> {
    serde_json::to_string(tree)
}

/// Pretty JSON form used for audit artifacts.
pub fn to_json_pretty(tree: &AxNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
