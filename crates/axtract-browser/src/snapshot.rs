//! Accessibility snapshot acquisition.

use axtract_core::AxNode;

use crate::driver::PageDriver;
use crate::error::ExtractError;

/// Capture the accessibility tree and decode it into the node model.
///
/// `Ok(None)` means the host reported no tree for the current page (for
/// example during a navigation); a snapshot that exists but does not
/// decode is an [`ExtractError::MalformedSnapshot`].
pub async fn capture_snapshot(
    driver: &dyn PageDriver,
    interesting_only: bool,
) -> Result<Option<AxNode>, ExtractError> {
    let raw = driver.accessibility_snapshot(interesting_only).await?;
    if raw.is_null() {
        return Ok(None);
    }
    let tree: AxNode = serde_json::from_value(raw)?;
    Ok(Some(tree))
}
