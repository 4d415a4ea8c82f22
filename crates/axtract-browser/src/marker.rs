//! Correlation-id marker injection and cleanup.

use serde_json::Value;
use tracing::debug;

use crate::driver::PageDriver;
use crate::error::DriverError;
use crate::scripts;

/// Stamp every element in the document with a sequential correlation id.
///
/// Returns the number of stamped elements, which is also the highest id
/// assigned. Safe to re-run; ids are simply reassigned and true original
/// attribute values stay backed up.
pub async fn inject_markers(driver: &dyn PageDriver) -> Result<u64, DriverError> {
    let result = driver.evaluate(scripts::INJECT_MARKERS, Value::Null).await?;
    let count = result.as_u64().unwrap_or(0);
    debug!(count, "stamped correlation ids into the document");
    Ok(count)
}

/// Remove the accessibility-visible marker from every element and restore
/// backed-up originals.
///
/// Must run once the snapshot is captured, whether or not downstream
/// processing succeeds; a leaked marker corrupts the page's own
/// accessibility-dependent behavior on the next snapshot.
pub async fn cleanup_markers(driver: &dyn PageDriver) -> Result<(), DriverError> {
    driver
        .evaluate(scripts::CLEANUP_MARKERS, Value::Null)
        .await?;
    debug!("removed injected accessibility markers");
    Ok(())
}
