//! Audit artifact persistence.
//!
//! Every extraction can leave two files behind for offline inspection:
//! the pristine raw snapshot and the final enriched tree. The engine
//! never reads them back, and a failed write never fails the extraction.

use std::path::Path;

use tracing::{debug, warn};

use axtract_core::node::AxNode;
use axtract_core::serialize;

/// File name of the pristine raw snapshot artifact.
pub const RAW_SNAPSHOT_FILE: &str = "raw_snapshot.json";

/// File name of the enriched/pruned tree artifact.
pub const ENRICHED_SNAPSHOT_FILE: &str = "enriched_snapshot.json";

/// Persist a tree as a pretty-printed JSON artifact under `dir`.
pub async fn persist_tree(dir: &Path, file_name: &str, tree: &AxNode) {
    let json = match serialize::to_json_pretty(tree) {
        Ok(json) => json,
        Err(error) => {
            warn!(%error, file_name, "failed to serialize audit artifact");
            return;
        }
    };

    if let Err(error) = write_artifact(dir, file_name, &json).await {
        warn!(%error, file_name, "failed to persist audit artifact");
    } else {
        debug!(file_name, "persisted audit artifact");
    }
}

async fn write_artifact(dir: &Path, file_name: &str, contents: &str) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(dir.join(file_name), contents).await
}
