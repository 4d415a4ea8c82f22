//! The extraction pipeline.
//!
//! Strictly sequential per call: inject markers, capture the snapshot,
//! clean the markers up, reconcile against the live DOM, prune, persist
//! audit artifacts. Each stage depends on the previous stage's completed
//! side effects, so no stage overlaps another.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use axtract_core::clickable::{Clickability, DefaultClickability};
use axtract_core::node::AxNode;
use axtract_core::prune::prune_tree;
use axtract_core::reconcile::DEFAULT_IGNORED_IDS;

use crate::driver::PageDriver;
use crate::error::ExtractError;
use crate::{audit, marker, reconcile, snapshot};

/// Extraction configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Request the host's "interesting-only" snapshot filter.
    pub interesting_only: bool,
    /// Directory receiving the raw and enriched audit artifacts.
    /// `None` disables audit persistence.
    pub audit_dir: Option<PathBuf>,
    /// Element ids excluded from reconciliation.
    pub ignored_ids: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            interesting_only: true,
            audit_dir: None,
            ignored_ids: DEFAULT_IGNORED_IDS
                .iter()
                .map(|id| id.to_string())
                .collect(),
        }
    }
}

/// Distills the accessibility tree of a live page into a compact,
/// LLM-consumable structure.
///
/// One extractor per page; state is per-call, so a single extractor can
/// run any number of sequential extractions. After a navigation the whole
/// pipeline must run again — correlation ids do not survive page loads.
pub struct PageExtractor {
    driver: Arc<dyn PageDriver>,
    config: ExtractorConfig,
    clickability: Arc<dyn Clickability>,
}

impl PageExtractor {
    /// Create an extractor with default configuration and the default
    /// clickability heuristic.
    pub fn new(driver: Arc<dyn PageDriver>) -> Self {
        Self {
            driver,
            config: ExtractorConfig::default(),
            clickability: Arc::new(DefaultClickability),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the clickability predicate.
    pub fn with_clickability(mut self, clickability: Arc<dyn Clickability>) -> Self {
        self.clickability = clickability;
        self
    }

    /// Run the full pipeline against the current page.
    ///
    /// With `only_input_fields` set, pruning keeps interactive elements
    /// only. Returns `Ok(None)` when the host has no tree to offer;
    /// `Err` only for failures that make the whole call meaningless
    /// (no active page, undecodable snapshot). Every per-node anomaly is
    /// absorbed during reconciliation, so the returned tree never contains
    /// dangling deletion markers.
    pub async fn extract(&self, only_input_fields: bool) -> Result<Option<AxNode>, ExtractError> {
        let driver = self.driver.as_ref();

        let stamped = marker::inject_markers(driver).await?;
        debug!(stamped, "marker injection complete");

        let captured = snapshot::capture_snapshot(driver, self.config.interesting_only).await;

        // Cleanup is not gated on snapshot success: a leaked marker
        // attribute corrupts the page's own accessibility behavior and
        // every later snapshot of it.
        if let Err(error) = marker::cleanup_markers(driver).await {
            warn!(%error, "marker cleanup failed");
        }

        let Some(raw) = captured? else {
            warn!("host returned no accessibility tree for the current page");
            return Ok(None);
        };

        if let Some(dir) = &self.config.audit_dir {
            audit::persist_tree(dir, audit::RAW_SNAPSHOT_FILE, &raw).await;
        }

        let reconciled = reconcile::reconcile_tree(
            driver,
            raw,
            &self.config.ignored_ids,
            self.clickability.as_ref(),
        )
        .await;

        let pruned = prune_tree(reconciled, only_input_fields);

        match &pruned {
            Some(tree) => {
                if let Some(dir) = &self.config.audit_dir {
                    audit::persist_tree(dir, audit::ENRICHED_SNAPSHOT_FILE, tree).await;
                }
                info!("accessibility tree extraction complete");
            }
            None => warn!("pruning removed the entire tree"),
        }

        Ok(pruned)
    }
}
