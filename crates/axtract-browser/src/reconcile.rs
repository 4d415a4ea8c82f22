//! Asynchronous reconciliation walk.
//!
//! Depth-first post-order over the raw snapshot: children are fully
//! reconciled before their parent. Each node with a parsable correlation
//! id is resolved against the live DOM through the driver; the pure rules
//! in `axtract-core` then decide what the node becomes. A failure on one
//! node never aborts the walk — that node degrades to a deletion marker
//! and the sweep continues.

use futures::future::BoxFuture;
use serde_json::json;
use tracing::{debug, warn};

use axtract_core::clickable::Clickability;
use axtract_core::mmid::parse_correlation_id;
use axtract_core::node::AxNode;
use axtract_core::reconcile::{
    ElementProbe, FETCH_ATTRIBUTES, IGNORED_TAGS, MODAL_DIALOG_ADVISORY, apply_redundancy_rules,
    degrade_to_leaf, enrich, is_calendar_day, normalize_calendar_day, summarize_menuitem,
};

use crate::driver::PageDriver;
use crate::error::DriverError;
use crate::scripts;

/// Reconcile a raw snapshot against the live DOM, returning the enriched
/// tree. Structural anomalies become deletion markers for the pruner.
pub async fn reconcile_tree(
    driver: &dyn PageDriver,
    root: AxNode,
    ignored_ids: &[String],
    clickability: &dyn Clickability,
) -> AxNode {
    debug!("reconciling accessibility snapshot with the DOM");
    reconcile_node(driver, root, ignored_ids, clickability).await
}

fn reconcile_node<'a>(
    driver: &'a dyn PageDriver,
    mut node: AxNode,
    ignored_ids: &'a [String],
    clickability: &'a dyn Clickability,
) -> BoxFuture<'a, AxNode> {
    Box::pin(async move {
        // Children first; the parent's own handling may drop or replace them.
        if let Some(children) = node.children.take() {
            let mut processed = Vec::with_capacity(children.len());
            for child in children {
                processed.push(reconcile_node(driver, child, ignored_ids, clickability).await);
            }
            node.children = Some(processed);
        }

        let Some(mmid) = node
            .keyshortcuts
            .as_deref()
            .and_then(parse_correlation_id)
        else {
            // Text leaves and host artifacts carry no usable id; their
            // contribution is whatever role/name they already have.
            return degrade_to_leaf(node);
        };

        if node.has_role("menuitem") {
            return summarize_menuitem(node);
        }

        if node.has_role("dialog") && node.modal == Some(true) {
            node.advisory = Some(MODAL_DIALOG_ADVISORY.to_string());
        }

        if is_calendar_day(&node) {
            return normalize_calendar_day(node, mmid);
        }

        let fetch_inner_text = !node.has_children();
        match probe_element(driver, mmid, ignored_ids, fetch_inner_text).await {
            Ok(Some(probe)) => {
                let mut enriched = enrich(node, mmid, probe, clickability);
                apply_redundancy_rules(&mut enriched);
                enriched
            }
            Ok(None) => {
                debug!(mmid, "no usable element behind node, marking for deletion");
                node.marked_for_deletion = true;
                node
            }
            Err(error) => {
                // The element may have vanished mid-walk; degrade just
                // this node and keep sweeping.
                warn!(mmid, %error, "element probe failed, marking node for deletion");
                node.marked_for_deletion = true;
                node
            }
        }
    })
}

/// Resolve one live element by correlation id.
async fn probe_element(
    driver: &dyn PageDriver,
    mmid: u32,
    ignored_ids: &[String],
    fetch_inner_text: bool,
) -> Result<Option<ElementProbe>, DriverError> {
    let args = json!({
        "mmid": mmid,
        "attributes": FETCH_ATTRIBUTES,
        "tagsToIgnore": IGNORED_TAGS,
        "idsToIgnore": ignored_ids,
        "fetchInnerText": fetch_inner_text,
    });

    let value = driver.evaluate(scripts::PROBE_ELEMENT, args).await?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value::<ElementProbe>(value) {
        Ok(probe) => Ok(Some(probe)),
        Err(error) => {
            warn!(mmid, %error, "malformed element probe result");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
