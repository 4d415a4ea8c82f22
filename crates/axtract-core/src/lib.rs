//! Accessibility snapshot reconciliation and pruning.
//!
//! This crate holds the pure half of the extraction pipeline: the snapshot
//! node model, correlation-id parsing, the per-node reconciliation rules
//! (special cases, DOM-probe merging, redundancy elimination) and the
//! structural tree pruner. Everything here operates on plain values; the
//! browser-facing crate feeds it.
//!
//! ## Pipeline
//!
//! ```text
//! raw snapshot ──reconcile──► enriched tree ──prune──► compact tree
//! ```
//!
//! Each stage produces a new owned tree, so stages are independently
//! testable without a browser.

pub mod clickable;
pub mod mmid;
pub mod node;
pub mod prune;
pub mod reconcile;
pub mod serialize;

pub use clickable::{ClickSignals, Clickability, DefaultClickability};
pub use node::{AxNode, SelectOption};
pub use prune::prune_tree;
pub use reconcile::ElementProbe;
