//! Page-facing half of the accessibility tree extraction pipeline.
//!
//! Converts a raw, noisy, browser-native accessibility snapshot into a
//! compact, semantically faithful representation of interactive page
//! structure, suitable for LLM consumption.
//!
//! ## Pipeline
//!
//! ```text
//! inject markers ─► snapshot ─► cleanup markers ─► reconcile ─► prune ─► tree
//!      (DOM)         (host)         (DOM)          (per-node      (pure)
//!                                                  DOM probes)
//! ```
//!
//! The engine drives the page through the [`PageDriver`] trait only;
//! plug in a CDP session or Playwright page in the embedding application.
//! Per-node resolution failures degrade single nodes, never the call;
//! the caller always receives a complete tree or an explicit `None`.

pub mod audit;
pub mod driver;
pub mod error;
pub mod extract;
pub mod marker;
pub mod reconcile;
pub mod scripts;
pub mod snapshot;

pub use driver::PageDriver;
pub use error::{DriverError, ExtractError};
pub use extract::{ExtractorConfig, PageExtractor};
