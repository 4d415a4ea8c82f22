//! Clickability detection.
//!
//! The page-side probe gathers raw facts; the decision of whether an
//! element counts as clickable is made here, behind a trait so the
//! heuristic can be refined without touching the reconciliation flow.

use serde::{Deserialize, Serialize};

/// Raw clickability facts gathered from the live element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickSignals {
    /// An inline click handler is attached.
    pub has_click_handler: bool,
    /// Computed cursor style is `pointer`.
    pub cursor_pointer: bool,
    /// ARIA `role` attribute, if any.
    pub aria_role: Option<String>,
    /// A `tabindex` attribute is present.
    pub has_tabindex: bool,
    /// Full class attribute value.
    pub class_name: String,
    /// A nested vector-graphic (`<svg>`) child exists.
    pub has_svg: bool,
    /// Tag name, lowercase.
    pub tag: String,
}

/// Pluggable clickability predicate.
pub trait Clickability: Send + Sync {
    /// Decide whether an element with the given signals is clickable.
    fn is_clickable(&self, signals: &ClickSignals) -> bool;
}

/// Default heuristic: an OR over handler presence, pointer cursor,
/// interactive ARIA roles, focusability, class-name hints, nested vector
/// graphics and natively interactive tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClickability;

impl Clickability for DefaultClickability {
    fn is_clickable(&self, signals: &ClickSignals) -> bool {
        let class = signals.class_name.to_lowercase();
        let role = signals.aria_role.as_deref();

        signals.has_click_handler
            || signals.cursor_pointer
            || matches!(role, Some("button") | Some("link") | Some("tab"))
            || signals.has_tabindex
            || class.contains("trigger")
            || class.contains("clickable")
            || signals.has_svg
            || matches!(signals.tag.as_str(), "button" | "a")
    }
}

#[cfg(test)]
#[path = "clickable_tests.rs"]
mod tests;
