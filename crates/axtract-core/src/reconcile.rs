//! Per-node reconciliation policy.
//!
//! Pure rules applied to one snapshot node at a time: special-case
//! handling, merging the DOM probe result into the node, and the
//! redundancy-elimination cascade. The asynchronous tree walk that feeds
//! these rules lives in the browser-facing crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clickable::{ClickSignals, Clickability};
use crate::node::{AxNode, SelectOption};

/// DOM attributes pulled into the node during enrichment.
pub const FETCH_ATTRIBUTES: &[&str] = &[
    "name",
    "aria-label",
    "placeholder",
    "id",
    "for",
    "data-testid",
    "role",
    "class",
    "tabindex",
    "href",
    "target",
    "aria-expanded",
    "aria-selected",
    "aria-checked",
];

/// Elements with these tags never survive reconciliation.
pub const IGNORED_TAGS: &[&str] = &[
    "head", "style", "script", "link", "meta", "noscript", "template", "iframe", "g", "main",
    "c-wiz", "path",
];

/// Element ids never surfaced to the consumer. The default entry is the
/// automation UI's own overlay element.
pub const DEFAULT_IGNORED_IDS: &[&str] = &["agentDriveAutoOverlay"];

/// Properties removed from every enriched node at the end of the cascade.
pub const TRANSIENT_ATTRIBUTES: &[&str] = &["level", "multiline", "haspopup", "id", "for"];

/// Advisory attached to modal dialog nodes.
pub const MODAL_DIALOG_ADVISORY: &str = "This is a modal dialog. Please interact with this \
     dialog and close it to be able to interact with the full page (e.g. by pressing the close \
     button or selecting an option).";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Resolved attribute bag for one live element, as returned by the
/// element-probe capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementProbe {
    /// Tag name, lowercase.
    pub tag: String,
    /// Allow-listed attributes present on the element.
    pub attributes: BTreeMap<String, String>,
    /// Inner text, gathered only for nodes without snapshot children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_text: Option<String>,
    /// `type` attribute for `<input>` elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Option states for `<select>` elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// Raw clickability facts.
    pub signals: ClickSignals,
}

/// Reduce a node whose correlation id could not be parsed to its
/// role/name contribution, keeping already-reconciled children.
pub fn degrade_to_leaf(node: AxNode) -> AxNode {
    AxNode {
        role: node.role,
        name: node.name,
        children: node.children,
        ..AxNode::default()
    }
}

/// Menu items are summarized, never enriched.
pub fn summarize_menuitem(node: AxNode) -> AxNode {
    AxNode {
        role: node.role,
        name: node.name,
        ..AxNode::default()
    }
}

/// Whether a checkbox node is a calendar day (name carries a month name).
pub fn is_calendar_day(node: &AxNode) -> bool {
    node.has_role("checkbox")
        && node
            .name
            .as_deref()
            .is_some_and(|name| MONTHS.iter().any(|month| name.contains(month)))
}

/// Normalize a calendar-day checkbox to a clickable button-like node,
/// bypassing generic enrichment.
pub fn normalize_calendar_day(node: AxNode, mmid: u32) -> AxNode {
    AxNode {
        mmid: Some(mmid),
        tag: Some("button".to_string()),
        is_clickable: Some(true),
        role: Some("checkbox".to_string()),
        name: node.name,
        checked: node.checked.or(Some(Value::Bool(false))),
        children: node.children,
        ..AxNode::default()
    }
}

/// Merge a DOM probe into a snapshot node.
///
/// `<select>` elements are terminal: they become comboboxes carrying their
/// option states and lose their children. For everything else the
/// allow-listed attributes are copied in (the snapshot role wins over the
/// DOM role), and leaf nodes pick up their inner text as `description`.
pub fn enrich(
    mut node: AxNode,
    mmid: u32,
    probe: ElementProbe,
    clickability: &dyn Clickability,
) -> AxNode {
    node.keyshortcuts = None;
    node.mmid = Some(mmid);
    node.tag = Some(probe.tag.clone());

    if clickability.is_clickable(&probe.signals) {
        node.is_clickable = Some(true);
        if !probe.signals.class_name.is_empty() {
            node.class = Some(probe.signals.class_name.clone());
        }
        if probe.signals.has_svg {
            node.has_svg = Some(true);
            if node.role.is_none() {
                node.role = Some("button".to_string());
            }
        }
    }

    match probe.tag.as_str() {
        "input" => node.tag_type = probe.input_type,
        "select" => {
            node.role = Some("combobox".to_string());
            node.options = Some(probe.options.unwrap_or_default());
            node.children = None;
            return node;
        }
        _ => {}
    }

    for (key, value) in probe.attributes {
        if key == "name" {
            node.name = Some(value);
        } else if key == "aria-label" {
            node.aria_label = Some(value);
        } else if key == "placeholder" {
            node.placeholder = Some(value);
        } else if key == "class" {
            node.class = Some(value);
        } else if key == "tabindex" {
            node.tabindex = Some(value);
        } else if key == "href" {
            node.href = Some(value);
        } else if key == "target" {
            node.target = Some(value);
        } else if key == "data-testid" {
            node.data_testid = Some(value);
        } else if key == "role" {
            if node.role.is_none() {
                node.role = Some(value);
            }
        } else {
            node.extra.insert(key, Value::String(value));
        }
    }

    if !node.has_children() {
        if let Some(text) = probe.inner_text {
            if !text.is_empty() {
                node.description = Some(text);
            }
        }
    }

    node
}

/// Redundancy-elimination cascade, in fixed order.
///
/// Deliberately lossy: duplicated information is dropped to keep the
/// downstream payload small without losing anything distinguishing.
/// Applying the cascade twice yields the same node as applying it once.
pub fn apply_redundancy_rules(node: &mut AxNode) {
    // Name that merely echoes the correlation id (text entry fields keep theirs).
    if let (Some(name), Some(mmid)) = (node.name.as_deref(), node.mmid) {
        if name == mmid.to_string() && node.role.as_deref() != Some("textbox") {
            node.name = None;
        }
    }

    // Description duplicating the name, exactly or modulo newlines.
    if let (Some(name), Some(desc)) = (node.name.as_deref(), node.description.as_deref()) {
        let flattened = desc.replace('\n', " ");
        let squashed = desc.replace('\n', "");
        if name == desc || name == flattened || name.contains(&squashed) {
            node.description = None;
        }
    }

    // aria-label already contained in the name.
    if let (Some(name), Some(label)) = (node.name.as_deref(), node.aria_label.as_deref()) {
        if name.contains(label) {
            node.aria_label = None;
        }
    }

    if node.name.is_some() && node.name == node.text {
        node.text = None;
    }

    // Select nodes are terminal: no children, no captured text.
    if node.tag.as_deref() == Some("select") {
        node.children = None;
        node.description = None;
    }

    if node.role.is_some() && node.role.as_deref() == node.tag.as_deref() {
        node.role = None;
    }

    if node.aria_label.is_some() && node.aria_label == node.placeholder {
        node.aria_label = None;
    }

    // Links: the tag already says it; promote the description to text.
    if node.role.as_deref() == Some("link") {
        node.role = None;
        if let Some(desc) = node.description.take() {
            node.text = Some(desc);
        }
    }

    for key in TRANSIENT_ATTRIBUTES {
        node.extra.remove(*key);
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
