//! Structural pruning of the reconciled tree.
//!
//! Post-order pass: children are finalized first (deletion markers
//! removed, unravel-marked wrappers spliced away), then the retention
//! predicate decides whether the node itself survives.

use std::collections::VecDeque;

use crate::node::AxNode;

/// Tags retained unconditionally in interactive-only mode.
const INTERACTIVE_TAGS: &[&str] = &["input", "button", "textarea", "a", "select", "form"];

/// Roles retained unconditionally in interactive-only mode.
const INTERACTIVE_ROLES: &[&str] = &[
    "button",
    "link",
    "textbox",
    "combobox",
    "searchbox",
    "menuitem",
    "menubar",
    "option",
    "radio",
    "checkbox",
    "tab",
    "tablist",
    "listbox",
    "menuitemcheckbox",
    "menuitemradio",
    "slider",
    "spinbutton",
    "switch",
];

/// Prune a reconciled tree, returning the surviving form of `node`.
///
/// `None` means the node was removed entirely. The root `WebArea` node is
/// always retained, so a tree rooted there never prunes to `None`.
///
/// Children marked for unravel are replaced by their own children at the
/// same position, in order; the lifted children are then pruned like any
/// other child (a lifted child may itself unravel).
pub fn prune_tree(mut node: AxNode, only_input_fields: bool) -> Option<AxNode> {
    if node.marked_for_deletion {
        return None;
    }

    if let Some(children) = node.children.take() {
        let mut pending: VecDeque<AxNode> = children.into();
        let mut kept = Vec::with_capacity(pending.len());

        while let Some(child) = pending.pop_front() {
            if child.marked_for_unravel {
                if let Some(grandchildren) = child.children {
                    for lifted in grandchildren.into_iter().rev() {
                        pending.push_front(lifted);
                    }
                }
                // A wrapper without children simply disappears.
            } else if let Some(pruned) = prune_tree(child, only_input_fields) {
                kept.push(pruned);
            }
        }

        if !kept.is_empty() {
            node.children = Some(kept);
        }
    }

    if should_prune(&node, only_input_fields) {
        None
    } else {
        Some(node)
    }
}

/// Retention predicate, evaluated after a node's children are finalized.
fn should_prune(node: &AxNode, only_input_fields: bool) -> bool {
    // The document root survives everything.
    if node.has_role("WebArea") {
        return false;
    }

    if only_input_fields && !is_interactive(node) {
        return true;
    }

    if matches!(node.role.as_deref(), Some("separator") | Some("LineBreak")) {
        return true;
    }

    if node.has_role("generic") && !node.has_children() && node.name.is_none() {
        return true;
    }

    // Short bare text leaves are noise.
    if node.is_bare_role_name() && node.has_role("text") {
        let name = node.name.as_deref().unwrap_or_default().trim();
        if name.chars().count() < 3 {
            return true;
        }
    }

    false
}

fn is_interactive(node: &AxNode) -> bool {
    node.tag
        .as_deref()
        .is_some_and(|tag| INTERACTIVE_TAGS.contains(&tag))
        || node
            .role
            .as_deref()
            .is_some_and(|role| INTERACTIVE_ROLES.contains(&role))
        || node.is_clickable == Some(true)
        || node
            .tabindex
            .as_deref()
            .is_some_and(|tabindex| tabindex != "-1")
        || node.extra.contains_key("aria-expanded")
        || node.extra.contains_key("aria-selected")
        || node.extra.contains_key("aria-checked")
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
