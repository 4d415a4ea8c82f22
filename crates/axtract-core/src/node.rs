//! Snapshot node model shared by every pipeline stage.
//!
//! The same `AxNode` value flows through the pipeline: the host snapshot
//! deserializes into it, reconciliation returns an enriched copy, and the
//! pruner returns the final tree. Fields that were never set stay out of
//! the serialized output entirely.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One option of a `<select>` element, captured with its own correlation id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    /// Correlation id of the `<option>` element itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mmid: Option<u32>,
    /// Visible option text.
    pub text: String,
    /// Submitted option value.
    pub value: String,
    /// Whether the option is currently selected.
    pub selected: bool,
}

/// A node of the accessibility snapshot.
///
/// Raw snapshots populate `role`, `name`, `keyshortcuts`, `children` and
/// host-specific properties (collected in `extra`). Reconciliation fills in
/// `mmid` and the DOM-sourced attributes; pruning removes the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxNode {
    /// Accessibility role as reported by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Accessible name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Correlation-id side channel; present only on raw nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyshortcuts: Option<String>,

    /// Accessible description, or captured inner text for leaf elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resolved correlation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mmid: Option<u32>,

    /// Tag name of the backing element, lowercase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// `type` attribute for `<input>` elements.
    #[serde(rename = "tag_type", skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<String>,

    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabindex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(rename = "data-testid", skip_serializing_if = "Option::is_none")]
    pub data_testid: Option<String>,

    /// Promoted link text (from `description` during cascade).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Set when the clickability predicate fires for the backing element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_clickable: Option<bool>,

    /// Backing element contains a vector-graphic child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_svg: Option<bool>,

    /// Checked state; the host may report `true`/`false` or `"mixed"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<Value>,

    /// Modal flag on dialog nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<bool>,

    /// Advisory attached to modal dialogs for the consuming agent.
    #[serde(
        rename = "important information",
        skip_serializing_if = "Option::is_none"
    )]
    pub advisory: Option<String>,

    /// Options of a `<select>` element; such nodes carry no children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AxNode>>,

    /// Host snapshot properties without a dedicated field
    /// (`level`, `expanded`, `focused`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Reconciliation found no usable backing element; pruning removes it.
    #[serde(skip)]
    pub marked_for_deletion: bool,

    /// Wrapper without semantic value; pruning lifts its children.
    #[serde(skip)]
    pub marked_for_unravel: bool,
}

impl AxNode {
    /// A node carrying only a role and a name.
    pub fn leaf(role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the node has a given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }

    /// Whether any children are attached.
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Whether the node is exactly a `{role, name}` pair and nothing else.
    pub fn is_bare_role_name(&self) -> bool {
        self.role.is_some()
            && self.name.is_some()
            && self.keyshortcuts.is_none()
            && self.description.is_none()
            && self.mmid.is_none()
            && self.tag.is_none()
            && self.tag_type.is_none()
            && self.aria_label.is_none()
            && self.placeholder.is_none()
            && self.class.is_none()
            && self.tabindex.is_none()
            && self.href.is_none()
            && self.target.is_none()
            && self.data_testid.is_none()
            && self.text.is_none()
            && self.is_clickable.is_none()
            && self.has_svg.is_none()
            && self.checked.is_none()
            && self.modal.is_none()
            && self.advisory.is_none()
            && self.options.is_none()
            && self.children.is_none()
            && self.extra.is_empty()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
