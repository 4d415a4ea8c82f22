use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use axtract_core::DefaultClickability;
use axtract_core::node::AxNode;

use super::*;
use crate::error::DriverError;

/// Driver that serves element probes from a fixed map and records the
/// probe arguments it was called with.
struct ProbeMap {
    probes: HashMap<u32, Value>,
    failing: Vec<u32>,
    seen_args: Mutex<Vec<Value>>,
}

impl ProbeMap {
    fn new(probes: HashMap<u32, Value>) -> Self {
        Self {
            probes,
            failing: vec![],
            seen_args: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl PageDriver for ProbeMap {
    async fn evaluate(&self, function: &str, args: Value) -> Result<Value, DriverError> {
        assert_eq!(function, scripts::PROBE_ELEMENT, "unexpected script");
        let mmid = args["mmid"].as_u64().unwrap() as u32;
        self.seen_args.lock().unwrap().push(args);
        if self.failing.contains(&mmid) {
            return Err(DriverError::JavaScript("element vanished".to_string()));
        }
        Ok(self.probes.get(&mmid).cloned().unwrap_or(Value::Null))
    }

    async fn accessibility_snapshot(&self, _interesting_only: bool) -> Result<Value, DriverError> {
        Ok(Value::Null)
    }
}

fn probe_json(tag: &str) -> Value {
    json!({"tag": tag, "attributes": {}, "signals": {"tag": tag}})
}

fn raw(role: &str, name: &str, mmid: u32) -> AxNode {
    AxNode {
        role: Some(role.to_string()),
        name: Some(name.to_string()),
        keyshortcuts: Some(mmid.to_string()),
        ..AxNode::default()
    }
}

#[tokio::test]
async fn test_nested_nodes_enriched_post_order() {
    let mut probes = HashMap::new();
    probes.insert(2, probe_json("form"));
    probes.insert(3, probe_json("button"));

    let driver = ProbeMap::new(probes);
    let mut root = raw("form", "Login", 2);
    root.children = Some(vec![raw("button", "Sign in", 3)]);

    let tree = reconcile_tree(&driver, root, &[], &DefaultClickability).await;
    assert_eq!(tree.mmid, Some(2));
    assert_eq!(tree.tag.as_deref(), Some("form"));
    let child = &tree.children.as_ref().unwrap()[0];
    assert_eq!(child.mmid, Some(3));
    // role == tag collapses during the cascade.
    assert!(child.role.is_none());
    assert_eq!(child.is_clickable, Some(true));
}

#[tokio::test]
async fn test_unparsable_id_degrades_to_leaf() {
    let driver = ProbeMap::new(HashMap::new());
    let node = AxNode {
        role: Some("text".to_string()),
        name: Some("hello world".to_string()),
        keyshortcuts: Some("Ctrl+K".to_string()),
        ..AxNode::default()
    };

    let tree = reconcile_tree(&driver, node, &[], &DefaultClickability).await;
    assert_eq!(tree.role.as_deref(), Some("text"));
    assert_eq!(tree.name.as_deref(), Some("hello world"));
    assert!(tree.keyshortcuts.is_none());
    assert!(tree.mmid.is_none());
    // No probe happens for such nodes.
    assert!(driver.seen_args.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_concatenated_id_resolves_to_last_token() {
    let mut probes = HashMap::new();
    probes.insert(12, probe_json("button"));
    let driver = ProbeMap::new(probes);

    let mut node = raw("button", "Go", 1);
    node.keyshortcuts = Some("3 3 12".to_string());

    let tree = reconcile_tree(&driver, node, &[], &DefaultClickability).await;
    assert_eq!(tree.mmid, Some(12));
}

#[tokio::test]
async fn test_missing_element_marks_deletion() {
    let driver = ProbeMap::new(HashMap::new());
    let tree = reconcile_tree(&driver, raw("button", "Gone", 5), &[], &DefaultClickability).await;
    assert!(tree.marked_for_deletion);
}

#[tokio::test]
async fn test_probe_failure_degrades_single_node() {
    let mut probes = HashMap::new();
    probes.insert(3, probe_json("button"));
    let mut driver = ProbeMap::new(probes);
    driver.failing = vec![2];

    let mut root = AxNode {
        role: Some("WebArea".to_string()),
        name: Some("Page".to_string()),
        ..AxNode::default()
    };
    root.children = Some(vec![raw("link", "stale", 2), raw("button", "live", 3)]);

    let tree = reconcile_tree(&driver, root, &[], &DefaultClickability).await;
    let children = tree.children.as_ref().unwrap();
    assert!(children[0].marked_for_deletion);
    assert!(!children[1].marked_for_deletion);
    assert_eq!(children[1].mmid, Some(3));
}

#[tokio::test]
async fn test_menuitem_summarized_without_probe() {
    let driver = ProbeMap::new(HashMap::new());
    let tree = reconcile_tree(
        &driver,
        raw("menuitem", "Copy link", 8),
        &[],
        &DefaultClickability,
    )
    .await;

    assert_eq!(tree.role.as_deref(), Some("menuitem"));
    assert_eq!(tree.name.as_deref(), Some("Copy link"));
    assert!(tree.mmid.is_none());
    assert!(driver.seen_args.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_modal_dialog_gets_advisory() {
    let mut probes = HashMap::new();
    probes.insert(6, probe_json("div"));
    let driver = ProbeMap::new(probes);

    let mut node = raw("dialog", "Cookie consent", 6);
    node.modal = Some(true);

    let tree = reconcile_tree(&driver, node, &[], &DefaultClickability).await;
    assert_eq!(tree.advisory.as_deref(), Some(MODAL_DIALOG_ADVISORY));
    // Generic enrichment still ran.
    assert_eq!(tree.mmid, Some(6));
    assert_eq!(tree.tag.as_deref(), Some("div"));
}

#[tokio::test]
async fn test_calendar_checkbox_skips_probe() {
    let driver = ProbeMap::new(HashMap::new());
    let tree = reconcile_tree(
        &driver,
        raw("checkbox", "12 March 2025", 14),
        &[],
        &DefaultClickability,
    )
    .await;

    assert_eq!(tree.mmid, Some(14));
    assert_eq!(tree.tag.as_deref(), Some("button"));
    assert_eq!(tree.is_clickable, Some(true));
    assert!(driver.seen_args.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_inner_text_requested_for_leaves_only() {
    let mut probes = HashMap::new();
    probes.insert(2, probe_json("div"));
    probes.insert(3, probe_json("p"));
    let driver = ProbeMap::new(probes);

    let mut root = raw("generic", "wrapper", 2);
    root.children = Some(vec![raw("paragraph", "body", 3)]);

    reconcile_tree(&driver, root, &[], &DefaultClickability).await;

    let seen = driver.seen_args.lock().unwrap();
    // Post-order: the leaf (mmid 3) probes first, with inner text.
    assert_eq!(seen[0]["mmid"], json!(3));
    assert_eq!(seen[0]["fetchInnerText"], json!(true));
    assert_eq!(seen[1]["mmid"], json!(2));
    assert_eq!(seen[1]["fetchInnerText"], json!(false));
}

#[tokio::test]
async fn test_ignored_ids_forwarded_to_probe() {
    let mut probes = HashMap::new();
    probes.insert(4, probe_json("div"));
    let driver = ProbeMap::new(probes);

    let ignored = vec!["agentDriveAutoOverlay".to_string()];
    reconcile_tree(&driver, raw("generic", "x", 4), &ignored, &DefaultClickability).await;

    let seen = driver.seen_args.lock().unwrap();
    assert_eq!(seen[0]["idsToIgnore"], json!(["agentDriveAutoOverlay"]));
}
