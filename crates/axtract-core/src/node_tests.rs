use super::*;

#[test]
fn test_raw_snapshot_deserializes() {
    let raw = serde_json::json!({
        "role": "WebArea",
        "name": "Example",
        "children": [
            {"role": "button", "name": "Submit", "keyshortcuts": "7", "level": 2}
        ]
    });

    let node: AxNode = serde_json::from_value(raw).unwrap();
    assert_eq!(node.role.as_deref(), Some("WebArea"));
    let child = &node.children.as_ref().unwrap()[0];
    assert_eq!(child.keyshortcuts.as_deref(), Some("7"));
    // Unmodeled snapshot properties land in `extra`.
    assert_eq!(child.extra.get("level"), Some(&serde_json::json!(2)));
}

#[test]
fn test_internal_markers_never_serialize() {
    let node = AxNode {
        role: Some("generic".to_string()),
        marked_for_deletion: true,
        marked_for_unravel: true,
        ..AxNode::default()
    };

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json, serde_json::json!({"role": "generic"}));
}

#[test]
fn test_unset_fields_stay_out_of_output() {
    let node = AxNode::leaf("text", "hello world");
    let json = serde_json::to_string(&node).unwrap();
    assert_eq!(json, r#"{"role":"text","name":"hello world"}"#);
}

#[test]
fn test_is_bare_role_name() {
    assert!(AxNode::leaf("text", "hi").is_bare_role_name());

    let mut with_mmid = AxNode::leaf("text", "hi");
    with_mmid.mmid = Some(4);
    assert!(!with_mmid.is_bare_role_name());

    let mut with_extra = AxNode::leaf("text", "hi");
    with_extra
        .extra
        .insert("level".to_string(), serde_json::json!(1));
    assert!(!with_extra.is_bare_role_name());

    let nameless = AxNode {
        role: Some("text".to_string()),
        ..AxNode::default()
    };
    assert!(!nameless.is_bare_role_name());
}

#[test]
fn test_select_option_round_trip() {
    let option = SelectOption {
        mmid: Some(12),
        text: "B".to_string(),
        value: "b".to_string(),
        selected: true,
    };
    let json = serde_json::to_value(&option).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"mmid": 12, "text": "B", "value": "b", "selected": true})
    );
}
