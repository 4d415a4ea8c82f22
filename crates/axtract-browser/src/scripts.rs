//! JavaScript programs executed inside the page.
//!
//! The correlation id is stored twice on every element: in the `mmid`
//! attribute (queried during reconciliation) and in `aria-keyshortcuts`,
//! a rarely used ARIA attribute the host surfaces as the `keyshortcuts`
//! snapshot property. That double write is the wire contract between the
//! DOM and the snapshot; everything else in these scripts is plain
//! attribute bookkeeping.

/// Stamp every element with a sequential correlation id, in document
/// order starting at 1. A pre-existing `aria-keyshortcuts` value is
/// preserved under `orig-aria-keyshortcuts` before being overwritten,
/// unless a backup already exists or the value is a stale stamp of ours
/// from an injection that never got cleaned up. Returns the count of
/// stamped elements.
pub const INJECT_MARKERS: &str = r#"() => {
    const allElements = document.querySelectorAll('*');
    let id = 0;
    allElements.forEach(element => {
        const previousStamp = element.getAttribute('mmid');
        const existing = element.getAttribute('aria-keyshortcuts');
        const mmid = `${++id}`;
        if (existing
            && !element.hasAttribute('orig-aria-keyshortcuts')
            && existing !== previousStamp) {
            element.setAttribute('orig-aria-keyshortcuts', existing);
        }
        element.setAttribute('mmid', mmid);
        element.setAttribute('aria-keyshortcuts', mmid);
    });
    return id;
}"#;

/// Remove the accessibility-visible marker from every stamped element and
/// restore any backed-up original value. The `mmid` attribute itself stays
/// in place; reconciliation resolves elements through it afterwards.
pub const CLEANUP_MARKERS: &str = r#"() => {
    const allElements = document.querySelectorAll('*[mmid]');
    allElements.forEach(element => {
        element.removeAttribute('aria-keyshortcuts');
        const original = element.getAttribute('orig-aria-keyshortcuts');
        if (original) {
            element.setAttribute('aria-keyshortcuts', original);
            element.removeAttribute('orig-aria-keyshortcuts');
        }
    });
}"#;

/// Resolve one element by correlation id and return its probe bag:
/// tag, allow-listed attributes, clickability signals, input type,
/// select options, and (when asked) inner text. Returns `null` for
/// missing elements, ignored tags/ids and bare `<option>` elements.
pub const PROBE_ELEMENT: &str = r#"(params) => {
    const element = document.querySelector(`[mmid="${params.mmid}"]`);
    if (!element) {
        return null;
    }
    if (params.idsToIgnore.includes(element.id)) {
        return null;
    }
    const tag = element.tagName.toLowerCase();
    if (params.tagsToIgnore.includes(tag) || tag === 'option') {
        return null;
    }

    let cursor = '';
    try {
        cursor = window.getComputedStyle(element).cursor;
    } catch (e) {
        // Detached elements have no computed style.
    }

    const probe = {
        tag: tag,
        attributes: {},
        signals: {
            has_click_handler: element.onclick != null,
            cursor_pointer: cursor === 'pointer',
            aria_role: element.getAttribute('role'),
            has_tabindex: element.hasAttribute('tabindex'),
            class_name: `${element.className || ''}`,
            has_svg: element.querySelector('svg') !== null,
            tag: tag
        }
    };

    if (tag === 'input') {
        probe.input_type = element.type;
    }

    if (tag === 'select') {
        probe.options = [];
        for (const option of element.options) {
            const optionMmid = parseInt(option.getAttribute('mmid'), 10);
            probe.options.push({
                mmid: Number.isNaN(optionMmid) ? null : optionMmid,
                text: option.text,
                value: option.value,
                selected: option.selected
            });
        }
        return probe;
    }

    for (const attribute of params.attributes) {
        const value = element.getAttribute(attribute);
        if (value) {
            probe.attributes[attribute] = value;
        }
    }
    if (!probe.attributes['role'] && element.role) {
        probe.attributes['role'] = element.role;
    }

    if (params.fetchInnerText && element.innerText) {
        probe.inner_text = element.innerText;
    }

    return probe;
}"#;
