use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{count, departments, render_closed};

const TAG: &str = r#"class="deal-dropdown-tag""#;

#[test]
fn tags_render_in_selection_order() {
    let html = render_closed(json!({"options": departments(), "value": ["corp", "retail"]}));
    assert_eq!(count(&html, TAG), 2);
    let corporate = html.find(">Corporate<").expect("corporate tag");
    let retail = html.find(">Retail<").expect("retail tag");
    assert!(corporate < retail);
}

#[test]
fn values_without_options_are_skipped() {
    let html = render_closed(json!({"options": departments(), "value": ["ghost", "retail"]}));
    assert_eq!(count(&html, TAG), 1);
    assert!(!html.contains("ghost"));
}

#[test]
fn each_tag_has_a_remove_button() {
    let html = render_closed(json!({"options": departments(), "value": ["corp", "retail", "tsy"]}));
    assert_eq!(count(&html, "deal-dropdown-tag-remove"), 3);
    assert!(html.contains(r#"aria-label="Remove Treasury""#));
}

#[test]
fn single_mode_never_renders_tags() {
    let html = render_closed(json!({"multi": false, "options": departments(), "value": "retail"}));
    assert_eq!(count(&html, TAG), 0);
}

#[test]
fn fragment_labels_resolve_for_tags() {
    let html = render_closed(json!({
        "options": [{"label": {"type": "Span", "props": {"children": "Северо-Запад"}}, "value": "nw"}],
        "value": ["nw"]
    }));
    assert_eq!(count(&html, TAG), 1);
    assert!(html.contains(">Северо-Запад<"));
}
