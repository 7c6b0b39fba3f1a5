use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{count, departments, render_open};

const OPTION_ROW: &str = r#"role="option""#;

#[test]
fn menu_id_derives_from_root_id() {
    let html = render_open(json!({"id": "deal-pipeline-department-filter", "options": departments()}), "");
    assert!(html.contains(r#"id="deal-pipeline-department-filter-menu""#));
}

#[test]
fn menu_id_without_root_id_has_empty_prefix() {
    let html = render_open(json!({"options": departments()}), "");
    assert!(html.contains(r#"id="-menu""#));
}

#[test]
fn open_menu_lists_every_option_in_order() {
    let html = render_open(json!({"options": departments()}), "");
    assert_eq!(count(&html, OPTION_ROW), 3);
    let retail = html.find(">Retail<").expect("retail row");
    let corporate = html.find(">Corporate<").expect("corporate row");
    let treasury = html.find(">Treasury<").expect("treasury row");
    assert!(retail < corporate && corporate < treasury);
}

#[test]
fn search_term_filters_rows_case_insensitively() {
    let html = render_open(json!({"options": [{"label": "Alpha", "value": 1}, {"label": "Beta", "value": 2}]}), "AL");
    assert_eq!(count(&html, OPTION_ROW), 1);
    assert!(html.contains(">Alpha<"));
    assert!(!html.contains(">Beta<"));
}

#[test]
fn empty_results_render_single_placeholder_row() {
    let html = render_open(json!({"options": departments()}), "zzz");
    assert_eq!(count(&html, "deal-dropdown-no-results"), 1);
    assert_eq!(count(&html, OPTION_ROW), 0);
    assert!(html.contains("No results"));
}

#[test]
fn rows_reflect_selected_and_disabled_state() {
    let html = render_open(json!({"options": departments(), "value": ["corp"]}), "");
    assert_eq!(count(&html, r#"class="deal-dropdown-option selected""#), 1);
    assert_eq!(count(&html, r#"class="deal-dropdown-option disabled""#), 1);
    assert_eq!(count(&html, r#"aria-selected="true""#), 1);
    assert_eq!(count(&html, r#"aria-disabled="true""#), 1);
}

#[test]
fn row_title_comes_from_structured_entry() {
    let html = render_open(json!({"options": departments()}), "");
    assert!(html.contains(r#"title="Corporate banking""#));
}

#[test]
fn listbox_marks_multi_mode() {
    let html = render_open(json!({"options": departments()}), "");
    assert!(html.contains(r#"aria-multiselectable="true""#));

    let html = render_open(json!({"options": departments(), "multi": false}), "");
    assert!(html.contains(r#"aria-multiselectable="false""#));
}

#[test]
fn primitive_options_label_themselves() {
    let html = render_open(json!({"options": ["North", 7, true]}), "");
    assert_eq!(count(&html, OPTION_ROW), 3);
    assert!(html.contains(">North<"));
    assert!(html.contains(">7<"));
    assert!(html.contains(">true<"));
}
