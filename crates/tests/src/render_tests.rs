use serde_json::json;

use crate::common::{count, departments, render_closed, render_open, render_stateful_departments, TEST_KEY};

#[test]
fn root_carries_id_and_instance_key() {
    let html = render_closed(json!({"id": "region-filter", "options": departments()}));
    assert!(html.contains(r#"id="region-filter""#));
    assert!(html.contains(&format!(r#"data-dropdown-key="{TEST_KEY}""#)));
}

#[test]
fn closed_dropdown_renders_no_menu() {
    let html = render_closed(json!({"id": "region-filter", "options": departments()}));
    assert!(!html.contains(r#"id="region-filter-menu""#));
    assert!(html.contains(r#"aria-controls="region-filter-menu""#));
    assert!(!html.contains("deal-dropdown-option"));
    assert!(html.contains("rotate(0deg)"));
    assert!(html.contains(r#"aria-expanded="false""#));
}

#[test]
fn open_dropdown_rotates_indicator() {
    let html = render_open(json!({"options": departments()}), "");
    assert!(html.contains("rotate(180deg)"));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains("is-open"));
}

#[test]
fn placeholder_shown_for_empty_multi_selection() {
    let html = render_closed(json!({"options": departments(), "value": [], "placeholder": "Select a department"}));
    assert!(html.contains("deal-dropdown-placeholder"));
    assert!(html.contains("Select a department"));
    // the input's own placeholder is blanked while the outer label shows
    assert!(html.contains(r#"placeholder="""#));
}

#[test]
fn placeholder_hidden_while_searching_without_tags() {
    let html = render_open(json!({"options": departments(), "value": [], "placeholder": "Select a department"}), "re");
    assert!(!html.contains("deal-dropdown-placeholder"));
    assert!(html.contains(r#"placeholder="Select a department""#));
    assert!(html.contains(r#"value="re""#));
}

#[test]
fn input_keeps_placeholder_once_tags_hide_the_label() {
    let html = render_closed(json!({"options": departments(), "value": ["retail"], "placeholder": "Select a department"}));
    assert!(!html.contains("deal-dropdown-placeholder"));
    assert!(html.contains(r#"placeholder="Select a department""#));
}

#[test]
fn single_mode_shows_selected_label() {
    let html = render_closed(json!({"multi": false, "options": departments(), "value": "corp", "placeholder": "Pick"}));
    assert!(html.contains("deal-dropdown-single-value"));
    assert!(html.contains("Corporate"));
    assert!(!html.contains("deal-dropdown-placeholder"));
}

#[test]
fn single_mode_unknown_value_falls_back_to_placeholder() {
    let html = render_closed(json!({"multi": false, "options": departments(), "value": "nope", "placeholder": "Pick"}));
    assert!(!html.contains("deal-dropdown-single-value"));
    assert!(html.contains("deal-dropdown-placeholder"));
    assert!(!html.contains("deal-dropdown-clear"));
}

#[test]
fn search_input_omitted_when_not_searchable() {
    let html = render_closed(json!({"options": departments(), "searchable": false}));
    assert!(!html.contains("deal-dropdown-input"));

    let html = render_closed(json!({"options": departments()}));
    assert_eq!(count(&html, "deal-dropdown-input"), 1);
}

#[test]
fn clear_button_needs_clearable_and_a_value() {
    let html = render_closed(json!({"options": departments(), "value": ["retail"]}));
    assert_eq!(count(&html, "deal-dropdown-clear"), 1);

    let html = render_closed(json!({"options": departments(), "value": ["retail"], "clearable": false}));
    assert!(!html.contains("deal-dropdown-clear"));

    let html = render_closed(json!({"options": departments(), "value": []}));
    assert!(!html.contains("deal-dropdown-clear"));
}

#[test]
fn caller_style_and_class_merge_onto_root() {
    let html = render_closed(json!({
        "options": departments(),
        "className": "w-100 report-dynamics-dropdown",
        "style": {"backgroundColor": "transparent", "color": "#FFFFFF"}
    }));
    assert!(html.contains("report-dynamics-dropdown"));
    assert!(html.contains("background-color: transparent;"));
    assert!(html.contains("color: #FFFFFF;"));
    assert!(html.contains("position: relative;"));
}

#[test]
fn loading_state_reflected_on_root() {
    let html = render_closed(json!({"options": [], "loading_state": {"is_loading": true}}));
    assert!(html.contains(r#"data-dash-is-loading="true""#));

    let html = render_closed(json!({"options": []}));
    assert!(!html.contains("data-dash-is-loading"));
}

#[test]
fn disabled_control_is_not_focusable_and_stays_closed() {
    let html = render_open(json!({"options": departments(), "disabled": true}), "");
    assert!(html.contains(r#"aria-disabled="true""#));
    assert!(html.contains(r#"tabindex="-1""#));
    assert!(html.contains("is-disabled"));
    assert!(!html.contains("deal-dropdown-menu"));
}

#[test]
fn malformed_props_render_without_failing() {
    let html = render_open(json!({"options": "not-a-list", "value": "not-a-list"}), "");
    assert!(html.contains("deal-dropdown-no-results"));
    assert_eq!(count(&html, "deal-dropdown-tag\""), 0);
}

#[test]
fn stateful_component_mounts_closed() {
    let html = render_stateful_departments();
    assert!(html.contains(r#"id="deal-pipeline-department-filter""#));
    assert!(html.contains("Retail"));
    assert!(!html.contains("deal-dropdown-menu"));
    assert!(!html.contains("deal-dropdown-clear"));
    assert!(html.contains("data-dropdown-key=\"deal-dropdown-"));
}
