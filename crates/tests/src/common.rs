use dioxus::prelude::*;
use dropdown_types::{DropdownConfig, Interaction, MenuState};
use dropdown_ui::components::{DealDropdown, DropdownSurface};
use serde_json::Value;

/// Instance key used by every rendered surface.
pub const TEST_KEY: &str = "deal-dropdown-test";

#[derive(Props, Clone, PartialEq)]
pub struct HarnessProps {
    pub config: DropdownConfig,
    pub menu: MenuState,
    pub search_term: String,
}

/// Renders a surface with a pre-seeded interaction state.
#[component]
fn Harness(props: HarnessProps) -> Element {
    let interaction = use_signal(|| Interaction::with_state(props.menu, props.search_term.clone()));

    rsx! {
        DropdownSurface {
            config: props.config.clone(),
            interaction,
            instance_key: TEST_KEY,
            on_change: move |_| {},
        }
    }
}

/// Render a surface built from JSON props to an HTML string.
pub fn render_surface(config: Value, menu: MenuState, search_term: &str) -> String {
    let config = DropdownConfig::from_json_value(config).expect("test config should parse");
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            config,
            menu,
            search_term: search_term.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_closed(config: Value) -> String {
    render_surface(config, MenuState::Closed, "")
}

pub fn render_open(config: Value, search_term: &str) -> String {
    render_surface(config, MenuState::Open, search_term)
}

fn departments_app() -> Element {
    rsx! {
        DealDropdown {
            id: "deal-pipeline-department-filter",
            options: departments(),
            value: serde_json::json!(["retail"]),
            placeholder: "Select a department",
            clearable: false,
            class_name: "w-100",
        }
    }
}

/// Render the stateful component as a host page would mount it.
pub fn render_stateful_departments() -> String {
    let mut dom = VirtualDom::new(departments_app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn departments() -> Value {
    serde_json::json!([
        {"label": "Retail", "value": "retail"},
        {"label": "Corporate", "value": "corp", "title": "Corporate banking"},
        {"label": "Treasury", "value": "tsy", "disabled": true}
    ])
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
