use dioxus::prelude::*;
use dropdown_types::DropdownError;
use dropdown_ui::components::DealDropdown;
use serde_json::Value;
use tracing::{error, info, Level};

mod config;
use config::{DemoConfig, FilterEntry};

const DEMO_CSS: Asset = asset!("/assets/demo.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[demo] logger already initialized: {err}");
    }

    match renderer_platform() {
        Ok(platform) => {
            info!(platform, "launching dropdown demo");
            dioxus::launch(App);
        }
        Err(err) => {
            error!(%err, "dropdown demo not started");
            std::process::exit(1);
        }
    }
}

/// Detect the renderer compiled in through cargo features. Without one the
/// page cannot be drawn, so initialization stops here.
pub fn renderer_platform() -> Result<&'static str, DropdownError> {
    if cfg!(feature = "web") {
        Ok("web")
    } else if cfg!(feature = "desktop") {
        Ok("desktop")
    } else if cfg!(feature = "mobile") {
        Ok("mobile")
    } else {
        Err(DropdownError::unsupported_platform(
            "no renderer enabled; build with --features web, desktop or mobile",
        ))
    }
}

#[component]
fn App() -> Element {
    let filters = use_hook(|| DemoConfig::load().filter);

    rsx! {
        document::Link { rel: "stylesheet", href: DEMO_CSS }
        main { class: "demo-page",
            h2 { "Deal pipeline" }
            div { class: "demo-filters",
                for (index, filter) in filters.into_iter().enumerate() {
                    FilterField { key: "{index}", filter }
                }
            }
        }
    }
}

/// A labelled dropdown whose value is owned here and fed back on every change.
#[component]
fn FilterField(filter: FilterEntry) -> Element {
    let mut value = use_signal(|| filter.dropdown.value.clone());
    let dropdown = filter.dropdown;
    let id = dropdown.id.clone().unwrap_or_default();
    let log_id = id.clone();

    rsx! {
        div { class: "demo-filter",
            label { class: "demo-filter-label", "{filter.label}" }
            DealDropdown {
                id,
                options: dropdown.options,
                value: value(),
                multi: dropdown.multi,
                placeholder: dropdown.placeholder,
                disabled: dropdown.disabled,
                searchable: dropdown.searchable,
                clearable: dropdown.clearable,
                class_name: dropdown.class_name.unwrap_or_default(),
                style: dropdown.style,
                on_change: move |next: Value| {
                    info!(id = %log_id, value = %next, "filter value changed");
                    value.set(next);
                },
            }
            div { class: "demo-filter-value", "value = {value}" }
        }
    }
}
