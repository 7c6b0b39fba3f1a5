use dioxus::prelude::*;
use dropdown_types::NormalizedOption;

/// Text of the single row shown when nothing matches the search term.
pub const NO_RESULTS_TEXT: &str = "No results";

/// One row of the open menu, resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub option: NormalizedOption,
    pub label: String,
    pub selected: bool,
}

impl MenuRow {
    fn class(&self) -> &'static str {
        match (self.selected, self.option.disabled) {
            (true, true) => "deal-dropdown-option selected disabled",
            (true, false) => "deal-dropdown-option selected",
            (false, true) => "deal-dropdown-option disabled",
            (false, false) => "deal-dropdown-option",
        }
    }
}

/// Scrollable overlay listing the filtered options below the control.
#[component]
pub fn DropdownMenu(
    id: String,
    #[props(default = true)] multi: bool,
    rows: Vec<MenuRow>,
    on_select: EventHandler<NormalizedOption>,
) -> Element {
    let empty = rows.is_empty();

    rsx! {
        div {
            id: "{id}",
            class: "deal-dropdown-menu",
            role: "listbox",
            "aria-multiselectable": if multi { "true" } else { "false" },
            if empty {
                div { class: "deal-dropdown-no-results", "{NO_RESULTS_TEXT}" }
            }
            for (index, row) in rows.into_iter().enumerate() {
                DropdownOptionRow { key: "{index}", row, on_select }
            }
        }
    }
}

#[component]
fn DropdownOptionRow(row: MenuRow, on_select: EventHandler<NormalizedOption>) -> Element {
    let option = row.option.clone();
    let title = option.title();

    rsx! {
        div {
            class: row.class(),
            role: "option",
            title: title,
            "aria-selected": if row.selected { "true" } else { "false" },
            "aria-disabled": if row.option.disabled { "true" } else { "false" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if !option.disabled {
                    on_select.call(option.clone());
                }
            },
            "{row.label}"
        }
    }
}
