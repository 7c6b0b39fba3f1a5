use dioxus::prelude::*;

use super::component::keep_nested_keydown;

/// A selected value in multi mode: its label and an inline remove button.
///
/// The remove click and its Enter/Space activation never reach the control,
/// so removing a tag does not also open or close the menu.
#[component]
pub fn SelectedTag(
    label: String,
    #[props(default = false)] disabled: bool,
    on_remove: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        span { class: "deal-dropdown-tag",
            span { class: "deal-dropdown-tag-label", "{label}" }
            button {
                class: "deal-dropdown-tag-remove",
                r#type: "button",
                "aria-label": "Remove {label}",
                disabled: disabled,
                onkeydown: keep_nested_keydown,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_remove.call(evt);
                },
                "×"
            }
        }
    }
}
