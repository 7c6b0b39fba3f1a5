use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdX};
use dioxus_free_icons::Icon;
use dropdown_types::{
    filter_options, find_option, normalize_options, ControlKey, DropdownConfig, DropdownContext,
    DropdownEvent, Interaction, LoadingState, NormalizedOption, OptionValue, Selection,
    ValueChanged,
};
use serde_json::{Map, Value};

use super::menu::{DropdownMenu, MenuRow};
use super::outside_click::{next_instance_key, ListenerSlot, OutsideClickListener};
use super::tag::SelectedTag;

/// Everything the surface needs to draw one frame, derived from the host
/// config, the normalized options and the local interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceModel {
    pub open: bool,
    pub show_placeholder: bool,
    pub input_placeholder: String,
    /// Multi-mode tags in selection order. Values without an option are skipped.
    pub tags: Vec<(OptionValue, String)>,
    /// Single-mode label of the selected option, if it has one.
    pub single_label: Option<String>,
    pub can_clear: bool,
    /// Rows of the open menu; empty while closed.
    pub rows: Vec<MenuRow>,
}

impl SurfaceModel {
    pub fn build(
        config: &DropdownConfig,
        options: &[NormalizedOption],
        selection: &Selection,
        interaction: &Interaction,
    ) -> Self {
        let search_term = interaction.search_term();
        let open = interaction.is_open() && !config.disabled;

        let tags: Vec<(OptionValue, String)> = if config.multi {
            selection
                .values()
                .iter()
                .filter_map(|value| {
                    find_option(options, value).map(|option| (value.clone(), option.display_label()))
                })
                .collect()
        } else {
            Vec::new()
        };

        let single_label = if config.multi {
            None
        } else {
            selection
                .values()
                .first()
                .and_then(|value| find_option(options, value))
                .map(NormalizedOption::display_label)
        };

        let show_placeholder = if config.multi {
            tags.is_empty() && search_term.is_empty()
        } else {
            single_label.is_none()
        };

        // Blanked exactly while the outer label shows, so the two never overlap.
        let input_placeholder = if show_placeholder {
            String::new()
        } else {
            config.placeholder.clone()
        };

        let has_value = if config.multi {
            !selection.is_empty()
        } else {
            single_label.is_some()
        };

        let rows = if open {
            filter_options(options, search_term)
                .into_iter()
                .map(|option| MenuRow {
                    label: option.display_label(),
                    selected: selection.is_selected(option),
                    option: option.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            open,
            show_placeholder,
            input_placeholder,
            tags,
            single_label,
            can_clear: config.clearable && has_value,
            rows,
        }
    }
}

/// Map a keyboard key onto the keys the control handles.
pub fn control_key(key: &Key) -> Option<ControlKey> {
    match key {
        Key::Enter => Some(ControlKey::Enter),
        Key::Escape => Some(ControlKey::Escape),
        Key::Character(c) if c == " " => Some(ControlKey::Space),
        _ => None,
    }
}

/// Whether a keydown on an element nested in the control (search input, clear
/// or tag-remove button) should bubble up to the control's handler.
///
/// Only Escape does. Enter and Space belong to the nested element, otherwise
/// the control would toggle the menu and cancel the button's own activation.
pub fn reaches_control(key: &Key) -> bool {
    *key == Key::Escape
}

/// Keydown handler for elements nested in the control.
pub(crate) fn keep_nested_keydown(evt: KeyboardEvent) {
    if !reaches_control(&evt.key()) {
        evt.stop_propagation();
    }
}

/// Searchable, optionally multi-select dropdown.
///
/// The host owns `value`: every selection, clear or tag removal is reported
/// through `on_change` and the component re-derives its display from whatever
/// `value` it is given next. Menu visibility and the search term are local.
#[component]
pub fn DealDropdown(
    #[props(default)] id: String,
    #[props(default = Value::Array(Vec::new()))] options: Value,
    #[props(default)] value: Value,
    #[props(default = true)] multi: bool,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
    #[props(default = true)] searchable: bool,
    #[props(default = true)] clearable: bool,
    #[props(default)] class_name: String,
    #[props(default)] style: Map<String, Value>,
    #[props(default)] loading_state: Option<LoadingState>,
    #[props(default)] on_change: Option<EventHandler<Value>>,
) -> Element {
    let mut interaction = use_signal(Interaction::new);
    let mut listener = use_signal(ListenerSlot::<OutsideClickListener>::default);
    let instance_key = use_hook(next_instance_key);

    {
        let key = instance_key.clone();
        use_effect(move || {
            let open = interaction.read().is_open();
            if open != listener.peek().is_attached() {
                listener.write().sync(open, || {
                    OutsideClickListener::attach(&key, move || {
                        interaction.write().pointer_down(false);
                    })
                });
            }
        });
    }

    use_drop(move || {
        if let Ok(mut slot) = listener.try_write() {
            slot.release();
        }
    });

    let config = DropdownConfig {
        id: (!id.is_empty()).then_some(id),
        options,
        value,
        multi,
        placeholder,
        disabled,
        searchable,
        clearable,
        class_name: (!class_name.is_empty()).then_some(class_name),
        style,
        loading_state,
    };

    rsx! {
        DropdownSurface {
            config,
            interaction,
            instance_key,
            on_change: move |value: Value| {
                if let Some(handler) = &on_change {
                    handler.call(value);
                }
            },
        }
    }
}

/// Renders a dropdown from its config and an interaction signal, dispatching
/// user input into that signal.
///
/// `DealDropdown` owns the signal and the outside-press listener; hosts that
/// need to drive the interaction state themselves can render this directly.
/// Extra attributes are merged onto the root element.
#[component]
pub fn DropdownSurface(
    config: DropdownConfig,
    interaction: Signal<Interaction>,
    #[props(default)] instance_key: String,
    on_change: EventHandler<Value>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut interaction = interaction;
    let options = use_memo(use_reactive((&config.options,), |(options,)| {
        normalize_options(&options)
    }));
    let selection = config.selection();
    let disabled = config.disabled;
    let multi = config.multi;

    let dispatch = {
        let selection = selection.clone();
        use_callback(move |event: DropdownEvent| {
            let ctx = DropdownContext {
                selection: &selection,
                disabled,
            };
            let emitted = interaction.write().handle(event, &ctx);
            if let Some(ValueChanged(value)) = emitted {
                on_change.call(value);
            }
        })
    };

    let model = SurfaceModel::build(&config, &options.read(), &selection, &interaction.read());
    let search_term = interaction.read().search_term().to_string();

    let mut root_class = String::from("deal-dropdown");
    if model.open {
        root_class.push_str(" is-open");
    }
    if disabled {
        root_class.push_str(" is-disabled");
    }
    if let Some(extra) = &config.class_name {
        root_class.push(' ');
        root_class.push_str(extra);
    }
    let base = vec![
        Attribute::new("class", root_class, None, false),
        Attribute::new("style", config.root_style(), None, false),
        Attribute::new("data-dropdown-key", instance_key, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let indicator_style = if model.open {
        "transform: rotate(180deg);"
    } else {
        "transform: rotate(0deg);"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            id: config.id.clone(),
            "data-dash-is-loading": if config.is_loading() { Some("true") } else { None },
            ..merged,
            div {
                class: "deal-dropdown-control",
                role: "combobox",
                tabindex: if disabled { "-1" } else { "0" },
                "aria-expanded": if model.open { "true" } else { "false" },
                "aria-disabled": if disabled { "true" } else { "false" },
                "aria-controls": config.menu_id(),
                onclick: move |_| dispatch.call(DropdownEvent::ControlClicked),
                onkeydown: move |evt: KeyboardEvent| {
                    if let Some(key) = control_key(&evt.key()) {
                        evt.prevent_default();
                        dispatch.call(DropdownEvent::KeyPressed(key));
                    }
                },
                div { class: "deal-dropdown-values",
                    if model.show_placeholder {
                        span { class: "deal-dropdown-placeholder", "{config.placeholder}" }
                    }
                    for (index, (value, label)) in model.tags.into_iter().enumerate() {
                        SelectedTag {
                            key: "{index}",
                            label,
                            disabled,
                            on_remove: move |_| dispatch.call(DropdownEvent::TagRemoved(value.clone())),
                        }
                    }
                    if let Some(label) = &model.single_label {
                        span { class: "deal-dropdown-single-value", "{label}" }
                    }
                    if config.searchable {
                        input {
                            class: "deal-dropdown-input",
                            r#type: "text",
                            value: "{search_term}",
                            placeholder: "{model.input_placeholder}",
                            disabled: disabled,
                            onclick: move |evt: MouseEvent| evt.stop_propagation(),
                            oninput: move |evt: FormEvent| dispatch.call(DropdownEvent::SearchChanged(evt.value())),
                            onkeydown: keep_nested_keydown,
                        }
                    }
                }
                if model.can_clear {
                    button {
                        class: "deal-dropdown-clear",
                        r#type: "button",
                        "aria-label": "Clear selection",
                        onkeydown: keep_nested_keydown,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            dispatch.call(DropdownEvent::ClearClicked);
                        },
                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                    }
                }
                span { class: "deal-dropdown-indicator", style: indicator_style,
                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                }
            }
            if model.open {
                DropdownMenu {
                    id: config.menu_id(),
                    multi,
                    rows: model.rows,
                    on_select: move |option: NormalizedOption| dispatch.call(DropdownEvent::OptionClicked(option)),
                }
            }
        }
    }
}
