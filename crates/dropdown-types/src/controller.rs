use serde_json::Value;
use tracing::{debug, trace};

use crate::option::NormalizedOption;
use crate::selection::{values_to_json, Selection};
use crate::value::OptionValue;

/// Whether the option menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Keys the control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Enter,
    Space,
    Escape,
}

/// User interactions delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent {
    ControlClicked,
    KeyPressed(ControlKey),
    /// Pointer-down anywhere in the document while the listener is attached.
    PointerDown { inside: bool },
    SearchChanged(String),
    OptionClicked(NormalizedOption),
    ClearClicked,
    TagRemoved(OptionValue),
}

/// A new `value` proposed to the host. The host decides whether to accept it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChanged(pub Value);

/// Read-only inputs the controller needs to interpret an event.
#[derive(Debug, Clone, Copy)]
pub struct DropdownContext<'a> {
    pub selection: &'a Selection,
    pub disabled: bool,
}

/// Local interaction state: menu visibility and the search term.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interaction {
    menu: MenuState,
    search_term: String,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in a given state. Used by hosts that render a pre-opened menu.
    pub fn with_state(menu: MenuState, search_term: impl Into<String>) -> Self {
        Self {
            menu,
            search_term: search_term.into(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Apply one event, returning the value to propose to the host, if any.
    pub fn handle(&mut self, event: DropdownEvent, ctx: &DropdownContext<'_>) -> Option<ValueChanged> {
        match event {
            DropdownEvent::ControlClicked => {
                if !ctx.disabled {
                    self.toggle();
                }
                None
            }
            DropdownEvent::KeyPressed(key) => {
                if ctx.disabled {
                    return None;
                }
                match key {
                    ControlKey::Enter | ControlKey::Space => self.toggle(),
                    ControlKey::Escape => self.set_menu(MenuState::Closed),
                }
                None
            }
            DropdownEvent::PointerDown { inside } => {
                self.pointer_down(inside);
                None
            }
            DropdownEvent::SearchChanged(term) => {
                if ctx.disabled {
                    return None;
                }
                trace!(term = %term, "search term changed");
                self.search_term = term;
                if !self.is_open() {
                    self.set_menu(MenuState::Open);
                }
                None
            }
            DropdownEvent::OptionClicked(option) => {
                if option.disabled || ctx.disabled {
                    return None;
                }
                if ctx.selection.is_multi() {
                    let next = ctx.selection.toggled(&option.value);
                    Some(emit(values_to_json(&next)))
                } else {
                    self.set_menu(MenuState::Closed);
                    Some(emit(option.value.to_json()))
                }
            }
            DropdownEvent::ClearClicked => {
                if ctx.disabled {
                    return None;
                }
                self.search_term.clear();
                Some(emit(ctx.selection.cleared()))
            }
            DropdownEvent::TagRemoved(value) => {
                if ctx.disabled || !ctx.selection.is_multi() {
                    return None;
                }
                Some(emit(values_to_json(&ctx.selection.without(&value))))
            }
        }
    }

    /// Document pointer-down. Only a press outside the component closes the
    /// menu, and it also drops the search term.
    pub fn pointer_down(&mut self, inside: bool) {
        if !inside && self.is_open() {
            self.set_menu(MenuState::Closed);
            self.search_term.clear();
        }
    }

    fn toggle(&mut self) {
        let next = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.set_menu(next);
    }

    fn set_menu(&mut self, next: MenuState) {
        if self.menu != next {
            debug!(from = ?self.menu, to = ?next, "dropdown menu transition");
            self.menu = next;
        }
    }
}

fn emit(value: Value) -> ValueChanged {
    debug!(%value, "proposing new dropdown value");
    ValueChanged(value)
}
