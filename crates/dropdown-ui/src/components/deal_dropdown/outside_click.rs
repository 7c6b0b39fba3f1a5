use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::Task;
use dioxus::document::Document;
use dioxus::prelude::*;
use tracing::{debug, warn};

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Document listener reporting presses outside the root tagged with
/// `data-dropdown-key`. Handlers live in a per-page registry so detaching
/// removes exactly the one this instance added.
const ATTACH_SCRIPT: &str = r#"
(function() {
    const key = "__KEY__";
    const registry = window.__dealDropdownListeners || (window.__dealDropdownListeners = {});
    if (registry[key]) {
        document.removeEventListener("mousedown", registry[key]);
    }
    const handler = function(event) {
        const root = document.querySelector('[data-dropdown-key="' + key + '"]');
        if (root && !root.contains(event.target)) {
            dioxus.send(true);
        }
    };
    registry[key] = handler;
    document.addEventListener("mousedown", handler);
})();
"#;

const DETACH_SCRIPT: &str = r#"
(function() {
    const registry = window.__dealDropdownListeners;
    if (registry && registry["__KEY__"]) {
        document.removeEventListener("mousedown", registry["__KEY__"]);
        delete registry["__KEY__"];
    }
})();
"#;

/// Unique key tying a mounted dropdown to its document listener.
pub fn next_instance_key() -> String {
    format!("deal-dropdown-{}", NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
}

pub fn attach_script(key: &str) -> String {
    ATTACH_SCRIPT.replace("__KEY__", key)
}

pub fn detach_script(key: &str) -> String {
    DETACH_SCRIPT.replace("__KEY__", key)
}

/// Outside-press listener held while the menu is open.
///
/// Attaching installs the document listener and a task forwarding its
/// reports to `on_outside`. Dropping the guard cancels the task and removes
/// the listener, so every path that releases the guard detaches it.
pub struct OutsideClickListener {
    key: String,
    task: Task,
    document: Rc<dyn Document>,
}

impl OutsideClickListener {
    /// Must be called inside a component scope.
    pub fn attach(key: &str, mut on_outside: impl FnMut() + 'static) -> Self {
        let document = document::document();
        let mut eval = document.eval(attach_script(key));
        let task_key = key.to_string();
        let task = spawn(async move {
            loop {
                match eval.recv::<bool>().await {
                    Ok(_) => on_outside(),
                    Err(err) => {
                        warn!(key = %task_key, error = ?err, "outside click channel closed");
                        break;
                    }
                }
            }
        });
        debug!(key, "outside click listener attached");
        Self {
            key: key.to_string(),
            task,
            document,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        self.task.cancel();
        self.document.eval(detach_script(&self.key));
        debug!(key = %self.key, "outside click listener detached");
    }
}

/// Holds the listener guard for as long as the menu stays open.
#[derive(Debug)]
pub struct ListenerSlot<G> {
    guard: Option<G>,
}

impl<G> Default for ListenerSlot<G> {
    fn default() -> Self {
        Self { guard: None }
    }
}

impl<G> ListenerSlot<G> {
    /// Attach on entering the open state and drop the guard on leaving it.
    /// Repeated calls with the same state do nothing.
    pub fn sync(&mut self, open: bool, attach: impl FnOnce() -> G) {
        match (open, self.guard.is_some()) {
            (true, false) => self.guard = Some(attach()),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    /// Drop the guard regardless of state, as on unmount.
    pub fn release(&mut self) {
        self.guard = None;
    }

    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }
}
