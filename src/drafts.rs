use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::BeforeUnloadEvent;

use crate::constants::{DRAFT_DEBOUNCE_MS, DRAFT_KEY_PREFIX, EVENT_INPUT, PROP_NAME, SELECTOR_TEXT_FIELDS};
use crate::utils::{add_listener, input_value, is_blank, local_storage, location_pathname, query_selector_all, set_input_value};

/// At most one pending save; every keystroke pushes it out again.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, pending: None }
    }

    pub fn schedule<F>(&mut self, action: F)
        where
            F: FnOnce() + 'static
    {
        self.cancel();
        self.pending = Some(Timeout::new(self.delay_ms, action));
    }

    pub fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }
}

thread_local! {
    static SAVE_TIMER: RefCell<Debouncer> = RefCell::new(Debouncer::new(DRAFT_DEBOUNCE_MS));
    static ALLOW_NAVIGATION: Cell<bool> = Cell::new(false);
}

pub fn draft_key(path: &str) -> String {
    format!("{DRAFT_KEY_PREFIX}{path}")
}

fn current_key() -> String {
    draft_key(&location_pathname())
}

pub fn encode_draft(fields: &BTreeMap<String, String>) -> String {
    serde_json::to_string(fields).unwrap_or_default()
}

pub fn decode_draft(raw: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// The prompt fires when the page holds text the stored draft does not.
pub fn has_unsaved_changes(current: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(stored) => stored != current,
        None => current != "{}",
    }
}

fn collect_fields() -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for elem in query_selector_all(SELECTOR_TEXT_FIELDS) {
        let value = input_value(&elem);
        if is_blank(&value) {
            continue;
        }
        let name = elem.get_attribute(PROP_NAME).unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        fields.insert(name, value);
    }
    fields
}

fn save_draft() {
    let encoded = encode_draft(&collect_fields());
    if let Some(storage) = local_storage() {
        storage.set_item(&current_key(), &encoded).ok();
    }
}

fn restore_draft() {
    let Some(storage) = local_storage() else { return };
    let Ok(Some(raw)) = storage.get_item(&current_key()) else { return };
    match decode_draft(&raw) {
        Ok(fields) => {
            for (name, value) in fields {
                for elem in query_selector_all(&format!("[name='{name}']")) {
                    set_input_value(&elem, &value);
                }
            }
        }
        Err(err) => {
            // stale or corrupt draft, leave the fields alone
            log::error!("restore_draft: {err}");
        }
    }
}

fn schedule_save() {
    SAVE_TIMER.with(|timer| timer.borrow_mut().schedule(save_draft));
}

/// A validated form submit navigates on purpose, so the guard stands down.
pub fn allow_navigation() {
    ALLOW_NAVIGATION.with(|flag| flag.set(true));
}

fn init_unload_guard() {
    let Some(window) = web_sys::window() else { return };
    let listener_callback = Closure::<dyn FnMut(_)>::new(move |event: BeforeUnloadEvent| {
        if ALLOW_NAVIGATION.with(|flag| flag.get()) {
            return;
        }
        let current = encode_draft(&collect_fields());
        let stored = local_storage()
            .and_then(|storage| storage.get_item(&current_key()).ok())
            .and_then(|raw| raw);
        if has_unsaved_changes(&current, stored.as_deref()) {
            event.prevent_default();
            event.set_return_value("");
        }
    });
    window.set_onbeforeunload(Some(listener_callback.as_ref().unchecked_ref()));
    listener_callback.forget();
}

pub fn init_drafts() {
    restore_draft();
    for elem in query_selector_all(SELECTOR_TEXT_FIELDS) {
        add_listener(&elem, EVENT_INPUT, |_| schedule_save());
    }
    init_unload_guard();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_draft_key() {
        assert_eq!(draft_key("/projects/3/bid/"), "freelancerhub_draft_/projects/3/bid/");
        assert_ne!(draft_key("/a/"), draft_key("/b/"));
    }

    #[test]
    fn test_draft_round_trip() {
        let fields = draft(&[("title", "Hello")]);
        let encoded = encode_draft(&fields);
        let decoded = decode_draft(&encoded).unwrap();
        assert_eq!(decoded.get("title").map(String::as_str), Some("Hello"));
    }

    #[test]
    fn test_decode_corrupt_draft() {
        assert!(decode_draft("{not json").is_err());
        assert!(decode_draft("").is_err());
    }

    #[test]
    fn test_has_unsaved_changes() {
        let encoded = encode_draft(&draft(&[("title", "Hello")]));
        assert!(!has_unsaved_changes(&encoded, Some(&encoded)));

        let other = encode_draft(&draft(&[("title", "Changed")]));
        assert!(has_unsaved_changes(&other, Some(&encoded)));

        // nothing stored yet: only prompt when the page holds text
        assert!(has_unsaved_changes(&encoded, None));
        assert!(!has_unsaved_changes("{}", None));
    }

    #[test]
    fn test_encode_is_order_stable() {
        let a = encode_draft(&draft(&[("b", "2"), ("a", "1")]));
        let b = encode_draft(&draft(&[("a", "1"), ("b", "2")]));
        assert_eq!(a, b);
    }
}
