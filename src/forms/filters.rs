use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::constants::{EVENT_CHANGE, EVENT_INPUT, SELECTOR_PROJECT_FILTERS, SELECTOR_SEARCH};
use crate::drafts::allow_navigation;
use crate::utils::{add_listener, query_selector};

// Change events bubble up from the selects and inputs inside the filter form.
pub fn init_project_filters() {
    let Some(form) = query_selector(SELECTOR_PROJECT_FILTERS)
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok()) else { return };
    let target = form.clone();
    add_listener(&form, EVENT_CHANGE, move |_| {
        // the native submit() fires no submit event, so the unload guard
        // must stand down here
        allow_navigation();
        target.submit().ok();
    });
}

pub fn search_ready(query: &str) -> bool {
    query.chars().count() > 2
}

// Search stub: queries are only logged until a real backend search exists.
pub fn init_search_log() {
    let Some(input) = query_selector(SELECTOR_SEARCH)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) else { return };
    let field = input.clone();
    add_listener(&input, EVENT_INPUT, move |_| {
        let query = field.value();
        if search_ready(&query) {
            log::info!("Searching for: {query}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_ready() {
        assert!(!search_ready(""));
        assert!(!search_ready("ab"));
        assert!(search_ready("abc"));
        assert!(search_ready("design work"));
    }
}
