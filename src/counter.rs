use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTextAreaElement};

use crate::constants::{CLASS_CHAR_COUNTER, CLASS_TEXT_WARNING, EVENT_INPUT, SELECTOR_TEXTAREA_LIMITED, TAG_SMALL};
use crate::utils::{add_listener, create_element, query_selector_all};

pub fn counter_text(len: usize, max: usize) -> String {
    format!("{len}/{max}")
}

// Warn once more than 90% of the limit is used.
pub fn near_limit(len: usize, max: usize) -> bool {
    len as f64 > max as f64 * 0.9
}

pub fn init_char_counters() {
    for elem in query_selector_all(SELECTOR_TEXTAREA_LIMITED) {
        let Ok(area) = elem.dyn_into::<HtmlTextAreaElement>() else { continue };
        let field = area.clone();
        add_listener(&area, EVENT_INPUT, move |_| update_counter(&field));
    }
}

fn update_counter(area: &HtmlTextAreaElement) {
    let max = area.max_length();
    if max <= 0 {
        return;
    }
    let len = area.value().chars().count();
    let Some(counter) = find_or_create_counter(area) else { return };

    counter.set_text_content(Some(&counter_text(len, max as usize)));
    if near_limit(len, max as usize) {
        counter.class_list().add_1(CLASS_TEXT_WARNING).ok();
    } else {
        counter.class_list().remove_1(CLASS_TEXT_WARNING).ok();
    }
}

// The counter element lives next to the textarea and is created on first use.
fn find_or_create_counter(area: &HtmlTextAreaElement) -> Option<Element> {
    let parent = area.parent_element()?;
    if let Ok(Some(existing)) = parent.query_selector(&format!(".{CLASS_CHAR_COUNTER}")) {
        return Some(existing);
    }
    let counter = create_element(TAG_SMALL)?;
    counter.set_class_name("char-counter text-muted");
    area.after_with_node_1(&counter).ok()?;
    Some(counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_text() {
        assert_eq!(counter_text(95, 100), "95/100");
        assert_eq!(counter_text(0, 500), "0/500");
    }

    #[test]
    fn test_near_limit() {
        assert!(near_limit(95, 100));
        assert!(near_limit(91, 100));
        assert!(!near_limit(90, 100));
        assert!(!near_limit(0, 100));
        assert!(near_limit(10, 10));
    }
}
