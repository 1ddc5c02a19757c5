use wasm_bindgen::JsCast;
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

use crate::constants::{ANCHOR_SCROLL_OFFSET, CLASS_ANIMATED, EVENT_CLICK, EVENT_SCROLL, SELECTOR_ANCHOR};
use crate::utils::{add_listener, get_element_from_target, query_selector, query_selector_all};

static SELECTOR_FADE_IN: &'static str = ".fade-in";

pub fn init_smooth_scroll() {
    for elem in query_selector_all(SELECTOR_ANCHOR) {
        add_listener(&elem, EVENT_CLICK, handle_anchor_click);
    }
}

fn handle_anchor_click(event: Event) {
    let Some(anchor) = get_element_from_target(event.current_target()) else { return };
    let hash = anchor
        .dyn_ref::<web_sys::HtmlAnchorElement>()
        .map(|a| a.hash())
        .unwrap_or_default();
    if hash.len() < 2 {
        return;
    }
    // Only intercept when the fragment exists on this page; links into
    // other pages keep their default navigation.
    if let Some(target) = query_selector(&hash) {
        event.prevent_default();
        scroll_to_element(&target);
    }
}

fn scroll_to_element(target: &Element) {
    let Some(window) = web_sys::window() else { return };
    let page_top = window.page_y_offset().unwrap_or_default();
    let top = target.get_bounding_client_rect().top() + page_top - ANCHOR_SCROLL_OFFSET;

    let mut opts = ScrollToOptions::new();
    opts.top(top);
    opts.behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

pub fn init_scroll_animation() {
    animate_visible();
    if let Some(window) = web_sys::window() {
        add_listener(&window, EVENT_SCROLL, |_| animate_visible());
    }
}

// Marks every fade-in element currently crossing the viewport; the class is
// only ever added, elements scrolled past stay animated.
fn animate_visible() {
    let Some(window) = web_sys::window() else { return };
    let viewport_top = window.page_y_offset().unwrap_or_default();
    let viewport_height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();

    for elem in query_selector_all(SELECTOR_FADE_IN) {
        let rect = elem.get_bounding_client_rect();
        let elem_top = rect.top() + viewport_top;
        let elem_bottom = elem_top + rect.height();
        if in_viewport(elem_top, elem_bottom, viewport_top, viewport_top + viewport_height) {
            elem.class_list().add_1(CLASS_ANIMATED).ok();
        }
    }
}

fn in_viewport(elem_top: f64, elem_bottom: f64, viewport_top: f64, viewport_bottom: f64) -> bool {
    elem_bottom > viewport_top && elem_top < viewport_bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_viewport() {
        // fully inside
        assert!(in_viewport(150.0, 250.0, 100.0, 800.0));
        // straddling the top edge
        assert!(in_viewport(50.0, 150.0, 100.0, 800.0));
        // straddling the bottom edge
        assert!(in_viewport(750.0, 900.0, 100.0, 800.0));
        // above the viewport
        assert!(!in_viewport(0.0, 90.0, 100.0, 800.0));
        // below the viewport
        assert!(!in_viewport(900.0, 1000.0, 100.0, 800.0));
        // touching edges does not count as visible
        assert!(!in_viewport(0.0, 100.0, 100.0, 800.0));
        assert!(!in_viewport(800.0, 900.0, 100.0, 800.0));
    }
}
