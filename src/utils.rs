use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue, UnwrapThrowExt};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Location, Node, Storage, Window};

use crate::constants::FADE_OUT_MS;

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w| w.location())
}

pub fn location_pathname() -> String {
    get_location().and_then(|l| l.pathname().ok()).unwrap_or_default()
}

pub fn location_reload() {
    if let Some(w) = get_window() {
        w.location().reload().ok();
    }
}

pub fn local_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

pub fn create_element(node_name: &str) -> Option<Element> {
    get_document().and_then(|d| d.create_element(node_name).ok())
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn query_selector_all(selectors: &str) -> Vec<HtmlElement> {
    let mut list: Vec<HtmlElement> = Vec::new();
    if let Some(d) = get_document() {
        let node_list = d.query_selector_all(selectors).unwrap_throw();
        for ind in 0..node_list.length() {
            if let Some(html_elem) = get_html_element(get_element_from_node(node_list.get(ind))) {
                list.push(html_elem);
            }
        }
    }
    list
}

pub fn select_all_in(root: &Element, selectors: &str) -> Vec<HtmlElement> {
    let mut list: Vec<HtmlElement> = Vec::new();
    if let Ok(node_list) = root.query_selector_all(selectors) {
        for ind in 0..node_list.length() {
            if let Some(html_elem) = get_html_element(get_element_from_node(node_list.get(ind))) {
                list.push(html_elem);
            }
        }
    }
    list
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.map(|el| el.dyn_into::<HtmlElement>().ok()).and_then(|el| el)
}

pub fn get_element_from_node(el: Option<Node>) -> Option<Element> {
    el.map(|el| el.dyn_into::<Element>().ok()).and_then(|el| el)
}

pub fn get_element_from_target(target: Option<EventTarget>) -> Option<HtmlElement> {
    target
        .map(|target| JsValue::from(target).dyn_ref::<HtmlElement>().cloned())
        .and_then(|t| t)
}

pub fn from_dataset(target: Option<EventTarget>, key: &str) -> String {
    get_element_from_target(target)
        .and_then(|element| element.dataset().get(key))
        .unwrap_or_default()
}

pub fn input_value(element: &HtmlElement) -> String {
    let element: &JsValue = element.as_ref();
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn set_input_value(element: &HtmlElement, value: &str) {
    let element: &JsValue = element.as_ref();
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.set_value(value);
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.set_value(value);
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.set_value(value);
    }
}

pub fn get_value_by_query(selectors: &str) -> String {
    get_html_element(query_selector(selectors))
        .map(|element| input_value(&element))
        .unwrap_or_default()
}

pub fn get_input_value(name: &str) -> String {
    get_value_by_query(&format!("[name='{name}']"))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn add_listener<F>(target: &EventTarget, event_name: &str, handler: F)
    where
        F: FnMut(Event) + 'static
{
    let listener_callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event_name, listener_callback.as_ref().unchecked_ref()) {
        log::error!("add_listener {event_name}: {:?}", err);
    }
    listener_callback.forget();
}

pub fn fade_out(elem: &HtmlElement) {
    let style = elem.style();
    style.set_property("transition", "opacity 0.6s").ok();
    style.set_property("opacity", "0").ok();
    let elem = elem.clone();
    let timer = Timeout::new(FADE_OUT_MS, move || {
        elem.style().set_property("display", "none").ok();
    });
    timer.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("hello"));
        assert!(!is_blank("  x  "));
    }
}
