use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;

use crate::constants::{SELECTOR_POPOVER, SELECTOR_TOOLTIP};
use crate::utils::query_selector_all;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &Element) -> Tooltip;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Popover;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Popover")]
    fn new(element: &Element) -> Popover;
}

pub fn init_widgets() {
    for elem in query_selector_all(SELECTOR_TOOLTIP) {
        let _ = Tooltip::new(&elem);
    }
    for elem in query_selector_all(SELECTOR_POPOVER) {
        let _ = Popover::new(&elem);
    }
}
