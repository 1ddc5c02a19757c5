use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FileReader, HtmlInputElement, ProgressEvent};

use crate::constants::{CLASS_FILE_PREVIEW, EVENT_CHANGE, PROP_SRC, PROP_STYLE, SELECTOR_FILE_INPUT, TAG_IMG};
use crate::utils::{add_listener, create_element, query_selector_all};

static THUMBNAIL_STYLE: &'static str = "max-width: 100px; max-height: 100px;";

pub fn init_file_previews() {
    for elem in query_selector_all(SELECTOR_FILE_INPUT) {
        let Ok(input) = elem.dyn_into::<HtmlInputElement>() else { continue };
        let field = input.clone();
        add_listener(&input, EVENT_CHANGE, move |_| handle_file_change(&field));
    }
}

fn handle_file_change(input: &HtmlInputElement) {
    let Some(file) = input.files().and_then(|list| list.get(0)) else { return };
    // Reads resolve out of order when the user re-picks quickly; only the
    // read matching the latest sequence number may paint the preview.
    let seq = next_preview_seq(input);

    let Ok(reader) = FileReader::new() else { return };
    let loaded = reader.clone();
    let target = input.clone();
    let onload_callback = Closure::<dyn FnMut(_)>::new(move |_e: ProgressEvent| {
        if preview_seq(&target) != seq {
            return;
        }
        if let Some(url) = loaded.result().ok().and_then(|v| v.as_string()) {
            render_preview(&target, &url);
        }
    });
    reader.set_onload(Some(onload_callback.as_ref().unchecked_ref()));
    onload_callback.forget();

    if let Err(err) = reader.read_as_data_url(&file) {
        log::error!("read_as_data_url: {:?}", err);
    }
}

fn preview_seq(input: &HtmlInputElement) -> u32 {
    input.dataset().get("previewSeq").and_then(|v| v.parse().ok()).unwrap_or(0)
}

fn next_preview_seq(input: &HtmlInputElement) -> u32 {
    let seq = preview_seq(input) + 1;
    input.dataset().set("previewSeq", &seq.to_string()).ok();
    seq
}

fn render_preview(input: &HtmlInputElement, url: &str) {
    let Some(parent) = input.parent_element() else { return };
    let Ok(Some(preview)) = parent.query_selector(&format!(".{CLASS_FILE_PREVIEW}")) else { return };
    let Some(img) = create_element(TAG_IMG) else { return };
    img.set_class_name("img-thumbnail");
    img.set_attribute(PROP_SRC, url).ok();
    img.set_attribute(PROP_STYLE, THUMBNAIL_STYLE).ok();
    preview.set_inner_html("");
    preview.append_child(&img).ok();
}
