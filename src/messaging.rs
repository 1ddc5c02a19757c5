use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use crate::alerts::show_alert;
use crate::connect_fetch::{connect_form_send, PostOutcome};
use crate::constants::{ALERT_DANGER, EVENT_SUBMIT, FIELD_CONTENT, SELECTOR_MESSAGE_CONTENT, SELECTOR_MESSAGE_FORM};
use crate::utils::{add_listener, get_value_by_query, location_reload, query_selector};

static SEND_FAILED: &'static str = "Error sending message. Please try again.";

pub fn should_send(content: &str) -> bool {
    !content.trim().is_empty()
}

pub fn init_message_form() {
    let Some(form) = query_message_form() else { return };
    let target = form.clone();
    add_listener(&form, EVENT_SUBMIT, move |event| {
        event.prevent_default();
        let content = get_value_by_query(SELECTOR_MESSAGE_CONTENT);
        if !should_send(&content) {
            return;
        }
        connect_form_send(
            &target.action(),
            vec![(FIELD_CONTENT, content.trim().to_string())],
            message_sent,
        );
        target.reset();
    });
}

fn query_message_form() -> Option<HtmlFormElement> {
    query_selector(SELECTOR_MESSAGE_FORM)
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
}

// A reload is the simplest way to pull the fresh message list from the server.
fn message_sent(outcome: PostOutcome) {
    match outcome {
        PostOutcome::Accepted { .. } => location_reload(),
        PostOutcome::Rejected { message } => {
            show_alert(message.as_deref().unwrap_or(SEND_FAILED), ALERT_DANGER);
        }
        PostOutcome::TransportError => show_alert(SEND_FAILED, ALERT_DANGER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_send() {
        assert!(!should_send(""));
        assert!(!should_send("   \n"));
        assert!(should_send("hello"));
        assert!(should_send("  padded  "));
    }
}
