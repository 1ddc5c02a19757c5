use web_sys::{Event, HtmlElement};

use crate::alerts::show_alert;
use crate::constants::{ALERT_DANGER, CLASS_IS_INVALID, EVENT_SUBMIT, PAYMENT_FORM_ID, SELECTOR_FORM, SELECTOR_REQUIRED};
use crate::drafts::allow_navigation;
use crate::utils::{add_listener, get_element_from_target, input_value, is_blank, query_selector_all, select_all_in};

// The payment form carries its own conditional rules, see forms::payment.
pub fn init_form_validation() {
    for form in query_selector_all(SELECTOR_FORM) {
        if form.id() == PAYMENT_FORM_ID {
            continue;
        }
        add_listener(&form, EVENT_SUBMIT, handle_submit);
    }
}

fn handle_submit(event: Event) {
    let Some(form) = get_element_from_target(event.current_target()) else { return };
    if validate_required(&form) {
        allow_navigation();
    } else {
        event.prevent_default();
        show_alert("Please fill in all required fields.", ALERT_DANGER);
    }
}

pub fn validate_required(form: &HtmlElement) -> bool {
    let mut valid = true;
    for field in select_all_in(form, SELECTOR_REQUIRED) {
        if is_blank(&input_value(&field)) {
            field.class_list().add_1(CLASS_IS_INVALID).ok();
            valid = false;
        } else {
            field.class_list().remove_1(CLASS_IS_INVALID).ok();
        }
    }
    valid
}
