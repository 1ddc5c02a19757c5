use web_sys::{Event, HtmlElement};

use crate::alerts::show_alert;
use crate::constants::{ALERT_DANGER, CLASS_IS_INVALID, EVENT_SUBMIT, FIELD_PAYMENT_TYPE, SELECTOR_PAYMENT_FORM};
use crate::drafts::allow_navigation;
use crate::utils::{add_listener, get_element_from_target, get_html_element, input_value, is_blank, query_selector, select_all_in};

static CARD_FIELDS: [&str; 4] = ["card_number", "expiry_month", "expiry_year", "cvv"];

pub fn card_fields_required(payment_type: &str) -> bool {
    matches!(payment_type, "credit_card" | "debit_card")
}

pub fn init_payment_validation() {
    if let Some(form) = get_html_element(query_selector(SELECTOR_PAYMENT_FORM)) {
        add_listener(&form, EVENT_SUBMIT, handle_submit);
    }
}

fn handle_submit(event: Event) {
    let Some(form) = get_element_from_target(event.current_target()) else { return };
    let payment_type = field_value(&form, FIELD_PAYMENT_TYPE);

    if is_blank(&payment_type) {
        mark(&form, FIELD_PAYMENT_TYPE, true);
        event.prevent_default();
        show_alert("Please select a payment type.", ALERT_DANGER);
        return;
    }
    mark(&form, FIELD_PAYMENT_TYPE, false);

    if !card_fields_required(&payment_type) {
        allow_navigation();
        return;
    }

    let mut valid = true;
    for name in CARD_FIELDS {
        let blank = is_blank(&field_value(&form, name));
        mark(&form, name, blank);
        if blank {
            valid = false;
        }
    }

    if valid {
        allow_navigation();
    } else {
        event.prevent_default();
        show_alert("Please fill in all card details.", ALERT_DANGER);
    }
}

fn field_value(form: &HtmlElement, name: &str) -> String {
    select_all_in(form, &format!("[name='{name}']"))
        .first()
        .map(input_value)
        .unwrap_or_default()
}

fn mark(form: &HtmlElement, name: &str, invalid: bool) {
    for field in select_all_in(form, &format!("[name='{name}']")) {
        if invalid {
            field.class_list().add_1(CLASS_IS_INVALID).ok();
        } else {
            field.class_list().remove_1(CLASS_IS_INVALID).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_fields_required() {
        assert!(card_fields_required("credit_card"));
        assert!(card_fields_required("debit_card"));
        assert!(!card_fields_required("bank_transfer"));
        assert!(!card_fields_required("paypal"));
        assert!(!card_fields_required(""));
    }
}
