use std::cell::RefCell;

use gloo_timers::callback::Timeout;

use crate::constants::{ALERT_DISMISS_MS, PROP_ROLE, PROP_TYPE, SELECTOR_ALERT, SELECTOR_CONTAINER, TAG_BUTTON, TAG_DIV};
use crate::utils::{create_element, fade_out, query_selector, query_selector_all};

thread_local! {
    static DISMISS_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
}

pub fn init_alerts() {
    arm_dismiss();
}

// One shared timer covers every visible alert. Showing a new alert re-arms it.
fn arm_dismiss() {
    let timer = Timeout::new(ALERT_DISMISS_MS, || {
        for elem in query_selector_all(SELECTOR_ALERT) {
            fade_out(&elem);
        }
    });
    DISMISS_TIMER.with(|slot| {
        if let Some(prev) = slot.borrow_mut().replace(timer) {
            prev.cancel();
        }
    });
}

pub fn show_alert(message: &str, kind: &str) {
    let Some(container) = query_selector(SELECTOR_CONTAINER) else {
        log::error!("show_alert: no container for '{message}'");
        return;
    };
    let Some(alert) = create_element(TAG_DIV) else { return };
    alert.set_class_name(&format!("alert alert-{kind} alert-dismissible fade show"));
    alert.set_attribute(PROP_ROLE, "alert").ok();
    alert.set_text_content(Some(message));

    if let Some(button) = create_element(TAG_BUTTON) {
        button.set_class_name("btn-close");
        button.set_attribute(PROP_TYPE, "button").ok();
        button.set_attribute("data-bs-dismiss", "alert").ok();
        alert.append_child(&button).ok();
    }

    container.insert_before(&alert, container.first_child().as_ref()).ok();
    arm_dismiss();
}
