use web_sys::Event;

use crate::alerts::show_alert;
use crate::connect_fetch::{connect_form_send, PostOutcome};
use crate::constants::{ALERT_DANGER, EVENT_CLICK, SELECTOR_MARK_READ};
use crate::utils::{add_listener, fade_out, from_dataset, get_html_element, query_selector, query_selector_all};

pub fn init_notifications() {
    for elem in query_selector_all(SELECTOR_MARK_READ) {
        add_listener(&elem, EVENT_CLICK, handle_mark_read);
    }
}

fn handle_mark_read(event: Event) {
    event.prevent_default();
    let id = from_dataset(event.current_target(), "notificationId");
    if id.is_empty() {
        return;
    }
    connect_form_send(&mark_read_url(&id), vec![], move |outcome| {
        match outcome {
            PostOutcome::Accepted { .. } => {
                let selector = format!("[data-notification-id='{id}']");
                if let Some(elem) = get_html_element(query_selector(&selector)) {
                    fade_out(&elem);
                }
            }
            _ => show_alert("Could not mark the notification as read.", ALERT_DANGER),
        }
    });
}

pub fn mark_read_url(id: &str) -> String {
    format!("/reports/notifications/{id}/mark-read/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_url() {
        assert_eq!(mark_read_url("17"), "/reports/notifications/17/mark-read/");
    }
}
