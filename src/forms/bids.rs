use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::constants::{CLASS_IS_INVALID, EVENT_INPUT, SELECTOR_AMOUNT_FEEDBACK, SELECTOR_BID_AMOUNT};
use crate::utils::{add_listener, get_html_element, query_selector};

pub enum BidCheck {
    Ok,
    TooLow(f64),
    TooHigh(f64),
    NotANumber,
}

/// An empty field gives no feedback; everything else must parse and land
/// inside the project bounds.
pub fn check_bid(raw: &str, min: f64, max: f64) -> BidCheck {
    let raw = raw.trim();
    if raw.is_empty() {
        return BidCheck::Ok;
    }
    match raw.parse::<f64>() {
        Err(_) => BidCheck::NotANumber,
        Ok(amount) if amount < min => BidCheck::TooLow(min),
        Ok(amount) if amount > max => BidCheck::TooHigh(max),
        Ok(_) => BidCheck::Ok,
    }
}

pub fn feedback(check: &BidCheck) -> String {
    match check {
        BidCheck::Ok => String::new(),
        BidCheck::TooLow(min) => format!("Amount must be at least ${}", format_bound(*min)),
        BidCheck::TooHigh(max) => format!("Amount must not exceed ${}", format_bound(*max)),
        BidCheck::NotANumber => "Enter a valid amount.".to_string(),
    }
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub fn init_bid_validation() {
    let Some(input) = query_selector(SELECTOR_BID_AMOUNT)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok()) else { return };

    // Bounds come off the element once at init; absent attributes leave the
    // amount unbounded on that side.
    let min = input.dataset().get("projectMin")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(f64::NEG_INFINITY);
    let max = input.dataset().get("projectMax")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(f64::INFINITY);
    let feedback_elem = get_html_element(query_selector(SELECTOR_AMOUNT_FEEDBACK));

    let field = input.clone();
    add_listener(&input, EVENT_INPUT, move |_| {
        let check = check_bid(&field.value(), min, max);
        match check {
            BidCheck::Ok => {
                field.class_list().remove_1(CLASS_IS_INVALID).ok();
            }
            _ => {
                field.class_list().add_1(CLASS_IS_INVALID).ok();
            }
        }
        if let Some(feedback_elem) = &feedback_elem {
            feedback_elem.set_text_content(Some(&feedback(&check)));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_bounds() {
        assert!(matches!(check_bid("5", 10.0, 500.0), BidCheck::TooLow(_)));
        assert!(matches!(check_bid("1000", 10.0, 500.0), BidCheck::TooHigh(_)));
        assert!(matches!(check_bid("50", 10.0, 500.0), BidCheck::Ok));
        assert!(matches!(check_bid("10", 10.0, 500.0), BidCheck::Ok));
        assert!(matches!(check_bid("500", 10.0, 500.0), BidCheck::Ok));
    }

    #[test]
    fn test_bid_messages() {
        assert_eq!(feedback(&check_bid("5", 10.0, 500.0)), "Amount must be at least $10");
        assert_eq!(feedback(&check_bid("1000", 10.0, 500.0)), "Amount must not exceed $500");
        assert_eq!(feedback(&check_bid("50", 10.0, 500.0)), "");
        assert_eq!(feedback(&check_bid("5", 10.5, 500.0)), "Amount must be at least $10.5");
    }

    #[test]
    fn test_bid_not_numeric() {
        assert!(matches!(check_bid("abc", 10.0, 500.0), BidCheck::NotANumber));
        assert_eq!(feedback(&check_bid("abc", 10.0, 500.0)), "Enter a valid amount.");
        // an empty field is not flagged while the user is still typing
        assert!(matches!(check_bid("", 10.0, 500.0), BidCheck::Ok));
        assert!(matches!(check_bid("   ", 10.0, 500.0), BidCheck::Ok));
    }

    #[test]
    fn test_unbounded_sides() {
        assert!(matches!(check_bid("1", f64::NEG_INFINITY, f64::INFINITY), BidCheck::Ok));
        assert!(matches!(check_bid("999999", 10.0, f64::INFINITY), BidCheck::Ok));
    }
}
