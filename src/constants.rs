pub static PROP_ROLE: &'static str = "role";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_NAME: &'static str = "name";
pub static PROP_SRC: &'static str = "src";
pub static PROP_STYLE: &'static str = "style";

pub static TAG_DIV: &'static str = "div";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_SMALL: &'static str = "small";
pub static TAG_IMG: &'static str = "img";

pub static EVENT_CLICK: &'static str = "click";
pub static EVENT_INPUT: &'static str = "input";
pub static EVENT_CHANGE: &'static str = "change";
pub static EVENT_SUBMIT: &'static str = "submit";
pub static EVENT_SCROLL: &'static str = "scroll";

pub static CLASS_IS_INVALID: &'static str = "is-invalid";
pub static CLASS_TEXT_WARNING: &'static str = "text-warning";
pub static CLASS_CHAR_COUNTER: &'static str = "char-counter";
pub static CLASS_FILE_PREVIEW: &'static str = "file-preview";
pub static CLASS_ANIMATED: &'static str = "animated";

pub static ALERT_DANGER: &'static str = "danger";

pub static SELECTOR_TOOLTIP: &'static str = "[data-bs-toggle='tooltip']";
pub static SELECTOR_POPOVER: &'static str = "[data-bs-toggle='popover']";
pub static SELECTOR_ALERT: &'static str = ".alert";
pub static SELECTOR_CONTAINER: &'static str = ".container";
pub static SELECTOR_ANCHOR: &'static str = "a[href*='#']";
pub static SELECTOR_FORM: &'static str = "form";
pub static SELECTOR_REQUIRED: &'static str = "[required]";
pub static SELECTOR_SEARCH: &'static str = "#search";
pub static SELECTOR_MESSAGE_FORM: &'static str = "#send-message-form";
pub static SELECTOR_MESSAGE_CONTENT: &'static str = "#message-content";
pub static SELECTOR_MARK_READ: &'static str = ".mark-notification-read";
pub static SELECTOR_PAYMENT_FORM: &'static str = "#payment-method-form";
pub static SELECTOR_PROJECT_FILTERS: &'static str = "#project-filters";
pub static SELECTOR_BID_AMOUNT: &'static str = "#bid-amount";
pub static SELECTOR_AMOUNT_FEEDBACK: &'static str = "#amount-feedback";
pub static SELECTOR_FILE_INPUT: &'static str = "input[type='file']";
pub static SELECTOR_TEXTAREA_LIMITED: &'static str = "textarea[maxlength]";
pub static SELECTOR_TEXT_FIELDS: &'static str = "textarea, input[type='text']";

pub static PAYMENT_FORM_ID: &'static str = "payment-method-form";
pub static FIELD_PAYMENT_TYPE: &'static str = "payment_type";
pub static FIELD_CONTENT: &'static str = "content";
pub static FIELD_CSRF: &'static str = "csrfmiddlewaretoken";

pub static DRAFT_KEY_PREFIX: &'static str = "freelancerhub_draft_";

pub static ALERT_DISMISS_MS: u32 = 5000;
pub static FADE_OUT_MS: u32 = 600;
pub static DRAFT_DEBOUNCE_MS: u32 = 2000;
pub static ANCHOR_SCROLL_OFFSET: f64 = 100.0;
