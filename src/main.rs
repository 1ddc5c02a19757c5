mod alerts;
mod bootstrap;
mod connect_fetch;
mod constants;
mod counter;
mod drafts;
mod forms;
mod messaging;
mod notifications;
mod scroll;
mod uploads;
mod utils;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    bootstrap::init_widgets();
    alerts::init_alerts();
    scroll::init_smooth_scroll();
    scroll::init_scroll_animation();

    forms::validate::init_form_validation();
    forms::payment::init_payment_validation();
    forms::bids::init_bid_validation();
    forms::filters::init_project_filters();
    forms::filters::init_search_log();

    messaging::init_message_form();
    notifications::init_notifications();
    uploads::init_file_previews();
    counter::init_char_counters();
    drafts::init_drafts();
}
