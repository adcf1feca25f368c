use leptos::prelude::*;

use pagesnap::app::App;
use pagesnap::util::pwa;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    pwa::register_service_worker();
    mount_to_body(|| view! { <App/> });
}
