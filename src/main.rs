use courier_tracker::components::App;
use courier_tracker::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Courier Tracker starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
