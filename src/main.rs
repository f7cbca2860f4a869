use eshop_admin::components::App;
use eshop_admin::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 eShop Admin starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
