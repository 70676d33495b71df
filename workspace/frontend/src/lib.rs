use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod download;
pub mod hooks;
pub mod settings;

use crate::common::toast::ToastProvider;
use crate::components::dashboard::Dashboard;

#[function_component(Navbar)]
fn navbar() -> Html {
    html! {
        <nav class="navbar sticky top-0 z-20 bg-primary text-primary-content shadow-md">
            <div class="flex-1 justify-center">
                <i class="fas fa-chart-line text-2xl mr-3"></i>
                <h1 class="text-2xl font-extrabold tracking-tight">{"Stock Price Predictor"}</h1>
            </div>
        </nav>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <div class="flex flex-col min-h-screen bg-base-200">
                <Navbar />
                <Dashboard />
            </div>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== stockcast dashboard starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base: {}", settings.api_base);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
