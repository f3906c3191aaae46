//! Chard portfolio - entry point
//!
//! The navbar reads page geometry through the browser DOM, so the app only
//! runs under the web renderer (`dx serve --platform web`).

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Chard portfolio initialized".into());
    dioxus::launch(chard_portfolio::app::App);
}

// Native builds exist for tests only; there is no native renderer
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::error!("Chard portfolio runs in the browser only; build for wasm32 with `dx serve --platform web`");
    std::process::exit(1);
}
