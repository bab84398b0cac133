//! Portfolio site entry point (server and WASM client).

use portfolio_site::app::App;

fn main() {
    #[cfg(feature = "server")]
    if let Err(e) = portfolio_site::server::prepare() {
        eprintln!("Startup failed: {e:#}");
        std::process::exit(1);
    }

    dioxus::launch(App);
}
