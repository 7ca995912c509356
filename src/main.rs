//! Browser entry point, built with `trunk serve --features csr`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }

    log::info!("mounting {}", launchlift::config::BRAND.domain);
    leptos::mount::mount_to_body(launchlift::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    println!("launchlift is a browser app; build it with `trunk serve --features csr`.");
}
