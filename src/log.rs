//! Unified logging setup for native and browser builds.
//!
//! The library itself only ever talks to the `log` facade; this module wires
//! a backend to it depending on the compile target.

/// Initializes logging for whichever target this build is.
///
/// - **Native:** `env_logger` writing to stderr, defaulting to `Info` and
///   raised to `Debug` when `debug_enabled` is set. An explicit `RUST_LOG`
///   value overrides both.
/// - **WASM:** `console_log` routing the facade to the developer console at
///   the equivalent level.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(not(target_arch = "wasm32"))]
    init_native(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    init_wasm(debug_enabled);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_native(debug_enabled: bool) {
    use log::LevelFilter;

    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // An explicit RUST_LOG wins over the flag-derived default.
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second call is a no-op rather than a panic.
    if builder.try_init().is_ok() {
        log::debug!("native logger ready at {level:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn init_wasm(debug_enabled: bool) {
    let level = if debug_enabled {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    if let Err(e) = console_log::init_with_level(level) {
        // Degrade to a raw console message instead of taking the module down.
        let msg = format!("failed to initialize console logging: {e}");
        web_sys::console::error_1(&msg.into());
    } else {
        log::debug!("console logger ready at {level:?}");
    }
}
