//! Browser console sink for the `log` facade.
//!
//! Native hosts install their own logger; in the browser [`init_logging`]
//! routes records to `console.*`.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn console_log(s: &str);
        #[wasm_bindgen(js_namespace = console, js_name = warn)]
        fn console_warn(s: &str);
        #[wasm_bindgen(js_namespace = console, js_name = error)]
        fn console_error(s: &str);
    }

    pub struct ConsoleLogger;

    pub static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            match record.level() {
                Level::Error => console_error(&line),
                Level::Warn => console_warn(&line),
                _ => console_log(&line),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the console logger and set the level. Later calls only
/// adjust the level.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: LevelFilter) {
    // Fails only if a logger is already set, which is fine
    let _ = log::set_logger(&console::LOGGER);
    log::set_max_level(level);
}

/// Set the level only; the host owns the logger.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: LevelFilter) {
    log::set_max_level(level);
}

/// Parse a level name (`"off"`, `"error"`, ... `"trace"`), case-insensitive.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}
