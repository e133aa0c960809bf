//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG` and falls back to `info`. Calling this more
/// than once is harmless, which lets every test initialise logging.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).is_test(cfg!(test)).try_init();
}
