//! Logging setup plus conditional log macros gated on a module-level
//! `ENABLE_LOGS` flag.
//!
//! Chatty modules (the preloader in particular) declare
//! `const ENABLE_LOGS: bool = ...;` and use the macros so their output can
//! be muted per module without touching the global filter:
//!
//! ```rust
//! const ENABLE_LOGS: bool = true;
//!
//! use miniplay_core::log_info;
//!
//! log_info!("asset batch settled");
//! ```

/// Initializes `env_logger` for embedding binaries and integration tests.
/// Honors `RUST_LOG`; defaults to `info` for this crate when unset.
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("miniplay_core=info"),
    )
    .try_init();
}

/// Info-level logging, gated on the calling module's `ENABLE_LOGS` const.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, gated on the calling module's `ENABLE_LOGS` const.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level logging, gated on the calling module's `ENABLE_LOGS` const.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
