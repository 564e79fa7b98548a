#![deny(missing_docs)]
//! Shared logging utilities for the notation workspace.
//!
//! This crate provides the `notation_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

/// Log target used for per-call records emitted by the service client.
pub const CALL_TARGET: &str = "notation::call";

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! notation_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! notation_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! notation_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs a debug-level record under [`CALL_TARGET`].
#[macro_export]
macro_rules! notation_call {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::CALL_TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
