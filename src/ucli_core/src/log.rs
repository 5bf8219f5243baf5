//! Diagnostic hooks.
//!
//! `cli_debug!` and `cli_warn!` take `format_args!`-style arguments. The
//! backend is picked at compile time: `defmt` if that feature is enabled,
//! otherwise `tracing`, otherwise nothing. The no-op variant still
//! type-checks its arguments inside a dead branch.

#[cfg(feature = "defmt")]
macro_rules! cli_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! cli_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(all(feature = "tracing", not(feature = "defmt")))]
macro_rules! cli_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(all(feature = "tracing", not(feature = "defmt")))]
macro_rules! cli_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(any(feature = "defmt", feature = "tracing")))]
macro_rules! cli_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

#[cfg(not(any(feature = "defmt", feature = "tracing")))]
macro_rules! cli_warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}
