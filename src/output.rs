//! stderr diagnostics alongside a stdout protocol.
//!
//! The launcher host parses stdout as the JSON-RPC envelope and ignores
//! stderr, so stdout carries the protocol and nothing else; every
//! diagnostic goes to stderr. `--quiet` silences status traffic but
//! never warnings.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Applies the `--quiet` flag; called once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prints a diagnostic to stderr unless `--quiet` is set.
///
/// Use this for request tracing and other non-essential diagnostics.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints a warning to stderr; `--quiet` does not suppress warnings.
///
/// Use this for recoverable faults the user should still hear about,
/// such as a failed record append or an unrecognized action method.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_defaults_to_off() {
        assert!(!is_quiet());
    }
}
