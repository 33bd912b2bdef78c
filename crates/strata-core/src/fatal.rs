//! Fatal-error reporting for programming defects.
//!
//! Recoverable failures travel as values. A fatal error means the caller
//! broke an invariant (indexing past the end of a string, looking up an
//! error code that does not exist) and the process must not continue.
//!
//! The reporter logs the message at `error` level and panics. Release builds
//! of the workspace use `panic = "abort"`, so the panic terminates the
//! process. The dev and test profiles unwind: there a fatal error can be
//! contained by `catch_unwind` or a thread boundary, which is what lets
//! `#[should_panic]` tests in downstream crates observe it. Code that must
//! never outlive a fatal error has to be built with `panic = "abort"`.

use std::fmt;

/// Report a fatal error and terminate.
///
/// Prefer the [`fatal!`](crate::fatal!) macro, which builds the
/// [`fmt::Arguments`] for you.
#[cold]
#[track_caller]
pub fn report(args: fmt::Arguments<'_>) -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(
        file = location.file(),
        line = location.line(),
        reason = %args,
        "fatal error"
    );
    panic!("{args}")
}

/// Report a fatal error with `format!`-style arguments and terminate.
///
/// ```should_panic
/// strata_core::fatal!("index {} out of bounds", 7);
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::fatal::report(::std::format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "bounds violated at 3")]
    fn macro_panics_with_formatted_message() {
        crate::fatal!("bounds violated at {}", 3);
    }

    #[test]
    fn payload_carries_the_message() {
        let payload = std::panic::catch_unwind(|| crate::fatal!("code {} unknown", 42))
            .unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("code 42 unknown"));
    }

    #[test]
    fn report_diverges() {
        // The type checker accepts `report` in any expression position.
        let result = std::panic::catch_unwind(|| -> u32 { super::report(format_args!("boom")) });
        assert!(result.is_err());
    }
}
