//! Error handling foundation for switchboard.
//!
//! This module provides only the `Result` type alias using rootcause.
//! Each crate defines its own domain-specific error types in its own
//! error module and reports them through `rootcause::Report`.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// The context type `C` is the domain error of the layer producing the report.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "broken")
        }
    }

    impl std::error::Error for Broken {}

    fn fails() -> Result<u8, Broken> {
        Err(Broken)?;
        Ok(0)
    }

    #[test]
    fn result_type_works() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }

    #[test]
    fn domain_error_converts_into_report() {
        let err = fails().expect_err("should fail");
        assert_eq!(err.current_context().to_string(), "broken");
    }
}
