//! Optional startup diagnostic, gated by the `diag` cargo feature.

/// Exact line printed to stdout when the `diag` feature is enabled.
pub const DIAG_LINE: &str = "fmt is enabled via Conan: ok";

/// The diagnostic line this build should print at startup, if any.
///
/// Returns `Some(DIAG_LINE)` when built with the `diag` feature and
/// `None` otherwise. The caller decides where it goes; the entry point
/// prints it to stdout before any window appears.
pub fn banner() -> Option<&'static str> {
    if cfg!(feature = "diag") {
        Some(DIAG_LINE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "diag")]
    #[test]
    fn banner_is_the_exact_line_when_enabled() {
        assert_eq!(banner(), Some("fmt is enabled via Conan: ok"));
    }

    #[cfg(not(feature = "diag"))]
    #[test]
    fn banner_is_absent_by_default() {
        assert_eq!(banner(), None);
    }
}
