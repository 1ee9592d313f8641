//! Error handling and exit codes.

use benchrun_core::exit_codes;
use benchrun_core::BenchError;

/// Map an error to the process exit code it should produce.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::InvalidPattern { .. } | BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::NoMatches => exit_codes::ERROR_NO_MATCH,
        BenchError::NoSamplesRetained { .. } => exit_codes::ERROR_DEGENERATE,
        BenchError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchrun_core::Selection;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&BenchError::NoMatches), 2);
        assert_eq!(handle_error(&BenchError::Config("bad".into())), 4);
        assert_eq!(
            handle_error(&BenchError::NoSamplesRetained {
                name: "BM".into(),
                submitted: 3
            }),
            5
        );
        assert_eq!(
            handle_error(&BenchError::Io(std::io::Error::other("disk full"))),
            1
        );
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let err = Selection::parse(["(unclosed"]).unwrap_err();
        assert_eq!(handle_error(&err), exit_codes::ERROR_CONFIG);
    }
}
