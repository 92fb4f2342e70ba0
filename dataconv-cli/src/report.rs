//! User-facing diagnostics for conversion outcomes.
//!
//! Messages are in Polish and go to stdout; a successful run prints nothing.

use dataconv_babel::{FormatError, Outcome};

pub const UNSUPPORTED_INPUT: &str = "Nieobsługiwany format pliku wejściowego";
pub const UNSUPPORTED_OUTPUT: &str = "Nieobsługiwany format pliku wyjściowego";
pub const LOAD_FAILED: &str = "Nie udało się załadować pliku wejściowego";

/// Lines to print for `outcome`, in order.
pub fn messages(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Converted { .. } => Vec::new(),
        Outcome::UnsupportedInput => vec![UNSUPPORTED_INPUT.to_string(), LOAD_FAILED.to_string()],
        Outcome::LoadFailed(FormatError::Parse { format, message }) => vec![
            format!(
                "Błąd podczas odczytu pliku {}: {message}",
                format.to_uppercase()
            ),
            LOAD_FAILED.to_string(),
        ],
        Outcome::LoadFailed(FormatError::Io(err)) => vec![
            format!("Błąd podczas otwierania pliku wejściowego: {err}"),
            LOAD_FAILED.to_string(),
        ],
        Outcome::LoadFailed(_) => vec![LOAD_FAILED.to_string()],
        Outcome::UnsupportedOutput => vec![UNSUPPORTED_OUTPUT.to_string()],
    }
}
