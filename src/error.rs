use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot proceed: configuration '{path}' does not exist.")]
    NotFound { path: String },

    /// A parameter value outside its enumerated domain.
    #[error("Invalid value '{value}' for {name}. Expected one of: {expected}.")]
    InvalidParameter { name: &'static str, value: String, expected: String },

    #[error("Failed to read '{path}'. Original error: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}'. Original error: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings file '{path}' does not exist.")]
    ConfigNotFound { path: String },

    #[error("Failed to parse settings file '{path}'. Original error: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Settings validation failed: {0}.")]
    ConfigValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with confgen's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_lists_accepted_values() {
        let err = Error::InvalidParameter {
            name: "architecture",
            value: "mips".into(),
            expected: "x86, arm".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'mips' for architecture. Expected one of: x86, arm."
        );
    }

    #[test]
    fn write_error_keeps_io_source() {
        use std::error::Error as _;
        let err = Error::WriteError {
            path: "configuration.nix".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("Failed to write 'configuration.nix'"));
        assert!(err.source().is_some());
    }
}
