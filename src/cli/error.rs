//! CLI-level errors (wraps infrastructure errors)

use std::io::ErrorKind;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),

    #[error("cannot create {context}: {source}")]
    CantCreate {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Failure to create a file or directory the command was asked to write.
    pub fn cant_create(context: impl Into<String>, source: std::io::Error) -> Self {
        CliError::CantCreate {
            context: context.into(),
            source,
        }
    }
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::CantCreate { .. } => crate::exitcode::CANTCREAT,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => match app.io_kind() {
                        Some(ErrorKind::NotFound) => crate::exitcode::NOINPUT,
                        Some(_) => crate::exitcode::IOERR,
                        None => crate::exitcode::SOFTWARE,
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::application::IoResultExt;
    use crate::domain::DomainError;

    #[test]
    fn given_domain_error_when_mapping_exit_code_then_returns_dataerr() {
        let err = CliError::from(ApplicationError::Domain(DomainError::NoRoot));
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(err.to_string(), "Invalid! No root found / cycle detected");
    }

    #[test]
    fn given_config_error_when_mapping_exit_code_then_returns_config() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".to_string(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_usage_error_when_mapping_exit_code_then_returns_usage() {
        assert_eq!(
            CliError::Usage("nope".to_string()).exit_code(),
            crate::exitcode::USAGE
        );
    }

    #[test]
    fn given_missing_input_file_when_mapping_exit_code_then_returns_noinput() {
        let result: Result<String, io::Error> = Err(io::Error::from(io::ErrorKind::NotFound));
        let err = CliError::from(
            result
                .with_path_context("read notation", std::path::Path::new("missing.tn"))
                .unwrap_err(),
        );
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_other_io_failure_when_mapping_exit_code_then_returns_ioerr() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "read notation from stdin".to_string(),
            source: Box::new(io::Error::from(io::ErrorKind::InvalidData)),
        });
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn given_config_create_failure_when_mapping_exit_code_then_returns_cantcreat() {
        let err = CliError::cant_create(
            "/nope/.treenote.toml",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.exit_code(), crate::exitcode::CANTCREAT);
        assert!(err.to_string().starts_with("cannot create /nope/.treenote.toml"));
    }
}
