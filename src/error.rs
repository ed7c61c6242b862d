use std::fmt;

use errcodes_app::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// CLI usage error (missing or unknown subcommand, invalid flags).
    Usage = 1,
    /// The catalog could not be fetched or read.
    Fetch = 2,
    /// A catalog line is malformed.
    Format = 3,
    /// Generated lines could not be written.
    Output = 4,
}

#[derive(Debug)]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Fetch,
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Format,
            message: message.into(),
        }
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Output,
            message: message.into(),
        }
    }
}

impl From<AppError> for CliError {
    fn from(err: AppError) -> Self {
        let message = err.to_string();
        match err {
            AppError::Fetch(_) => Self::fetch(message),
            AppError::Format(_) => Self::format(message),
            AppError::Write(_) => Self::output(message),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
