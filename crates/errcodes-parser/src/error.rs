use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected at least 3 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("sqlstate \"{code}\" must be exactly 5 characters long, found {len}")]
    CodeLength { code: String, len: usize },

    #[error("sqlstate \"{code}\" contains '{ch}', which is not a base-36 digit")]
    CodeDigit { code: String, ch: char },

    #[error("error name \"{name}\" must start with ERRCODE_")]
    MissingPrefix { name: String },

    #[error("unknown output mode \"{name}\" (expected enum-values or switch-cases)")]
    UnknownMode { name: String },

    #[error("line {line}: {source}: {text}")]
    Line {
        line: usize,
        text: String,
        source: Box<Error>,
    },
}

impl Error {
    /// The underlying format violation, without the line context.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.root(),
            other => other,
        }
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}
