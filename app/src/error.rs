use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not fetch {url}: server answered {status}")]
    Status { url: String, status: u16 },

    #[error("could not fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed errcodes catalog: {0}")]
    Format(#[from] errcodes_parser::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
