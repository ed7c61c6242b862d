use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::FetchError;

pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/postgres/postgres/master/src/backend/utils/errcodes.txt";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("errcodes/", env!("CARGO_PKG_VERSION"));

/// Where the raw catalog text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DEFAULT_URL.to_string())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub async fn fetch_text(source: &Source, timeout: Duration) -> Result<String, FetchError> {
    match source {
        Source::Url(url) => fetch_url(url, timeout).await,
        Source::File(path) => {
            info!(path = %path.display(), "reading errcodes catalog");
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| FetchError::Read {
                    path: path.clone(),
                    source,
                })
        }
    }
}

async fn fetch_url(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let http_err = |source: reqwest::Error| FetchError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(http_err)?;

    info!(%url, "fetching errcodes catalog");
    let response = client.get(url).send().await.map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let text = response.text().await.map_err(http_err)?;
    debug!(bytes = text.len(), "fetched errcodes catalog");
    Ok(text)
}
