//! Fetches the errcodes catalog and writes the generated lines.

pub mod error;
pub mod source;

use std::io::Write;
use std::time::Duration;

use errcodes_parser::{render, Catalog, Mode};
use tracing::info;

pub use error::{AppError, FetchError};
pub use source::{fetch_text, Source, DEFAULT_TIMEOUT, DEFAULT_URL};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: Source,
    pub mode: Mode,
    pub timeout: Duration,
}

impl RunOptions {
    #[must_use]
    pub fn new(source: Source, mode: Mode) -> Self {
        Self {
            source,
            mode,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub entries: usize,
    pub duplicates: usize,
}

/// Fetches, parses and renders in one go. Nothing is written unless the
/// whole catalog parsed.
pub async fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<Summary, AppError> {
    let text = fetch_text(&options.source, options.timeout).await?;
    let catalog = Catalog::parse(&text)?;

    info!(
        mode = %options.mode,
        entries = catalog.len(),
        "rendering sqlstate catalog"
    );
    render(&catalog, options.mode, out)?;

    Ok(Summary {
        entries: catalog.len(),
        duplicates: catalog.duplicates(),
    })
}
