mod error;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use errcodes_app::{RunOptions, Source, DEFAULT_TIMEOUT};
use errcodes_parser::Mode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, ErrorCode};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog URL
    #[arg(long, global = true, env = "ERRCODES_URL", value_name = "URL")]
    url: Option<String>,

    /// Read the catalog from a local file instead of fetching it
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Write the generated lines to a file instead of stdout
    #[arg(short, long, global = true, value_name = "PATH")]
    output: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Print `name=value,` lines for the sqlstate enum
    EnumValues,
    /// Print `case sqlstate::name: return "name";` lines
    SwitchCases,
}

impl From<Command> for Mode {
    fn from(command: Command) -> Self {
        match command {
            Command::EnumValues => Mode::EnumValues,
            Command::SwitchCases => Mode::SwitchCases,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_usage_error = err.use_stderr();
            // The message is the only report; a failed write to the terminal
            // leaves nothing else to tell, and the exit code still goes out.
            let _ = err.print();
            std::process::exit(if is_usage_error {
                ErrorCode::Usage as i32
            } else {
                0
            });
        }
    };

    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(err.code as i32);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let source = match (cli.file, cli.url) {
        (Some(path), _) => Source::File(path),
        (None, Some(url)) => Source::Url(url),
        (None, None) => Source::default(),
    };
    let options = RunOptions {
        source,
        mode: cli.command.into(),
        timeout: Duration::from_secs(cli.timeout),
    };

    // Rendered into memory first so a failed run never leaves partial output.
    let mut rendered = Vec::new();
    let summary = errcodes_app::run(&options, &mut rendered).await?;
    info!(
        entries = summary.entries,
        duplicates = summary.duplicates,
        "generated sqlstate {}",
        options.mode
    );

    write_output(cli.output.as_deref(), &rendered)
        .map_err(|e| CliError::output(format!("{e:#}")))
}

fn write_output(path: Option<&std::path::Path>, rendered: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Could not write output file {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered)
                .and_then(|()| stdout.flush())
                .context("Could not write to stdout")
        }
    }
}
