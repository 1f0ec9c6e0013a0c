//! Command-line front end.

use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::config::FetcherBuilder;
use crate::error::Web2TxtError;
use crate::extract::TextExtractor;
use crate::pipeline::Pipeline;
use crate::progress::ConsoleReporter;
use crate::storage::FsStorage;

pub const USAGE: &str = "\
Usage: web2txt <URL> [output_filename.txt]
  URL: The full URL of the webpage to scrape
  output_filename.txt: Optional output filename
Run `web2txt --help` for all options.";

/// Save the readable text of a webpage to a file.
#[derive(Debug, Parser)]
#[command(name = "web2txt", version, about, long_about = None)]
pub struct Cli {
    /// The full URL of the webpage to scrape (https:// is assumed if omitted).
    pub url: String,

    /// Output file. Defaults to a name derived from the URL.
    pub output: Option<String>,

    /// Connect and read timeout, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 15)]
    pub timeout: u64,

    /// Give up if the whole download takes longer than this, in seconds.
    #[arg(long, value_name = "SECS")]
    pub max_time: Option<u64>,

    /// Do not draw the download progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase diagnostic logging on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Result of interpreting the process arguments.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// `--help` or `--version`; clap has the text ready.
    Info(clap::Error),
    /// Wrong number of arguments or a malformed option.
    Usage,
}

pub fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Run(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Info(err)
        }
        Err(err) => {
            tracing::debug!("argument error: {err}");
            Invocation::Usage
        }
    }
}

/// One-line, user-facing description of a failed run.
pub fn describe_error(err: &Web2TxtError) -> String {
    match err {
        Web2TxtError::InvalidUrl(msg) => format!("Error: Invalid URL. {msg}"),
        Web2TxtError::Fetch(fetch) => format!(
            "Error: Could not retrieve content from {}. Reason: {fetch}",
            fetch.url()
        ),
        Web2TxtError::Parse(_) => format!("Error: Could not parse HTML content. Reason: {err}"),
        Web2TxtError::PermissionDenied { path } | Web2TxtError::Io { path, .. } => format!(
            "Error: Could not write to file {}. Reason: {err}",
            path.display()
        ),
        Web2TxtError::Unexpected(source) => format!("An unexpected error occurred: {source}"),
    }
}

impl Cli {
    /// Execute the run described by these arguments and map the result to an
    /// exit status: 0 on success, 1 on any failure.
    pub async fn run(self) -> ExitCode {
        match self.execute().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::debug!("run failed: {err:?}");
                println!("{}", describe_error(&err));
                ExitCode::FAILURE
            }
        }
    }

    async fn execute(self) -> Result<(), Web2TxtError> {
        let mut builder = FetcherBuilder::new().timeout(Duration::from_secs(self.timeout));
        if let Some(secs) = self.max_time {
            builder = builder.max_time(Duration::from_secs(secs));
        }

        let fetcher = builder.build()?;
        let pipeline = Pipeline::new(fetcher, TextExtractor::default(), FsStorage::default());
        let mut reporter = ConsoleReporter::stdio(!self.no_progress);

        pipeline
            .run(&self.url, self.output.as_deref(), &mut reporter)
            .await?;
        Ok(())
    }
}
