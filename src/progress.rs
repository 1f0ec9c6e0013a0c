//! Progress and stage reporting.
//!
//! The pipeline never prints. It hands [`Stage`] milestones and per-chunk
//! [`Progress`] snapshots to a [`Reporter`], which decides how (and whether)
//! to show them.

use std::io::{self, Write};

/// Snapshot of download progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Bytes received so far.
    pub downloaded: u64,
    /// Total size announced by the server, if any.
    pub total: Option<u64>,
}

impl Progress {
    pub fn new(downloaded: u64, total: Option<u64>) -> Self {
        Self { downloaded, total }
    }

    /// Fraction complete in [0.0, 1.0], or `None` when the total is unknown.
    pub fn fraction(&self) -> Option<f64> {
        match self.total {
            Some(0) => Some(1.0),
            Some(total) => Some((self.downloaded as f64 / total as f64).min(1.0)),
            None => None,
        }
    }

    /// Whole percent complete, or `None` when the total is unknown.
    pub fn percent(&self) -> Option<u8> {
        self.fraction().map(|f| (f * 100.0).floor() as u8)
    }
}

/// Milestones of a single run, in the order they occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage<'a> {
    /// No output name was given; this one was derived from the URL.
    DefaultFilename(&'a str),
    Fetching(&'a str),
    Parsing,
    /// Extraction produced nothing; the sentinel text will be saved instead.
    NoReadableText,
    Saving(&'a str),
    Saved { url: &'a str, output: &'a str },
}

/// Receives stage milestones and download progress from the pipeline.
pub trait Reporter {
    fn stage(&mut self, stage: Stage<'_>);

    /// Called once per received chunk.
    fn on_chunk(&mut self, progress: &Progress);

    /// Called once after the body has been fully received.
    fn on_finish(&mut self, progress: &Progress);
}

/// Reporter that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn stage(&mut self, _stage: Stage<'_>) {}
    fn on_chunk(&mut self, _progress: &Progress) {}
    fn on_finish(&mut self, _progress: &Progress) {}
}

/// Console reporter: stage lines go to `out`, the download bar is redrawn in
/// place on `bar`.
pub struct ConsoleReporter<O: Write, B: Write> {
    out: O,
    bar: B,
    show_bar: bool,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    /// Stage lines on stdout, progress bar on stderr.
    pub fn stdio(show_bar: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), show_bar)
    }
}

impl<O: Write, B: Write> ConsoleReporter<O, B> {
    pub fn new(out: O, bar: B, show_bar: bool) -> Self {
        Self { out, bar, show_bar }
    }

    /// Split back into the underlying writers.
    pub fn into_inner(self) -> (O, B) {
        (self.out, self.bar)
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // Console output is best effort; a closed stdout must not abort the run.
        let _ = writeln!(self.out, "{text}");
    }

    fn draw(&mut self, progress: &Progress) {
        let rendered = match (progress.percent(), progress.total) {
            (Some(pct), Some(total)) => format!(
                "Downloading: {pct:>3}% ({}/{})",
                format_bytes(progress.downloaded),
                format_bytes(total)
            ),
            _ => format!("Downloading: {}", format_bytes(progress.downloaded)),
        };
        let _ = write!(self.bar, "\r{rendered}");
        let _ = self.bar.flush();
    }
}

impl<O: Write, B: Write> Reporter for ConsoleReporter<O, B> {
    fn stage(&mut self, stage: Stage<'_>) {
        match stage {
            Stage::DefaultFilename(name) => {
                self.line(format_args!("Using default output filename: {name}"))
            }
            Stage::Fetching(url) => self.line(format_args!("Fetching URL: {url}...")),
            Stage::Parsing => self.line(format_args!("Parsing HTML content...")),
            Stage::NoReadableText => self.line(format_args!(
                "Warning: No readable text content found on the webpage."
            )),
            Stage::Saving(output) => self.line(format_args!("Saving text to {output}...")),
            Stage::Saved { url, output } => {
                self.line(format_args!("Successfully saved text from {url} to {output}."))
            }
        }
    }

    fn on_chunk(&mut self, progress: &Progress) {
        if self.show_bar {
            self.draw(progress);
        }
    }

    fn on_finish(&mut self, progress: &Progress) {
        if self.show_bar {
            self.draw(progress);
            let _ = writeln!(self.bar);
        }
    }
}

/// Human-readable byte count (`512 B`, `8.0 KiB`, `1.5 MiB`).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
