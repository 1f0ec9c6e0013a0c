//! The single-run pipeline: validate, name, fetch, extract, write.

use std::path::PathBuf;

use crate::error::Result;
use crate::extract::TextExtractor;
use crate::fetch::Fetcher;
use crate::filename::sanitize_filename;
use crate::progress::{Reporter, Stage};
use crate::storage::Storage;
use crate::validate::validate_url;

/// Saved in place of the page text when extraction finds nothing readable.
pub const NO_CONTENT_SENTINEL: &str = "No readable text content found.";

/// What a successful run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The normalized URL that was fetched.
    pub url: String,
    /// Where the text was written.
    pub output: PathBuf,
    pub bytes_written: usize,
    /// `true` when the page had no readable text and the sentinel was saved.
    pub sentinel_used: bool,
}

/// Runs the stages in order, stopping at the first failure.
///
/// Storage is only touched once every earlier stage has succeeded, so a
/// failed run leaves no output behind.
pub struct Pipeline<S: Storage> {
    fetcher: Fetcher,
    extractor: TextExtractor,
    storage: S,
}

impl<S: Storage> Pipeline<S> {
    pub fn new(fetcher: Fetcher, extractor: TextExtractor, storage: S) -> Self {
        Self {
            fetcher,
            extractor,
            storage,
        }
    }

    /// Fetch `raw_url` and save its text as `output`, or under a name derived
    /// from the URL when `output` is `None`.
    pub async fn run<R: Reporter>(
        &self,
        raw_url: &str,
        output: Option<&str>,
        reporter: &mut R,
    ) -> Result<Outcome> {
        let target = validate_url(raw_url)?;

        let output = match output {
            Some(name) => name.to_string(),
            None => {
                let name = sanitize_filename(target.as_str());
                reporter.stage(Stage::DefaultFilename(&name));
                name
            }
        };

        reporter.stage(Stage::Fetching(target.as_str()));
        let html = self.fetcher.fetch(&target, reporter).await?;

        reporter.stage(Stage::Parsing);
        let mut text = self.extractor.extract(&html)?;
        drop(html);

        let sentinel_used = text.trim().is_empty();
        if sentinel_used {
            reporter.stage(Stage::NoReadableText);
            text = NO_CONTENT_SENTINEL.to_string();
        }

        reporter.stage(Stage::Saving(&output));
        let path = self.storage.put(&output, &text).await?;

        tracing::info!(url = %target, output = %path.display(), bytes = text.len(), "page saved");
        reporter.stage(Stage::Saved {
            url: target.as_str(),
            output: &output,
        });

        Ok(Outcome {
            url: target.as_str().to_string(),
            output: path,
            bytes_written: text.len(),
            sentinel_used,
        })
    }
}
