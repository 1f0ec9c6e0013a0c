//! # web2txt
//!
//! Download a single webpage and save its human-readable text to a file.
//!
//! ## Overview
//!
//! A run is a straight line of stages:
//!
//! 1. [`validate_url`] normalizes the input (adding `https://` if needed).
//! 2. [`sanitize_filename`] derives an output name when none is given.
//! 3. [`Fetcher`] streams the body, reporting [`Progress`] per chunk, and
//!    decodes it with the declared charset.
//! 4. [`TextExtractor`] drops `script`/`style` content and flattens the rest.
//! 5. A [`Storage`] backend (normally [`FsStorage`]) writes the text.
//!
//! [`Pipeline`] wires the stages together and stops at the first error, so a
//! failed run never leaves a file behind.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use web2txt::{FetcherBuilder, FsStorage, Pipeline, SilentReporter, TextExtractor};
//!
//! # async fn example() -> web2txt::Result<()> {
//! let pipeline = Pipeline::new(
//!     FetcherBuilder::new().build()?,
//!     TextExtractor::default(),
//!     FsStorage::default(),
//! );
//! let outcome = pipeline
//!     .run("example.com", None, &mut SilentReporter)
//!     .await?;
//! println!("saved {}", outcome.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `default-tls` | yes | HTTPS through the platform TLS library. |
//! | `rustls-tls` | no | HTTPS through `rustls`. |
//!
//! To build with `rustls` only, disable the default features:
//! `cargo build --no-default-features --features rustls-tls`.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filename;
pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod storage;
pub mod validate;

pub use config::FetcherBuilder;
pub use error::{FetchError, Result, Web2TxtError};
pub use extract::{TextExtractor, normalize_whitespace};
pub use fetch::{Fetcher, decode_body};
pub use filename::sanitize_filename;
pub use pipeline::{NO_CONTENT_SENTINEL, Outcome, Pipeline};
pub use progress::{ConsoleReporter, Progress, Reporter, SilentReporter, Stage};
pub use storage::{FsStorage, Storage};
pub use validate::{TargetUrl, validate_url};
