//! Destinations for the extracted text.
//!
//! [`FsStorage`] writes to the local filesystem. Implement [`Storage`] to
//! send the text somewhere else (tests use an in-memory backend).

mod fs;

pub use fs::FsStorage;

use std::future::Future;
use std::path::PathBuf;

use crate::error::Result;

/// Trait for backends that persist the extracted text.
///
/// # Implementing a custom backend
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use web2txt::{Result, Storage};
///
/// struct Stdout;
///
/// impl Storage for Stdout {
///     async fn put(&self, name: &str, text: &str) -> Result<PathBuf> {
///         println!("{text}");
///         Ok(PathBuf::from(name))
///     }
/// }
/// ```
pub trait Storage {
    /// Create or replace `name` with `text`, returning where it was written.
    fn put(&self, name: &str, text: &str) -> impl Future<Output = Result<PathBuf>>;
}
