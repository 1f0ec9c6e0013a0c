//! Derivation of a default output filename from a URL.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length of the sanitized stem, before the suffix is appended.
pub const MAX_STEM_LEN: usize = 100;

/// Appended to every derived filename.
pub const FILENAME_SUFFIX: &str = "_content.txt";

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid regex"));
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-_]").expect("valid regex"));
static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));

/// Turn a URL into a filesystem-safe filename ending in `_content.txt`.
///
/// The scheme is dropped, every character other than ASCII letters, digits,
/// `-` and `_` becomes `_`, underscore runs collapse, leading and trailing
/// underscores are trimmed and the stem is cut to [`MAX_STEM_LEN`].
///
/// ```
/// use web2txt::sanitize_filename;
///
/// assert_eq!(
///     sanitize_filename("https://example.com/a b?c=d"),
///     "example_com_a_b_c_d_content.txt"
/// );
/// ```
pub fn sanitize_filename(url: &str) -> String {
    let stem = SCHEME.replace(url, "");
    let stem = UNSAFE_CHARS.replace_all(&stem, "_");
    let stem = UNDERSCORE_RUNS.replace_all(&stem, "_");
    let stem = stem.trim_matches('_');

    // Only ASCII survives the replacement above, so byte slicing is safe.
    let stem = &stem[..stem.len().min(MAX_STEM_LEN)];

    format!("{stem}{FILENAME_SUFFIX}")
}
