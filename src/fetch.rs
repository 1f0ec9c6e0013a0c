//! Streaming HTTP retrieval and body decoding.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use futures::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderMap};

use crate::error::FetchError;
use crate::progress::{Progress, Reporter};
use crate::validate::TargetUrl;

/// Performs the single GET of a run. Built by
/// [`FetcherBuilder`](crate::FetcherBuilder).
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    chunk_size: usize,
}

impl Fetcher {
    pub(crate) fn new(client: reqwest::Client, chunk_size: usize) -> Self {
        Self { client, chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Download `target` and return the decoded body.
    ///
    /// The body is accumulated in `chunk_size` slices with one
    /// [`Reporter::on_chunk`] call per slice, followed by a single
    /// [`Reporter::on_finish`].
    pub async fn fetch<R: Reporter>(
        &self,
        target: &TargetUrl,
        reporter: &mut R,
    ) -> Result<String, FetchError> {
        let url = target.as_str();

        let response = self
            .client
            .get(target.url().clone())
            .send()
            .await
            .map_err(|e| FetchError::from_transport(&e, url))?;

        let status = response.status();
        if let Some(err) = FetchError::from_status(status, url) {
            return Err(err);
        }

        let total = response.content_length().filter(|&len| len > 0);
        let charset = declared_charset(response.headers());
        tracing::debug!(%status, ?total, ?charset, "response headers received");

        let mut body: Vec<u8> = Vec::with_capacity(total.unwrap_or(0).min(1 << 24) as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::from_transport(&e, url))?;
            for piece in chunk.chunks(self.chunk_size) {
                body.extend_from_slice(piece);
                reporter.on_chunk(&Progress::new(body.len() as u64, total));
            }
        }
        reporter.on_finish(&Progress::new(body.len() as u64, total));

        tracing::debug!(bytes = body.len(), "body received");
        Ok(decode_body(&body, charset.as_deref()).into_owned())
    }
}

/// Extract the `charset` parameter of the `Content-Type` header, if any.
fn declared_charset(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    charset_from_content_type(content_type)
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"').trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Decode `bytes` with the declared charset, defaulting to UTF-8.
///
/// Unknown labels and malformed input fall back to lossy UTF-8 with U+FFFD
/// substituted for invalid sequences.
pub fn decode_body<'a>(bytes: &'a [u8], charset: Option<&str>) -> Cow<'a, str> {
    let encoding = match charset {
        Some(label) => match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => encoding,
            None => {
                tracing::warn!("unknown charset {label:?}, decoding as UTF-8");
                return String::from_utf8_lossy(bytes);
            }
        },
        None => UTF_8,
    };

    let bytes = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if bom_encoding == encoding => &bytes[bom_len..],
        _ => bytes,
    };

    match encoding.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text,
        None => {
            tracing::warn!(
                "body is not valid {}, decoding as UTF-8 with replacement",
                encoding.name()
            );
            String::from_utf8_lossy(bytes)
        }
    }
}
