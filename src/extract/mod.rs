//! HTML to plain-text extraction.
//!
//! [`TextExtractor`] parses a document with `scraper`, drops every subtree
//! matched by its removal selectors (`script` and `style` by default), joins
//! the remaining text nodes with spaces and flattens the result with
//! [`normalize_whitespace`].

mod whitespace;

use std::collections::HashSet;

use ego_tree::{NodeId, NodeRef};
use scraper::{Html, Selector, node::Node};

use crate::error::{Result, Web2TxtError};

pub use whitespace::normalize_whitespace;

/// Elements whose content is never readable text.
pub const DEFAULT_REMOVED: &[&str] = &["script", "style"];

/// Elements html5ever reads as raw text even though browsers with scripting
/// off (and lenient parsers) treat their content as markup.
const RAW_TEXT_CONTAINERS: &[&str] = &["noscript", "iframe", "noembed", "noframes"];

/// Extracts readable text from HTML.
///
/// # Example
///
/// ```
/// use web2txt::TextExtractor;
///
/// let extractor = TextExtractor::default();
/// let text = extractor
///     .extract("<html><body><script>evil()</script><p>Hello  World</p></body></html>")
///     .unwrap();
/// assert_eq!(text, "Hello World");
/// ```
#[derive(Clone, Debug)]
pub struct TextExtractor {
    removed: Vec<Selector>,
}

impl TextExtractor {
    /// Create an extractor that removes elements matching any of `selectors`.
    ///
    /// Fails with [`Web2TxtError::Parse`] if a selector is not valid CSS.
    pub fn new<I, S>(selectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = selectors
            .into_iter()
            .map(|sel| {
                let sel = sel.as_ref();
                Selector::parse(sel)
                    .map_err(|e| Web2TxtError::Parse(format!("invalid selector {sel:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { removed })
    }

    /// Parse `html` and return its normalized text.
    ///
    /// The result is empty when the document holds no readable text; choosing
    /// a fallback is left to the caller.
    pub fn extract(&self, html: &str) -> Result<String> {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            tracing::trace!("html parser recovered from {} errors", document.errors.len());
        }

        let mut raw = String::with_capacity(html.len() / 2);
        self.collect_tree(&document, &mut raw);

        Ok(normalize_whitespace(&raw))
    }

    fn collect_tree(&self, html: &Html, out: &mut String) {
        let skip_ids: HashSet<NodeId> = self
            .removed
            .iter()
            .flat_map(|selector| html.select(selector).map(|el| el.id()))
            .collect();
        self.collect_text(html.tree.root(), &skip_ids, out);
    }

    /// Append every text node under `node` to `out`, one space between nodes,
    /// skipping the subtrees rooted at `skip_ids`.
    fn collect_text(&self, node: NodeRef<Node>, skip_ids: &HashSet<NodeId>, out: &mut String) {
        if skip_ids.contains(&node.id()) {
            return;
        }

        match node.value() {
            Node::Text(text) if in_raw_text_container(node) => {
                // Markup kept verbatim by the parser; its text still counts.
                self.collect_tree(&Html::parse_fragment(text), out);
            }
            Node::Text(text) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
            Node::Document | Node::Fragment | Node::Element(_) => {
                for child in node.children() {
                    self.collect_text(child, skip_ids, out);
                }
            }
            _ => {}
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        let removed = DEFAULT_REMOVED
            .iter()
            .map(|tag| Selector::parse(tag).expect("tag names are valid selectors"))
            .collect();
        Self { removed }
    }
}

/// Whether `node` sits directly inside an element whose content the parser
/// keeps as one unparsed text node.
fn in_raw_text_container(node: NodeRef<Node>) -> bool {
    node.parent()
        .and_then(|parent| parent.value().as_element())
        .is_some_and(|el| RAW_TEXT_CONTAINERS.contains(&el.name()))
}
