//! # html2md
//!
//! Convert HTML into lightweight Markdown.
//!
//! ## Features
//!
//! - Setext headings for `h1`/`h2`, ATX headings for `h3`–`h5`
//! - Bold, italic, emphasis, strikethrough, inline code and fenced `pre` blocks
//! - Links, paragraphs, nested ordered and unordered lists
//! - `script` and `head` content is dropped; unknown elements are skipped
//!
//! ## Quick Start
//!
//! ```
//! let md = html2md::convert_str("<h1>Hello!</h1>").unwrap();
//! assert_eq!(md, "\n\nHello!\n======\n");
//!
//! let md = html2md::convert_str("<b>bold</b> <em>emph</em>").unwrap();
//! assert_eq!(md, "**bold** *emph*");
//! ```
//!
//! ## Custom Token Sources
//!
//! The engine consumes any [`TokenSource`]. [`TokenStream`] tokenizes HTML
//! with html5ever; any iterator of [`Token`]s works too:
//!
//! ```
//! use html2md::{Token, convert_tokens};
//!
//! let mut tokens = vec![Token::start("em"), Token::text("hi"), Token::end("em")].into_iter();
//! let mut out = Vec::new();
//! convert_tokens(&mut tokens, &mut out).unwrap();
//! assert_eq!(out, b"*hi*");
//! ```

use std::io::{Read, Write};

pub mod error;
pub mod markdown;
pub mod tokens;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use markdown::Grammar;
pub use tokens::{Attribute, ElementId, Token, TokenSource, TokenStream};

/// Read a whole HTML document from `input` and write its Markdown to `output`.
pub fn convert<R: Read, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let html = util::decode_text(&bytes);

    let mut tokens = TokenStream::tokenize(&html);
    convert_tokens(&mut tokens, &mut output)?;
    output.flush()?;
    Ok(())
}

/// Convert an HTML string to Markdown.
pub fn convert_str(html: &str) -> Result<String> {
    let mut tokens = TokenStream::tokenize(html);
    let mut out = Vec::new();
    convert_tokens(&mut tokens, &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// Convert a token stream with the standard HTML grammar.
pub fn convert_tokens(tokens: &mut dyn TokenSource, output: &mut dyn Write) -> Result<()> {
    markdown::run(Grammar::html(), tokens, output)
}
