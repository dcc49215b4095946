//! The dispatch engine.
//!
//! [`advance`] consumes one token against the active grammar node. Formatting
//! rules that need an element's content call [`descend`], which runs
//! `advance` into a private buffer until the element's end tag shows up.
//! The two functions recurse into each other, one level per open element.

use std::io::Write;

use log::{debug, trace};

use super::context::Context;
use super::format;
use super::grammar::Grammar;
use crate::error::Result;
use crate::tokens::{Token, TokenSource};

/// Outcome of one dispatch step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The token was handled (or dropped); keep going.
    Continue,
    /// The end tag of the context's enclosing element was consumed.
    ContextClosed,
    /// No tokens are left.
    StreamEnded,
}

/// Consume and convert the next token.
pub fn advance(cx: &mut Context<'_>) -> Result<Signal> {
    let token = cx.tokens().next_token();
    match &token {
        Token::EndOfStream => Ok(Signal::StreamEnded),
        Token::End { name } if cx.parent() == Some(name) => Ok(Signal::ContextClosed),
        Token::Start { .. } | Token::Text(_) => {
            let Some(id) = token.element_id() else {
                return Ok(Signal::Continue);
            };
            let Some(rule) = cx.grammar().lookup(cx.node(), &id).copied() else {
                trace!("dropping {id:?}: not legal here");
                return Ok(Signal::Continue);
            };
            let parent = match &token {
                Token::Start { name, .. } => Some(name.clone()),
                _ => None,
            };
            let mut inner = cx.narrow(rule.children, parent);
            format::apply(rule.format, &mut inner, &token)
        }
        // Self-closing tags have no content; stray end tags close nothing
        Token::SelfClosing { .. } | Token::End { .. } => Ok(Signal::Continue),
    }
}

/// Convert everything up to the end tag of the context's element.
///
/// Returns the converted content, or `None` if the stream ended first.
pub fn descend(cx: &mut Context<'_>) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let mut inner = cx.with_sink(&mut buf);
    loop {
        match advance(&mut inner)? {
            Signal::Continue => {}
            Signal::ContextClosed => break,
            Signal::StreamEnded => {
                if let Some(parent) = inner.parent() {
                    debug!("stream ended inside <{parent}>, dropping its content");
                }
                return Ok(None);
            }
        }
    }
    drop(inner);
    Ok(Some(String::from_utf8(buf)?))
}

/// Convert a whole token stream with `grammar`, writing to `out`.
pub fn run(grammar: &Grammar, tokens: &mut dyn TokenSource, out: &mut dyn Write) -> Result<()> {
    let mut cx = Context::new(tokens, out, grammar);
    loop {
        match advance(&mut cx)? {
            Signal::StreamEnded => return Ok(()),
            // No enclosing element at document level, so nothing can close
            Signal::Continue | Signal::ContextClosed => {}
        }
    }
}
