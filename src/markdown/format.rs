//! Formatting rules.
//!
//! Each rule gets a context already narrowed to the matched element. Rules
//! that decorate an element's content render it into a buffer first (see
//! [`descend`]) and only then write to their own sink, so decoration can
//! depend on the finished content (an underline as long as the heading).

use log::debug;

use super::context::Context;
use super::dispatch::{Signal, descend};
use super::escape::escape_text;
use super::grammar::Format;
use crate::error::Result;
use crate::tokens::Token;

/// Apply `format` to `token`, writing to the context's sink.
pub fn apply(format: Format, cx: &mut Context<'_>, token: &Token) -> Result<Signal> {
    match format {
        Format::Text => {
            let text = escape_text(token.data());
            cx.write_strs(&[text.as_str()])?;
            Ok(Signal::Continue)
        }
        Format::Raw => {
            cx.write_strs(&[token.data()])?;
            Ok(Signal::Continue)
        }
        Format::Discard => match descend(cx)? {
            Some(_) => Ok(Signal::Continue),
            None => Ok(Signal::StreamEnded),
        },
        Format::Wrap { open, close } => wrap(cx, open, close),
        Format::Underline(c) => underline(cx, c),
        Format::Atx(level) => atx(cx, level),
        Format::Link => link(cx, token),
        Format::List { ordered } => {
            cx.enter_list(ordered);
            wrap(cx, "", "")
        }
        Format::ListItem => list_item(cx),
    }
}

fn wrap(cx: &mut Context<'_>, open: &str, close: &str) -> Result<Signal> {
    let Some(text) = descend(cx)? else {
        return Ok(Signal::StreamEnded);
    };
    cx.write_strs(&[open, text.as_str(), close])?;
    Ok(Signal::Continue)
}

fn underline(cx: &mut Context<'_>, c: char) -> Result<Signal> {
    let Some(text) = descend(cx)? else {
        return Ok(Signal::StreamEnded);
    };
    let line: String = std::iter::repeat_n(c, text.chars().count()).collect();
    cx.write_strs(&["\n\n", text.as_str(), "\n", line.as_str(), "\n"])?;
    Ok(Signal::Continue)
}

fn atx(cx: &mut Context<'_>, level: u8) -> Result<Signal> {
    let Some(text) = descend(cx)? else {
        return Ok(Signal::StreamEnded);
    };
    let hashes = "#".repeat(level as usize);
    cx.write_strs(&["\n\n", hashes.as_str(), " ", text.as_str(), "\n"])?;
    Ok(Signal::Continue)
}

fn link(cx: &mut Context<'_>, token: &Token) -> Result<Signal> {
    let Some(href) = token.attr("href") else {
        // Children stay in the stream for the enclosing context
        debug!("anchor without href, converting its content in place");
        return Ok(Signal::Continue);
    };
    let Some(text) = descend(cx)? else {
        return Ok(Signal::StreamEnded);
    };
    cx.write_strs(&["[", text.as_str(), "](", href, ")"])?;
    Ok(Signal::Continue)
}

fn list_item(cx: &mut Context<'_>) -> Result<Signal> {
    let n = cx.next_ordinal();
    let indent = "  ".repeat(cx.list_level());
    let marker = if cx.list_ordered() {
        format!("\n{indent}{n}. ")
    } else {
        format!("\n{indent}- ")
    };
    wrap(cx, &marker, "")
}
