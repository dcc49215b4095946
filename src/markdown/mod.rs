//! Grammar-driven HTML → Markdown conversion.
//!
//! The converter is a small corecursive engine:
//!
//! - [`grammar`]: a graph of "which elements are legal here and how each
//!   converts", built once and shared read-only
//! - [`dispatch`]: [`advance`] pulls one token and looks it up in the active
//!   grammar node; [`descend`] collects an element's content into a buffer
//! - [`format`]: the per-element rules (wrap, headings, links, lists)
//! - [`escape`]: whitespace normalization and escaping for text content
//!
//! ## Design Notes
//!
//! - **Unknown elements are dropped, not their text**: an element missing from
//!   the active grammar node produces no output and no recursion. Its children
//!   are then seen by the enclosing context, which renders whatever it allows.
//! - **Buffered composition**: every rule that decorates content renders it
//!   completely before writing anything to the parent sink.
//! - **List numbering**: a list owns one counter cell, shared by its items;
//!   a nested list gets a fresh one. Indentation is two spaces per list level.

mod context;
mod dispatch;
mod escape;
mod format;
mod grammar;

pub use context::Context;
pub use dispatch::{Signal, advance, descend, run};
pub use escape::escape_text;
pub use format::apply;
pub use grammar::{Format, Grammar, NodeId, Rule};
