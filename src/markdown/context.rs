//! Per-call conversion state.

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use html5ever::LocalName;

use super::grammar::{Grammar, NodeId};
use crate::error::Result;
use crate::tokens::TokenSource;

/// Tracks list context for indentation and numbering.
///
/// Cloning shares the ordinal counter: every item of one list bumps the same
/// cell. [`Context::enter_list`] replaces it, so a nested list counts on its own.
#[derive(Debug, Clone, Default)]
struct ListState {
    /// Number of enclosing lists.
    level: usize,
    /// Whether the innermost list is ordered.
    ordered: bool,
    /// Items seen so far in the innermost list.
    ordinal: Rc<Cell<usize>>,
}

/// State for one step of the conversion.
///
/// A context is never shared: each recursion derives a new one with the
/// fields it needs changed (grammar node, enclosing element, sink, list).
pub struct Context<'a> {
    tokens: &'a mut dyn TokenSource,
    out: &'a mut dyn Write,
    grammar: &'a Grammar,
    node: NodeId,
    parent: Option<LocalName>,
    list: ListState,
}

impl<'a> Context<'a> {
    /// Create a document-level context starting at the grammar's root.
    pub fn new(
        tokens: &'a mut dyn TokenSource,
        out: &'a mut dyn Write,
        grammar: &'a Grammar,
    ) -> Self {
        Self {
            tokens,
            out,
            grammar,
            node: grammar.root(),
            parent: None,
            list: ListState::default(),
        }
    }

    /// Derive the context for the children of `parent`, governed by `node`.
    pub fn narrow(&mut self, node: NodeId, parent: Option<LocalName>) -> Context<'_> {
        Context {
            tokens: &mut *self.tokens,
            out: &mut *self.out,
            grammar: self.grammar,
            node,
            parent,
            list: self.list.clone(),
        }
    }

    /// Derive a context that writes to `out` instead.
    pub fn with_sink<'b>(&'b mut self, out: &'b mut dyn Write) -> Context<'b> {
        Context {
            tokens: &mut *self.tokens,
            out,
            grammar: self.grammar,
            node: self.node,
            parent: self.parent.clone(),
            list: self.list.clone(),
        }
    }

    pub(crate) fn tokens(&mut self) -> &mut dyn TokenSource {
        &mut *self.tokens
    }

    pub fn grammar(&self) -> &'a Grammar {
        self.grammar
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Element whose end tag closes this context (`None` at document level).
    pub fn parent(&self) -> Option<&LocalName> {
        self.parent.as_ref()
    }

    /// Write strings to the sink in order.
    pub fn write_strs(&mut self, parts: &[&str]) -> Result<()> {
        for part in parts {
            self.out.write_all(part.as_bytes())?;
        }
        Ok(())
    }

    /// Go one list level deeper with a fresh item counter.
    pub fn enter_list(&mut self, ordered: bool) {
        self.list.level += 1;
        self.list.ordered = ordered;
        self.list.ordinal = Rc::new(Cell::new(0));
    }

    pub fn list_level(&self) -> usize {
        self.list.level
    }

    pub fn list_ordered(&self) -> bool {
        self.list.ordered
    }

    /// Count one more item in the innermost list and return its number.
    pub fn next_ordinal(&self) -> usize {
        let n = self.list.ordinal.get() + 1;
        self.list.ordinal.set(n);
        n
    }
}
