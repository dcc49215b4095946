//! Grammar table: which elements are legal where, and how each converts.
//!
//! A grammar is a graph of nodes. Each node maps an [`ElementId`] to a
//! [`Rule`], and each rule names the node that governs the element's children.
//! Nodes live in an arena and refer to each other by [`NodeId`], so cycles
//! (a list item may contain a list, whose items may contain lists, ...) are
//! just indices.
//!
//! The standard HTML grammar looks like this:
//!
//! ```text
//! document ─┬─ inline-with-links ── a ──> inline
//!           ├─ h1..h5 ──> inline-with-links
//!           ├─ p ──> block ─┬─ inline-with-links
//!           │               └─ ul/ol ──> list-items
//!           └─ ul/ol ──> list-items ─┬─ ul/ol ──> list-items
//!                                    └─ li ──> block
//! inline ─┬─ text
//!         ├─ b/strong/s/del/i/em/span ──> inline
//!         └─ code/pre ──> raw
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tokens::ElementId;

/// Index of a node in a [`Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The node with no members. Everything inside it is dropped.
    pub const EMPTY: NodeId = NodeId(0);
}

/// How an element (or text) is turned into markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Escaped, whitespace-normalized text.
    Text,
    /// Text written exactly as it appears.
    Raw,
    /// Consume the element's content and emit nothing.
    Discard,
    /// Surround the converted content with fixed delimiters.
    Wrap {
        open: &'static str,
        close: &'static str,
    },
    /// Setext heading: content followed by a line of this character.
    Underline(char),
    /// ATX heading with this many `#`.
    Atx(u8),
    /// `[content](href)`.
    Link,
    /// Enter an ordered or unordered list.
    List { ordered: bool },
    /// One bullet or numbered line.
    ListItem,
}

/// Conversion rule for one element in one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub format: Format,
    /// Grammar for the element's children.
    pub children: NodeId,
}

impl Rule {
    pub const fn new(format: Format, children: NodeId) -> Self {
        Self { format, children }
    }
}

type Node = HashMap<ElementId, Rule>;

/// Arena of grammar nodes.
///
/// Built with [`Grammar::add_node`] / [`Grammar::insert`], then only read.
#[derive(Debug, Clone)]
pub struct Grammar {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    /// Create a grammar holding only the [`NodeId::EMPTY`] node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            root: NodeId::EMPTY,
        }
    }

    /// Allocate a new, empty node. Rules can point at it before it is filled.
    pub fn add_node(&mut self) -> NodeId {
        self.nodes.push(Node::new());
        NodeId(self.nodes.len() as u32 - 1)
    }

    /// Add (or replace) the rule for `id` in `node`.
    pub fn insert(&mut self, node: NodeId, id: ElementId, rule: Rule) {
        self.nodes[node.0 as usize].insert(id, rule);
    }

    /// Add a batch of rules to `node`; later entries win.
    pub fn extend(&mut self, node: NodeId, rules: &[(ElementId, Rule)]) {
        for (id, rule) in rules {
            self.insert(node, id.clone(), *rule);
        }
    }

    /// Node the document starts in.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_root(&mut self, node: NodeId) {
        self.root = node;
    }

    /// Find the rule for `id` inside `node`. `None` means the element is not
    /// legal there and must be dropped.
    pub fn lookup(&self, node: NodeId, id: &ElementId) -> Option<&Rule> {
        self.nodes.get(node.0 as usize)?.get(id)
    }

    /// Get the standard HTML grammar (cached).
    pub fn html() -> &'static Self {
        static HTML: LazyLock<Grammar> = LazyLock::new(Grammar::build_html);
        &HTML
    }

    /// Build the standard HTML grammar.
    fn build_html() -> Self {
        use Format::*;

        let mut g = Self::new();
        let raw = g.add_node();
        let inline = g.add_node();
        let inline_links = g.add_node();
        let block = g.add_node();
        let list_items = g.add_node();
        let document = g.add_node();

        let tag = ElementId::tag;
        let wrap = |open, close, children| Rule::new(Wrap { open, close }, children);

        g.insert(raw, ElementId::Text, Rule::new(Raw, NodeId::EMPTY));

        // Shared by every context that allows inline formatting
        let inline_rules = [
            (ElementId::Text, Rule::new(Text, NodeId::EMPTY)),
            (tag("b"), wrap("**", "**", inline)),
            (tag("strong"), wrap("**", "**", inline)),
            (tag("s"), wrap("~~", "~~", inline)),
            (tag("del"), wrap("~~", "~~", inline)),
            (tag("i"), wrap("_", "_", inline)),
            (tag("em"), wrap("*", "*", inline)),
            (tag("span"), wrap("", "", inline)),
            (tag("code"), wrap("`", "`", raw)),
            (tag("pre"), wrap("\n```\n", "\n```\n", raw)),
        ];
        let link = (tag("a"), Rule::new(Link, inline));
        let lists = [
            (tag("ul"), Rule::new(List { ordered: false }, list_items)),
            (tag("ol"), Rule::new(List { ordered: true }, list_items)),
        ];

        g.extend(inline, &inline_rules);

        g.extend(inline_links, &inline_rules);
        g.extend(inline_links, &[link.clone()]);

        g.extend(block, &inline_rules);
        g.extend(block, &[link.clone()]);
        g.extend(block, &lists);

        g.extend(list_items, &lists);
        g.insert(list_items, tag("li"), Rule::new(ListItem, block));

        g.extend(document, &inline_rules);
        g.extend(document, &[link]);
        g.extend(
            document,
            &[
                (tag("script"), Rule::new(Discard, NodeId::EMPTY)),
                (tag("head"), Rule::new(Discard, NodeId::EMPTY)),
                (tag("h1"), Rule::new(Underline('='), inline_links)),
                (tag("h2"), Rule::new(Underline('-'), inline_links)),
                (tag("h3"), Rule::new(Atx(3), inline_links)),
                (tag("h4"), Rule::new(Atx(4), inline_links)),
                (tag("h5"), Rule::new(Atx(5), inline_links)),
                (tag("p"), wrap("\n", "\n", block)),
                (tag("pre"), wrap("\n```", "```\n", raw)),
            ],
        );
        g.extend(document, &lists);
        g.set_root(document);

        g
    }
}
