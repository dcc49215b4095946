//! HTML token source.
//!
//! Wraps the html5ever tokenizer and flattens its output into the small token
//! vocabulary the converter dispatches on. The tokenizer pushes tokens into a
//! [`TokenSink`]; we collect them all up front (the converter handles one
//! complete document at a time) and hand them out through [`TokenSource`].

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token as HtmlToken, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};
use html5ever::LocalName;
use log::trace;

/// Identity used to look a token up in a grammar node.
///
/// Text content has its own reserved identity so grammars can decide how (and
/// whether) text is rendered in a given context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    Text,
    Element(LocalName),
}

impl ElementId {
    /// Shorthand for an element identity from a tag name.
    pub fn tag(name: &str) -> Self {
        ElementId::Element(LocalName::from(name))
    }
}

/// A tag attribute, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: LocalName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: LocalName::from(name),
            value: value.to_string(),
        }
    }
}

/// One unit of markup consumed by the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Start {
        name: LocalName,
        attrs: Vec<Attribute>,
    },
    End {
        name: LocalName,
    },
    SelfClosing {
        name: LocalName,
        attrs: Vec<Attribute>,
    },
    Text(String),
    EndOfStream,
}

impl Token {
    /// Build a start tag token without attributes.
    pub fn start(name: &str) -> Self {
        Token::Start {
            name: LocalName::from(name),
            attrs: Vec::new(),
        }
    }

    /// Build a start tag token with attributes.
    pub fn start_with(name: &str, attrs: Vec<Attribute>) -> Self {
        Token::Start {
            name: LocalName::from(name),
            attrs,
        }
    }

    pub fn end(name: &str) -> Self {
        Token::End {
            name: LocalName::from(name),
        }
    }

    pub fn text(text: &str) -> Self {
        Token::Text(text.to_string())
    }

    /// Grammar identity of a start tag or text token.
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Token::Start { name, .. } => Some(ElementId::Element(name.clone())),
            Token::Text(_) => Some(ElementId::Text),
            _ => None,
        }
    }

    /// First attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Token::Start { attrs, .. } | Token::SelfClosing { attrs, .. } => attrs
                .iter()
                .find(|a| &*a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    /// Text payload, empty for tags.
    pub fn data(&self) -> &str {
        match self {
            Token::Text(text) => text,
            _ => "",
        }
    }
}

/// Forward-only supply of tokens.
///
/// Once exhausted, a source keeps returning [`Token::EndOfStream`].
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Token>,
{
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or(Token::EndOfStream)
    }
}

/// Tokens of a complete HTML document, produced by html5ever.
#[derive(Debug)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
}

impl TokenStream {
    /// Tokenize a complete document.
    pub fn tokenize(html: &str) -> Self {
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(html));

        let tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());
        let _ = tokenizer.feed(&input);
        tokenizer.end();

        let tokens = tokenizer.sink.tokens.take();
        trace!("tokenized document into {} tokens", tokens.len());
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.next()
    }
}

/// TokenSink that accumulates converter tokens.
///
/// Uses interior mutability (RefCell) because html5ever's TokenSink trait
/// takes `&self`.
#[derive(Default)]
struct Collector {
    tokens: RefCell<Vec<Token>>,
}

impl Collector {
    fn push_text(&self, text: &str) {
        let mut tokens = self.tokens.borrow_mut();
        // The tokenizer may split one run of text into several chunks
        if let Some(Token::Text(prev)) = tokens.last_mut() {
            prev.push_str(text);
        } else {
            tokens.push(Token::Text(text.to_string()));
        }
    }

    fn push_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let attrs = || {
            tag.attrs
                .iter()
                .map(|a| Attribute {
                    name: a.name.local.clone(),
                    value: a.value.to_string(),
                })
                .collect::<Vec<_>>()
        };

        let token = match (tag.kind, tag.self_closing) {
            (TagKind::StartTag, true) => Token::SelfClosing {
                name: tag.name.clone(),
                attrs: attrs(),
            },
            (TagKind::StartTag, false) => Token::Start {
                name: tag.name.clone(),
                attrs: attrs(),
            },
            (TagKind::EndTag, _) => Token::End {
                name: tag.name.clone(),
            },
        };
        self.tokens.borrow_mut().push(token);

        if tag.kind == TagKind::StartTag && !tag.self_closing {
            content_model(&tag.name)
        } else {
            TokenSinkResult::Continue
        }
    }
}

/// Switch the tokenizer into the text state a browser uses for this element.
fn content_model(name: &LocalName) -> TokenSinkResult<()> {
    match name.as_ref() {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&self, token: HtmlToken, line_number: u64) -> TokenSinkResult<()> {
        match token {
            HtmlToken::TagToken(tag) => return self.push_tag(tag),
            HtmlToken::CharacterTokens(text) => self.push_text(&text),
            HtmlToken::ParseError(msg) => trace!("line {line_number}: {msg}"),
            // Comments, doctypes and NUL characters carry no convertible content
            _ => {}
        }
        TokenSinkResult::Continue
    }
}
