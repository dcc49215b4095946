//! End-to-end conversion tests: HTML in, Markdown out.

use std::io::{self, Write};

use html2md::{Error, convert, convert_str};
use proptest::prelude::*;

fn check(html: &str, expected: &str) {
    let md = convert_str(html).expect("conversion failed");
    assert_eq!(md, expected, "converting {html:?}");
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_plain_text() {
    check("some text", "some text");
}

#[test]
fn test_whitespace_collapsed() {
    check("<p>  lots   of\n\tspace </p>", "\n lots of space \n");
}

#[test]
fn test_character_references() {
    check("<p>a &lt;b&gt; &amp; c</p>", "\na <b> & c\n");
}

#[test]
fn test_metacharacters_escaped_once() {
    check("<p>2*3 = 6_</p>", "\n2\\*3 = 6\\_\n");
    check("already \\* escaped", "already \\\\\\* escaped");
}

// ============================================================================
// Headings
// ============================================================================

#[test]
fn test_h1() {
    check("<h1>Hello!</h1>", "\n\nHello!\n======\n");
}

#[test]
fn test_h1_with_link() {
    check(
        "<h1><a href='http://ya.ru'>Hello!</a></h1>",
        "\n\n[Hello!](http://ya.ru)\n======================\n",
    );
}

#[test]
fn test_h1_with_link_and_text() {
    check(
        "<h1>Hello <a href='http://ya.ru'>there</a>!</h1>",
        "\n\nHello [there](http://ya.ru)!\n============================\n",
    );
}

#[test]
fn test_h1_underline_counts_characters() {
    check("<h1>Café</h1>", "\n\nCafé\n====\n");
}

#[test]
fn test_h2() {
    check("<h2>Hello!</h2>", "\n\nHello!\n------\n");
}

#[test]
fn test_h4_h5() {
    check(
        "<h4>Section</h4><h5>Subsection</h5>",
        "\n\n#### Section\n\n\n##### Subsection\n",
    );
}

#[test]
fn test_h6_not_a_heading() {
    check("<h6>Small</h6>", "Small");
}

// ============================================================================
// Inline formatting
// ============================================================================

#[test]
fn test_emphasis() {
    check(
        "<b>bold</b> <s>strikeout</s> <em>emph</em>",
        "**bold** ~~strikeout~~ *emph*",
    );
}

#[test]
fn test_nested_emphasis() {
    check(
        "<b>bold & <s>strikeout</s></b> <em><b>em</b>phasis</em>",
        "**bold & ~~strikeout~~** ***em**phasis*",
    );
}

#[test]
fn test_italic_strong_del() {
    check(
        "<i>it</i> <strong>st</strong> <del>gone</del>",
        "_it_ **st** ~~gone~~",
    );
}

#[test]
fn test_code_not_escaped() {
    check("<code>~~this *is* code~~</code>", "`~~this *is* code~~`");
}

#[test]
fn test_code_drops_markup_keeps_text() {
    check("<code>a<b>b</b>c</code>", "`abc`");
}

#[test]
fn test_pre_block() {
    check(
        "<pre>\nfn main() {\n    *x = 1;\n}\n</pre>",
        "\n```\nfn main() {\n    *x = 1;\n}\n```\n",
    );
}

// ============================================================================
// Links
// ============================================================================

#[test]
fn test_link() {
    check("<a href='http://ya.ru'>ya.ru</a>", "[ya.ru](http://ya.ru)");
}

#[test]
fn test_link_with_text() {
    check(
        "Click <a href='http://ya.ru'>here</a> please.",
        "Click [here](http://ya.ru) please.",
    );
}

#[test]
fn test_link_without_href_content_handled_by_enclosing_context() {
    check("<a name='top'>Top</a> of page", "Top of page");
    check("<p><a>x</a> y</p>", "\nx y\n");
}

#[test]
fn test_links_do_not_nest() {
    check("<a href='x'>a<a href='y'>b</a>c</a>", "[ab](x)c");
}

#[test]
fn test_no_link_inside_emphasis() {
    check("<b><a href='x'>t</a></b>", "**t**");
}

// ============================================================================
// Blocks
// ============================================================================

#[test]
fn test_paragraphs() {
    check(
        "<p>First paragraph</p><p>Second <span>para</span>graph</p>",
        "\nFirst paragraph\n\nSecond paragraph\n",
    );
}

#[test]
fn test_script_and_head_discarded() {
    check("<head><title>T</title></head><p>Body</p>", "\nBody\n");
    check("before<script>var a = '<b>';</script>after", "beforeafter");
}

#[test]
fn test_unknown_elements_skipped() {
    check("<div>hi <b>there</b></div>", "hi **there**");
    check("<table><tr><td>cell</td></tr></table>", "cell");
}

#[test]
fn test_line_breaks_dropped() {
    check("a<br/>b", "ab");
    check("a<br>b", "ab");
}

#[test]
fn test_unclosed_element_dropped() {
    check("ok <em>open", "ok ");
    check("<p>dangling", "");
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_unordered_list() {
    check("<ul><li>one</li><li>two</li></ul>", "\n  - one\n  - two");
}

#[test]
fn test_ordered_list() {
    check("<ol><li>a</li><li>b</li><li>c</li></ol>", "\n  1. a\n  2. b\n  3. c");
}

#[test]
fn test_whitespace_between_items_ignored() {
    check("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>", "\n  - one\n  - two");
}

#[test]
fn test_nested_unordered_in_ordered() {
    check(
        "<ol><li>first<ul><li>x</li><li>y</li></ul></li><li>second</li></ol>",
        "\n  1. first\n    - x\n    - y\n  2. second",
    );
}

#[test]
fn test_nested_ordered_counters_independent() {
    check(
        "<ol><li>a<ol><li>b</li><li>c</li></ol></li><li>d</li></ol>",
        "\n  1. a\n    1. b\n    2. c\n  2. d",
    );
}

#[test]
fn test_list_item_content_formatted() {
    check(
        "<ul><li><b>bold</b> and <a href='u'>link</a></li></ul>",
        "\n  - **bold** and [link](u)",
    );
}

#[test]
fn test_list_inside_paragraph() {
    check("<p>Items:<ul><li>x</li></ul></p>", "\nItems:\n  - x\n");
}

// ============================================================================
// Process boundary
// ============================================================================

#[test]
fn test_convert_reader_writer() {
    let mut out = Vec::new();
    convert("<h2>Hi</h2>".as_bytes(), &mut out).unwrap();
    assert_eq!(out, b"\n\nHi\n--\n");
}

#[test]
fn test_convert_decodes_windows_1252() {
    let mut out = Vec::new();
    convert(&b"<p>caf\xE9</p>"[..], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\ncaf\u{e9}\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_is_fatal() {
    let result = convert("<p>text</p>".as_bytes(), BrokenPipe);
    assert!(matches!(result, Err(Error::Io(_))));
}

proptest! {
    #[test]
    fn prop_plain_words_round_trip(words in prop::collection::vec("[a-zA-Z0-9]{1,10}", 1..10)) {
        let input = words.join("  \n ");
        prop_assert_eq!(convert_str(&input).unwrap(), words.join(" "));
    }
}
