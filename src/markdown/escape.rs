//! Pure markdown escaping for text content.

/// Normalize whitespace and escape Markdown emphasis characters in text.
///
/// Runs of ASCII space, tab, carriage return, line feed and vertical tab
/// collapse to a single space. Non-breaking spaces are kept as they are.
/// Then a backslash is written before:
/// - Backslash: `\`
/// - Emphasis: `*`, `_`
/// - Strikethrough: `~~` (the pair, not a lone `~`)
///
/// Raw content (code, preformatted blocks) must not go through this function.
///
/// # Examples
///
/// ```
/// use html2md::markdown::escape_text;
///
/// assert_eq!(escape_text("*bold*"), "\\*bold\\*");
/// assert_eq!(escape_text("a \n\t b"), "a b");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\r' | '\n' | '\x0B' => {
                while matches!(chars.peek(), Some(' ' | '\t' | '\r' | '\n' | '\x0B')) {
                    chars.next();
                }
                result.push(' ');
            }
            '\\' | '*' | '_' => {
                result.push('\\');
                result.push(c);
            }
            '~' if chars.peek() == Some(&'~') => {
                chars.next();
                result.push_str("\\~~");
            }
            _ => result.push(c),
        }
    }

    result
}
