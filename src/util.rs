//! Input decoding helpers.

use std::borrow::Cow;

/// Decode raw document bytes to a string.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (superset of ISO-8859-1, common in legacy HTML)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    log::debug!("input is not valid UTF-8, decoding as windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
