//! Separator escaping for flat record fields
//!
//! Values joined with a separator escape that separator and the escape
//! character itself with a backslash. Text without either character is
//! written unchanged.

const ESCAPE: char = '\\';

/// Escape `separator` and the escape character in `text`
pub(crate) fn escape(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ESCAPE || c == separator {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Reverse [`escape`]
///
/// A trailing lone escape character is kept as-is.
pub(crate) fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            out.push(chars.next().unwrap_or(ESCAPE));
        } else {
            out.push(c);
        }
    }
    out
}

/// Split at the first unescaped `separator`
///
/// Returns the unescaped head and the untouched remainder, or `None` when
/// the text holds no unescaped separator.
pub(crate) fn split_first(text: &str, separator: char) -> Option<(String, &str)> {
    let mut head = String::new();
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == ESCAPE {
            head.push(chars.next().map_or(ESCAPE, |(_, next)| next));
        } else if c == separator {
            return Some((head, &text[i + c.len_utf8()..]));
        } else {
            head.push(c);
        }
    }
    None
}

/// Split at every unescaped `separator`, unescaping each part
pub(crate) fn split_all(text: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some((head, tail)) = split_first(rest, separator) {
        parts.push(head);
        rest = tail;
    }
    parts.push(unescape(rest));
    parts
}

/// Escape every part and join them with `separator`
pub(crate) fn join<S: AsRef<str>>(parts: &[S], separator: char) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&escape(part.as_ref(), separator));
    }
    out
}
