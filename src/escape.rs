//! Character-entity escaping for the four reserved CQ-code characters.
//!
//! | literal | escaped |
//! |---------|---------|
//! | `&`     | `&amp;` |
//! | `,`     | `&#44;` |
//! | `[`     | `&#91;` |
//! | `]`     | `&#93;` |
//!
//! [`escape`] and [`unescape`] are inverses: `unescape(&escape(s)) == s` for every `s`.
//! `escape` is not idempotent; escaping twice needs two `unescape` passes to recover.

/// Escape `&`, `,`, `[` and `]`.
///
/// `&` goes first so the entities added afterwards are not re-escaped.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace(',', "&#44;")
        .replace('[', "&#91;")
        .replace(']', "&#93;")
}

/// Reverse of [`escape`]. `&amp;` goes last so `&amp;#44;` decodes to the literal `&#44;`.
pub fn unescape(s: &str) -> String {
    s.replace("&#44;", ",")
        .replace("&#91;", "[")
        .replace("&#93;", "]")
        .replace("&amp;", "&")
}

/// Escape only `[` and `]`, leaving `,` and `&` literal.
///
/// Enough to stop user text from being read as a directive (CQ-code injection)
/// where commas must stay readable.
pub fn escape_brackets(s: &str) -> String {
    s.replace('[', "&#91;").replace(']', "&#93;")
}
