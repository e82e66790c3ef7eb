//! Display truncation for long keys and values.
//!
//! Long rendered literals are shortened around a `...` marker, keeping the
//! head and tail of the text for context. Limits count characters, not
//! bytes, so multi-byte text never splits inside a code point.

/// The elision marker inserted where characters were removed.
const ELLIPSIS: &str = "...";

/// Shorten `text` to roughly `limit` characters, keeping a prefix and suffix
/// around a `...` marker.
///
/// - `None` means unlimited: the input is returned unchanged.
/// - Text of `limit + 3` characters or fewer is returned unchanged — the
///   marker itself is 3 characters wide, so truncating would not make the
///   output any shorter.
/// - Otherwise the result is the first `limit - limit / 2` characters, the
///   marker, and the last `limit / 2` characters. For odd limits the prefix
///   is one character longer than the suffix.
///
/// ```rust
/// use pystmt_core::truncate;
///
/// assert_eq!(truncate("abcdefgh", Some(4)), "ab...gh");
/// assert_eq!(truncate("hello", Some(0)), "...");
/// assert_eq!(truncate("hello", None), "hello");
/// ```
pub fn truncate(text: &str, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return text.to_string();
    };

    let len = text.chars().count();
    if len <= limit + 3 {
        return text.to_string();
    }

    let retlen = len.min(limit);
    let tail = retlen / 2;
    let head = retlen - tail;

    let mut out = String::with_capacity(text.len().min(retlen * 4) + ELLIPSIS.len());
    out.extend(text.chars().take(head));
    out.push_str(ELLIPSIS);
    out.extend(text.chars().skip(len - tail));
    out
}
