//! Statement builder — linearizes a JSON value into Python assignment lines.
//!
//! The builder performs a depth-first pre-order walk of the value tree. Every
//! container emits an initialization line before its children, so the lines
//! are executable top to bottom against a fresh interpreter:
//!
//! - **Objects**: `root['key'] = {}` followed by one line per entry, in the
//!   original JSON insertion order
//! - **Arrays**: `root['key'] = [None] * n` (sized so every slot is assigned
//!   by a later line), then one line per element in index order
//! - **Scalars**: `root['key'][0] = 'value'` with Python `repr`-style
//!   literal rendering
//!
//! Optional display limits shorten long keys and values through
//! [`crate::truncate`]; container placeholders are never shortened.
//!
//! # Example
//! ```
//! use pystmt_core::{convert, StatementOptions};
//! let lines = convert(r#"[1, {"x": 2}]"#, &StatementOptions::default()).unwrap();
//! // root = [None] * 2
//! // root[0] = 1
//! // root[1] = {}
//! // root[1]['x'] = 2
//! ```

use crate::error::Result;
use crate::truncate::truncate;
use serde_json::Value;

/// Configuration for statement building.
///
/// Length limits count visible characters and are applied through
/// [`crate::truncate`]; `None` disables truncation for that dimension.
#[derive(Debug, Clone)]
pub struct StatementOptions {
    /// Variable name the emitted statements assign into.
    pub root_name: String,
    /// Display limit for each rendered path segment.
    pub max_key_len: Option<usize>,
    /// Display limit for each rendered scalar value.
    pub max_value_len: Option<usize>,
}

impl Default for StatementOptions {
    fn default() -> Self {
        Self {
            root_name: "root".to_string(),
            max_key_len: None,
            max_value_len: None,
        }
    }
}

/// Convert a JSON string into Python assignment statements.
///
/// Parses the input as JSON, then walks the value tree to produce one
/// executable line per node. Returns an error if the input is not valid JSON.
pub fn convert(json: &str, opts: &StatementOptions) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(build_statements(&value, opts))
}

/// Build the assignment statements for an already-parsed JSON value.
///
/// Statements appear in pre-order: each container's initialization line comes
/// before the lines for its children. Running the lines in order in a Python
/// interpreter rebuilds the document under `opts.root_name`.
///
/// Documents whose root is "empty" in the Python sense (`{}`, `[]`, `''`,
/// `0`, `false`, `null`) produce a single `root = <literal>` line with no
/// path. All six empties share that one rule — legacy behavior, kept on
/// purpose even though it conflates distinct values; callers should not
/// treat the single-line form as an error.
///
/// The walk recurses once per nesting level, so documents nested deeper than
/// the thread's stack allows will abort. Convert untrusted input with a depth
/// cap upstream if that matters.
pub fn build_statements(value: &Value, opts: &StatementOptions) -> Vec<String> {
    if is_empty_value(value) {
        return vec![format!("{} = {}", opts.root_name, repr_scalar_or_empty(value))];
    }

    let mut lines = Vec::new();
    walk(value, &opts.root_name, opts, &mut lines);
    lines
}

/// Recursive pre-order walk. `path` is the fully rendered target expression
/// for the current node (`root['key1'][3]`), grown one bracket group per
/// level of descent.
///
/// Relies on `serde_json::Map` with the `preserve_order` feature to iterate
/// object entries in the original JSON insertion order (IndexMap, not
/// BTreeMap).
fn walk(value: &Value, path: &str, opts: &StatementOptions, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            lines.push(format!("{path} = {{}}"));
            for (key, child) in map {
                let segment = truncate(&repr_string(key), opts.max_key_len);
                walk(child, &format!("{path}[{segment}]"), opts, lines);
            }
        }
        Value::Array(arr) => {
            lines.push(format!("{path} = {}", array_placeholder(arr.len())));
            for (index, child) in arr.iter().enumerate() {
                let segment = truncate(&index.to_string(), opts.max_key_len);
                walk(child, &format!("{path}[{segment}]"), opts, lines);
            }
        }
        scalar => {
            lines.push(format!(
                "{path} = {}",
                render_scalar(scalar, opts.max_value_len)
            ));
        }
    }
}

/// Placeholder literal for an array initialization line. Sized so that the
/// number of `None` slots equals the number of element assignments that
/// follow; empty arrays get a plain `[]`.
fn array_placeholder(len: usize) -> String {
    if len == 0 {
        "[]".to_string()
    } else {
        format!("[None] * {len}")
    }
}

/// Render a scalar leaf with the value display limit applied.
///
/// For strings the limit is widened by 2: the quote pair is literal overhead,
/// and the configured limit measures visible content, not literal length.
fn render_scalar(value: &Value, limit: Option<usize>) -> String {
    let literal = repr_scalar_or_empty(value);
    let limit = if value.is_string() {
        limit.map(|n| n.saturating_add(2))
    } else {
        limit
    };
    truncate(&literal, limit)
}

/// Test whether a value is "empty" under Python truthiness: `None`, `False`,
/// numeric zero of either flavor, the empty string, and empty containers.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Python literal for a scalar, or the empty-container literal. Containers
/// only reach this function through the empty-document shortcut; non-empty
/// ones are dispatched by `walk` before rendering.
fn repr_scalar_or_empty(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => repr_string(s),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
    }
}

/// Format a JSON number as a Python literal.
///
/// Integers print in plain decimal. Floats use Rust's shortest-round-trip
/// digits with a trailing `.0` forced for whole values, which matches Python
/// `repr` output (`1.0`, `3.14`, `-0.0`).
fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => format!("{:?}", f),
        // Unrepresentable numbers can't come out of serde_json's default
        // parser; render the Python null literal rather than panic.
        None => "None".to_string(),
    }
}

/// Quote a string the way Python `repr` does.
///
/// Single quotes by default; double quotes when the content contains a single
/// quote but no double quote. Backslash, the active quote, and control
/// characters are escaped (`\n`, `\r`, `\t` by name, the rest as `\xNN`);
/// printable non-ASCII text is kept literal.
fn repr_string(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            // Remaining control characters (C0, DEL, C1) are not printable
            // and repr spells them as hex escapes.
            c if (c as u32) < 0x20 || (0x7f..=0xa0).contains(&(c as u32)) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
