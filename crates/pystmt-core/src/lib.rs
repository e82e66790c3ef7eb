//! # pystmt-core
//!
//! Converts a JSON document into a sequence of **executable Python assignment
//! statements** that rebuild the document when run in order against a fresh
//! root variable.
//!
//! Each container gets an initialization line (`{}` for objects, a sized
//! `[None] * n` placeholder for arrays), followed by one path-qualified
//! assignment per child. The output is handy for turning an opaque JSON blob
//! into something you can paste into a REPL and poke at line by line.
//!
//! ## Quick start
//!
//! ```rust
//! use pystmt_core::{convert, StatementOptions};
//!
//! let json = r#"{"name":"Alice","scores":[95,87]}"#;
//! let lines = convert(json, &StatementOptions::default()).unwrap();
//! assert_eq!(lines, vec![
//!     "root = {}",
//!     "root['name'] = 'Alice'",
//!     "root['scores'] = [None] * 2",
//!     "root['scores'][0] = 95",
//!     "root['scores'][1] = 87",
//! ]);
//! ```
//!
//! ## Modules
//!
//! - [`builder`] — JSON value → statement lines (the tree walk)
//! - [`truncate`] — head+tail-preserving display truncation for long keys/values
//! - [`error`] — error types for the parsing entry point

pub mod builder;
pub mod error;
pub mod truncate;

pub use builder::{build_statements, convert, StatementOptions};
pub use error::PystmtError;
pub use truncate::truncate;
