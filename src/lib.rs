//! # griddle
//!
//! A compact, immutable letter trie for grid word search. A word list is
//! compiled once into a dense binary cache, loaded into a single owned
//! buffer, and then queried millions of times per second: each query walks
//! the trie one uppercase letter at a time and reports whether the letters
//! seen so far are no entry, a prefix of an entry, or a complete entry.
//!
//! Nodes are never materialized; child links are rank-indexed byte offsets
//! into the buffer, so the whole structure costs one allocation. On top of
//! the read-only trie sits a per-node *visited* bit, a test-and-set mark a
//! solver uses to report each entry once per search pass and bulk-reset
//! afterward with [`Dictionary::clear_all`].
//!
//! ```no_run
//! use griddle::{Dictionary, MatchKind};
//!
//! let dict = Dictionary::open("words.txt.grdl")?;
//! assert_eq!(dict.match_word("CA"), MatchKind::Partial);
//! assert_eq!(dict.match_word("CAT"), MatchKind::Full);
//! # Ok::<(), griddle::GriddleError>(())
//! ```
#![deny(missing_docs)]

#[cfg(target_pointer_width = "16")]
compile_error!("`target_pointer_width` must be larger than or equal to 32");

pub mod common;
pub mod compiler;
pub mod dictionary;
pub mod errors;
mod utils;

#[cfg(test)]
mod test_utils;

pub use compiler::Compile;
pub use dictionary::{Cursor, Dictionary, MatchKind, NodeView};
pub use errors::{GriddleError, Result};
