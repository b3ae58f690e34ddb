//! Contract of the word-list compiler collaborator.

use std::path::Path;

use crate::errors::Result;

/// Compiles a newline-delimited list of uppercase words into a dictionary
/// cache file.
///
/// The compiler is a collaborator of
/// [`Dictionary::open_with`](crate::Dictionary::open_with): given a word-list
/// path and an output path, it must either produce a file in the format
/// documented in [`common`](crate::common) or fail. How it builds the trie
/// (and whether it shares suffixes between entries) is its own business; the
/// loader validates the result either way.
pub trait Compile {
    /// Produces the cache file at `output` from the word list at `source`.
    ///
    /// # Errors
    ///
    /// [`GriddleError::Build`](crate::errors::GriddleError::Build) when no
    /// usable cache file could be produced.
    fn compile(&self, source: &Path, output: &Path) -> Result<()>;
}
