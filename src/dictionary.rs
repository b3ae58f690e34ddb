//! Dictionary for grid word search.
pub(crate) mod cursor;
pub(crate) mod node;
pub(crate) mod trie;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::common::{ALPHABET_LEN, CACHE_EXTENSION};
use crate::compiler::Compile;
use crate::errors::{GriddleError, Result};
use crate::utils;

pub use cursor::{Cursor, MatchKind};
pub use node::NodeView;
use trie::EncodedTrie;

/// A compiled word list, loaded once and queried in place.
///
/// Lookups ([`next`](Self::next), [`match_word`](Self::match_word)) take
/// `&self` and are freely reentrant. The visited overlay
/// ([`mark_visited`](Self::mark_visited), [`clear_all`](Self::clear_all) and
/// friends) mutates bits inside the shared buffer and therefore takes
/// `&mut self`; the borrow checker enforces the intended phased protocol of
/// one search pass at a time, followed by a reset.
#[derive(Debug)]
pub struct Dictionary {
    trie: EncodedTrie,
}

impl Dictionary {
    /// Loads an existing cache file.
    ///
    /// # Errors
    ///
    /// [`GriddleError::StdIo`] when the file cannot be read,
    /// [`GriddleError::Format`] when it is not a dictionary cache, and
    /// [`GriddleError::Corrupt`] when its node region is inconsistent.
    pub fn open<P>(cache_path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let data = std::fs::read(cache_path)?;
        Ok(Self {
            trie: EncodedTrie::from_vec(data)?,
        })
    }

    /// Opens the cache compiled from the word list at `source_path`,
    /// producing it first through `compiler` when it does not exist yet.
    ///
    /// The cache lives next to the source, named by appending
    /// `.grdl` (see [`cache_path`](Self::cache_path)).
    ///
    /// # Errors
    ///
    /// [`GriddleError::Build`] when the compiler fails; otherwise as in
    /// [`open`](Self::open).
    pub fn open_with<P, C>(source_path: P, compiler: &C) -> Result<Self>
    where
        P: AsRef<Path>,
        C: Compile,
    {
        let source_path = source_path.as_ref();
        let cache_path = Self::cache_path(source_path);
        if !cache_path.exists() {
            compiler.compile(source_path, &cache_path)?;
        }
        Self::open(cache_path)
    }

    /// Loads a cache image from a reader.
    ///
    /// # Errors
    ///
    /// As in [`open`](Self::open).
    pub fn from_reader<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut data = vec![];
        rdr.read_to_end(&mut data)?;
        Ok(Self {
            trie: EncodedTrie::from_vec(data)?,
        })
    }

    /// Path of the cache file compiled from the given word list.
    pub fn cache_path<P>(source_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        let mut path = source_path.as_ref().as_os_str().to_os_string();
        path.push(".");
        path.push(CACHE_EXTENSION);
        PathBuf::from(path)
    }

    /// Byte length of the loaded cache image.
    pub fn num_bytes(&self) -> usize {
        self.trie.len()
    }

    /// View of the root node.
    pub fn root(&self) -> NodeView {
        NodeView::new(&self.trie, self.trie.root())
    }

    /// Advances `cursor` along the edge for `letter` and reports the match
    /// strength of the node reached.
    ///
    /// `letter` must be an uppercase ASCII letter; anything else is a caller
    /// bug and trips a debug assertion. An unstarted cursor starts at the
    /// root. When the current node has no edge for `letter`, the cursor is
    /// exhausted and [`MatchKind::NoMatch`] is reported, as it is for every
    /// later step on the same cursor.
    #[inline]
    pub fn next(&self, cursor: &mut Cursor, letter: u8) -> MatchKind {
        let index = u32::from(letter.wrapping_sub(b'A'));
        debug_assert!(
            index < ALPHABET_LEN,
            "letter must be an uppercase ASCII letter: {letter:#x}"
        );
        let offset = match cursor.offset() {
            Some(offset) => offset,
            None if cursor.is_unstarted() => self.trie.root(),
            None => return MatchKind::NoMatch,
        };
        if index >= ALPHABET_LEN {
            cursor.exhaust();
            return MatchKind::NoMatch;
        }
        let word = self.trie.read_u32(offset);
        if !utils::has_child(word, index) {
            cursor.exhaust();
            return MatchKind::NoMatch;
        }
        let node = NodeView::new(&self.trie, offset);
        let child = node.child_offset(utils::child_rank(word, index));
        cursor.move_to(child);
        if NodeView::new(&self.trie, child).is_terminal() {
            MatchKind::Full
        } else {
            MatchKind::Partial
        }
    }

    /// Matches a whole key from the root.
    ///
    /// Reports [`MatchKind::NoMatch`] at the first absent edge; otherwise
    /// the match strength of the final letter. The empty key reports
    /// [`MatchKind::NoMatch`].
    pub fn match_word(&self, key: &str) -> MatchKind {
        let mut cursor = Cursor::new();
        self.match_word_with(key, &mut cursor)
    }

    /// Matches `key` starting from `cursor`, leaving the cursor at the node
    /// reached so the caller can extend the matched prefix later without
    /// restarting from the root. This is the hot path of incremental grid
    /// search.
    pub fn match_word_with(&self, key: &str, cursor: &mut Cursor) -> MatchKind {
        let mut kind = MatchKind::NoMatch;
        for letter in key.bytes() {
            kind = self.next(cursor, letter);
            if kind == MatchKind::NoMatch {
                return MatchKind::NoMatch;
            }
        }
        kind
    }

    /// View of the node the cursor is positioned at, if any.
    pub fn node(&self, cursor: &Cursor) -> Option<NodeView> {
        cursor.offset().map(|offset| NodeView::new(&self.trie, offset))
    }

    /// The canonical spelling bound to the cursor's node, the text to report
    /// for a [`MatchKind::Full`] match.
    ///
    /// # Errors
    ///
    /// [`GriddleError::NotTerminal`] when the cursor is not positioned at a
    /// terminal node.
    pub fn bound_string(&self, cursor: &Cursor) -> Result<&str> {
        match self.node(cursor) {
            Some(node) => node.bound_string(),
            None => Err(GriddleError::not_terminal(
                "cursor is not positioned at a node",
            )),
        }
    }

    /// Sets the visited mark on the cursor's node and reports whether it was
    /// already set.
    ///
    /// The mark is a property of the node, not of the cursor: two cursors
    /// reaching the same node through different paths observe each other's
    /// mark. A cursor not positioned at a node is a caller bug; in release
    /// builds it reports `false` without marking anything.
    pub fn mark_visited(&mut self, cursor: &Cursor) -> bool {
        debug_assert!(
            cursor.offset().is_some(),
            "cursor is not positioned at a node"
        );
        match cursor.offset() {
            Some(offset) => self.trie.mark_visited(offset),
            None => false,
        }
    }

    /// Clears the visited mark on exactly the cursor's node.
    pub fn clear_visited(&mut self, cursor: &Cursor) {
        if let Some(offset) = cursor.offset() {
            self.trie.clear_visited(offset);
        }
    }

    /// Clears the visited mark on the cursor's node and, depth first, on
    /// every node reachable from it. A cursor not positioned at a node is a
    /// no-op.
    pub fn clear_subtree(&mut self, cursor: &Cursor) {
        if let Some(offset) = cursor.offset() {
            self.trie.clear_subtree(offset);
        }
    }

    /// Clears every visited mark in the dictionary, the prescribed reset
    /// between independent search passes.
    pub fn clear_all(&mut self) {
        let root = self.trie.root();
        self.trie.clear_subtree(root);
    }
}
