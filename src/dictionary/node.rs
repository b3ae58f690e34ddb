//! Zero-copy view of a single trie node.

use crate::common::{CHILD_MASK, TERMINAL_BIT, VISITED_BIT};
use crate::dictionary::trie::EncodedTrie;
use crate::errors::{GriddleError, Result};
use crate::utils;

/// Interpretation of a byte offset into the cache buffer as a trie node.
///
/// Views are handed out by [`Dictionary::node`](crate::Dictionary::node) and
/// never constructed from arbitrary offsets; every offset a view can hold was
/// validated when the buffer was loaded.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    trie: &'a EncodedTrie,
    offset: u32,
}

impl<'a> NodeView<'a> {
    #[inline(always)]
    pub(crate) const fn new(trie: &'a EncodedTrie, offset: u32) -> Self {
        Self { trie, offset }
    }

    #[inline(always)]
    fn word(&self) -> u32 {
        self.trie.read_u32(self.offset)
    }

    /// Presence mask of outgoing edges: bit `i` is set iff an edge exists
    /// for the letter `'A' + i`.
    #[inline(always)]
    pub fn child_mask(&self) -> u32 {
        self.word() & CHILD_MASK
    }

    /// Whether a complete entry ends at this node.
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        self.word() & TERMINAL_BIT != 0
    }

    /// Whether this node has been marked by the visited overlay since the
    /// last clear.
    #[inline(always)]
    pub fn is_visited(&self) -> bool {
        self.word() & VISITED_BIT != 0
    }

    /// Number of outgoing edges.
    #[inline(always)]
    pub fn child_count(&self) -> u32 {
        utils::child_count(self.word())
    }

    /// Offset of the child in slot `rank` of the offset table, for `rank`
    /// below [`child_count`](Self::child_count).
    #[inline(always)]
    pub fn child_offset(&self, rank: u32) -> u32 {
        debug_assert!(rank < self.child_count());
        self.trie.read_u32(self.offset + 4 + 4 * rank)
    }

    /// The canonical spelling bound to this node.
    ///
    /// # Errors
    ///
    /// [`GriddleError::NotTerminal`] when no entry ends at this node.
    pub fn bound_string(&self) -> Result<&'a str> {
        if !self.is_terminal() {
            return Err(GriddleError::not_terminal(format!(
                "no string bound to node at offset {}",
                self.offset
            )));
        }
        let tail = self.offset + 4 + 4 * self.child_count();
        let len = u32::from(self.trie.byte(tail));
        let bytes = self.trie.bytes(tail + 1, len);
        // Verified to be UTF-8 when the buffer was loaded.
        Ok(unsafe { std::str::from_utf8_unchecked(bytes) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MAGIC;

    /// Root at offset 8 with edges for C and T; the C child is terminal
    /// with "CA" bound to it.
    fn sample() -> EncodedTrie {
        let mut data = MAGIC.to_vec();
        data.extend_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(&((1u32 << 2) | (1 << 19)).to_le_bytes());
        data.extend_from_slice(&20u32.to_le_bytes());
        data.extend_from_slice(&27u32.to_le_bytes());
        data.extend_from_slice(&TERMINAL_BIT.to_le_bytes());
        data.push(2);
        data.extend_from_slice(b"CA");
        data.extend_from_slice(&0u32.to_le_bytes());
        EncodedTrie::from_vec(data).unwrap()
    }

    #[test]
    fn test_child_table() {
        let trie = sample();
        let root = NodeView::new(&trie, trie.root());
        assert_eq!(root.child_mask(), (1 << 2) | (1 << 19));
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.child_offset(0), 20);
        assert_eq!(root.child_offset(1), 27);
        assert!(!root.is_terminal());
        assert!(!root.is_visited());
    }

    #[test]
    fn test_bound_string() {
        let trie = sample();
        let node = NodeView::new(&trie, 20);
        assert!(node.is_terminal());
        assert_eq!(node.bound_string().unwrap(), "CA");
    }

    #[test]
    fn test_bound_string_at_non_terminal() {
        let trie = sample();
        let root = NodeView::new(&trie, trie.root());
        let e = root.bound_string().unwrap_err();
        assert!(matches!(e, GriddleError::NotTerminal(_)));
    }
}
