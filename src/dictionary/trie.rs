//! Owned buffer holding the encoded trie.

use hashbrown::HashMap;

use crate::common::{HEADER_LEN, MAGIC, RESERVED_MASK, TERMINAL_BIT, VISITED_BIT};
use crate::errors::{GriddleError, Result};
use crate::utils::{self, FromU32};

/// Colors of the load-time validation walk.
const OPEN: u8 = 1;
const DONE: u8 = 2;

/// The raw cache bytes plus the parsed header.
///
/// The buffer is read-only after loading, except for the per-node visited
/// bits toggled through [`mark_visited`](EncodedTrie::mark_visited) and the
/// `clear_*` operations. It is never resized or reallocated, so node offsets
/// taken from it stay valid for its whole lifetime.
#[derive(Debug)]
pub(crate) struct EncodedTrie {
    data: Vec<u8>,
    root: u32,
}

impl EncodedTrie {
    /// Parses and validates a whole cache file.
    ///
    /// # Errors
    ///
    /// [`GriddleError::Format`] when the buffer cannot hold a header or the
    /// magic tag does not match; [`GriddleError::Corrupt`] when the header or
    /// the node region is structurally inconsistent.
    pub(crate) fn from_vec(data: Vec<u8>) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(GriddleError::format(format!(
                "file too short to hold a header: {} bytes",
                data.len()
            )));
        }
        if data[..4] != MAGIC {
            return Err(GriddleError::format("bad magic tag"));
        }
        let root = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        if usize::from_u32(root) >= data.len() {
            return Err(GriddleError::corrupt(format!(
                "root offset {root} exceeds buffer length {}",
                data.len()
            )));
        }
        let mut trie = Self { data, root };
        trie.validate_nodes()?;
        Ok(trie)
    }

    /// Walks every node reachable from the root, checking that each packed
    /// word, child table, and terminal tail lies in bounds, that reserved
    /// bits are zero, and that the node region is acyclic. Visited bits left
    /// over in the file are scrubbed along the way, so a freshly loaded
    /// dictionary always starts from an all-unvisited state.
    ///
    /// Shared subtrees are descended once thanks to the color map, so the
    /// walk costs O(distinct nodes) even for heavily suffix-shared files.
    fn validate_nodes(&mut self) -> Result<()> {
        let mut colors = HashMap::new();
        self.check_node(self.root)?;
        colors.insert(self.root, OPEN);
        // (node offset, next child slot) frames of an iterative DFS.
        let mut stack = vec![(self.root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (offset, slot) = *frame;
            let word = self.read_u32(offset);
            if slot == utils::child_count(word) {
                colors.insert(offset, DONE);
                stack.pop();
                continue;
            }
            frame.1 += 1;
            let child = self.read_u32(offset + 4 + 4 * slot);
            match colors.get(&child) {
                Some(&OPEN) => {
                    return Err(GriddleError::corrupt(format!(
                        "cycle through node at offset {child}"
                    )));
                }
                Some(_) => {}
                None => {
                    self.check_node(child)?;
                    colors.insert(child, OPEN);
                    stack.push((child, 0));
                }
            }
        }
        Ok(())
    }

    /// Checks the node at `offset` in isolation and scrubs its visited bit.
    fn check_node(&mut self, offset: u32) -> Result<()> {
        let len = self.data.len();
        let start = usize::from_u32(offset);
        if start >= len || len - start < 4 {
            return Err(GriddleError::corrupt(format!(
                "node word at offset {offset} exceeds buffer length {len}"
            )));
        }
        let word = self.read_u32(offset);
        if word & RESERVED_MASK != 0 {
            return Err(GriddleError::corrupt(format!(
                "reserved bits set in node at offset {offset}"
            )));
        }
        if word & VISITED_BIT != 0 {
            self.write_u32(offset, word & !VISITED_BIT);
        }
        let table_end = start + 4 + 4 * usize::from_u32(utils::child_count(word));
        if table_end > len {
            return Err(GriddleError::corrupt(format!(
                "child table of node at offset {offset} exceeds buffer length {len}"
            )));
        }
        if word & TERMINAL_BIT != 0 {
            if table_end >= len {
                return Err(GriddleError::corrupt(format!(
                    "missing bound string at terminal node at offset {offset}"
                )));
            }
            let n = usize::from(self.data[table_end]);
            if table_end + 1 + n > len {
                return Err(GriddleError::corrupt(format!(
                    "bound string of node at offset {offset} exceeds buffer length {len}"
                )));
            }
            if std::str::from_utf8(&self.data[table_end + 1..table_end + 1 + n]).is_err() {
                return Err(GriddleError::corrupt(format!(
                    "bound string of node at offset {offset} is not UTF-8"
                )));
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Offset of the root node.
    #[inline(always)]
    pub(crate) const fn root(&self) -> u32 {
        self.root
    }

    /// Reads the little-endian u32 at `offset`.
    ///
    /// Offsets handed to this function were bounds-checked at load time.
    #[inline(always)]
    pub(crate) fn read_u32(&self, offset: u32) -> u32 {
        let i = usize::from_u32(offset);
        u32::from_le_bytes([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    #[inline(always)]
    fn write_u32(&mut self, offset: u32, value: u32) {
        let i = usize::from_u32(offset);
        self.data[i..i + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[inline(always)]
    pub(crate) fn byte(&self, offset: u32) -> u8 {
        self.data[usize::from_u32(offset)]
    }

    #[inline(always)]
    pub(crate) fn bytes(&self, offset: u32, len: u32) -> &[u8] {
        let i = usize::from_u32(offset);
        &self.data[i..i + usize::from_u32(len)]
    }

    /// Sets the visited bit of the node at `offset` and reports its
    /// previous value.
    pub(crate) fn mark_visited(&mut self, offset: u32) -> bool {
        let word = self.read_u32(offset);
        self.write_u32(offset, word | VISITED_BIT);
        word & VISITED_BIT != 0
    }

    /// Clears the visited bit of the node at `offset` only.
    pub(crate) fn clear_visited(&mut self, offset: u32) {
        let word = self.read_u32(offset);
        self.write_u32(offset, word & !VISITED_BIT);
    }

    /// Clears the visited bit of the node at `offset` and of every node
    /// reachable from it. Children shared by several parents are cleared
    /// once per incoming edge; the clear is idempotent, so only the walk
    /// cost depends on the amount of sharing.
    pub(crate) fn clear_subtree(&mut self, offset: u32) {
        let mut stack = vec![offset];
        while let Some(offset) = stack.pop() {
            self.clear_visited(offset);
            let word = self.read_u32(offset);
            for slot in 0..utils::child_count(word) {
                stack.push(self.read_u32(offset + 4 + 4 * slot));
            }
        }
    }
}
