//! Traversal state of a stepwise dictionary walk.

/// Strength of a match, in increasing order.
///
/// A node can end one entry and still continue into longer ones; terminality
/// decides the kind, so such a node reports [`Full`](MatchKind::Full).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum MatchKind {
    /// The key is neither an entry nor a prefix of one.
    NoMatch,
    /// The key is a proper prefix of at least one entry, but not itself
    /// an entry.
    Partial,
    /// The key is a complete entry.
    Full,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum State {
    Unstarted,
    At(u32),
    Exhausted,
}

/// A cursor into the trie, advanced one letter at a time by
/// [`Dictionary::next`](crate::Dictionary::next).
///
/// A fresh cursor is *unstarted*: the first `next` call implicitly starts it
/// at the root. After a failing step the cursor is *exhausted* and every
/// further step reports [`MatchKind::NoMatch`]. Cursors are plain copyable
/// values, so a solver can snapshot one before descending into a grid cell
/// and restore it on backtrack.
///
/// There is no way to build a cursor from a raw offset; cursors only ever
/// point at nodes reached from the root.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Cursor {
    state: State,
}

impl Cursor {
    /// Creates an unstarted cursor.
    pub const fn new() -> Self {
        Self {
            state: State::Unstarted,
        }
    }

    /// Offset of the node the cursor is positioned at, if any.
    #[inline(always)]
    pub(crate) const fn offset(&self) -> Option<u32> {
        match self.state {
            State::At(offset) => Some(offset),
            _ => None,
        }
    }

    #[inline(always)]
    pub(crate) const fn is_unstarted(&self) -> bool {
        matches!(self.state, State::Unstarted)
    }

    #[inline(always)]
    pub(crate) fn move_to(&mut self, offset: u32) {
        self.state = State::At(offset);
    }

    #[inline(always)]
    pub(crate) fn exhaust(&mut self) {
        self.state = State::Exhausted;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
