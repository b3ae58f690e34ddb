use crate::common::CHILD_MASK;

pub trait FromU32 {
    fn from_u32(src: u32) -> Self;
}

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl FromU32 for usize {
    #[inline(always)]
    fn from_u32(src: u32) -> Self {
        // Since the pointer width is guaranteed to be 32 or 64,
        // the following process always succeeds.
        unsafe { Self::try_from(src).unwrap_unchecked() }
    }
}

/// Number of outgoing edges encoded in a packed node word.
#[inline(always)]
pub const fn child_count(word: u32) -> u32 {
    (word & CHILD_MASK).count_ones()
}

/// Checks whether the edge for letter index `index` is present.
#[inline(always)]
pub const fn has_child(word: u32, index: u32) -> bool {
    word & CHILD_MASK & (1 << index) != 0
}

/// Rank of letter index `index` among the set bits of the child mask,
/// i.e. the slot of its child in the offset table.
#[inline(always)]
pub const fn child_rank(word: u32, index: u32) -> u32 {
    (word & CHILD_MASK & ((1 << index) - 1)).count_ones()
}
