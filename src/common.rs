//! Constants of the cache-file wire format.

/// Magic tag at the head of every cache file.
pub const MAGIC: [u8; 4] = *b"GRDL";

/// Extension appended to a word-list path to name its compiled cache file.
pub const CACHE_EXTENSION: &str = "grdl";

/// Number of letters representable in a child mask (`'A'..='Z'`).
pub const ALPHABET_LEN: u32 = 26;

/// Bits 0..26 of a packed node word: one presence bit per outgoing letter.
pub const CHILD_MASK: u32 = (1 << ALPHABET_LEN) - 1;

/// Bits 26..30 of a packed node word: reserved, zero in a well-formed file.
pub const RESERVED_MASK: u32 = 0xF << ALPHABET_LEN;

/// Bit 30 of a packed node word: runtime scratch bit for the visited overlay.
pub const VISITED_BIT: u32 = 1 << 30;

/// Bit 31 of a packed node word: a complete entry ends at this node.
pub const TERMINAL_BIT: u32 = 1 << 31;

/// Byte length of the file header (magic tag + root offset).
pub const HEADER_LEN: usize = 8;
