//! # Syntax Kinds
//!
//! Every delimiter of the block property syntax lives here; the parser
//! never hardcodes `^`, `[` or `:` itself.
//!
//! ```text
//! some text ^task-1 [status: todo, priority: high]
//!           ^^^^^^^ BlockRef
//!                   ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ PropertyList
//! ```

/// The block-reference marker and its identifier.
pub struct BlockRef;

impl BlockRef {
    pub const MARKER: u8 = b'^';

    /// Identifier bytes: ASCII letters, digits, `-` and `_`.
    pub fn is_id_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
    }
}

/// The bracketed `key: value` list following a block reference.
pub struct PropertyList;

impl PropertyList {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const KEY_VALUE: char = ':';
    /// Pair separators. Line breaks separate pairs too; a `\r` left over
    /// from `\r\n` is removed when the token is trimmed.
    pub const SEPARATORS: [char; 3] = [',', ';', '\n'];

    /// Horizontal whitespace allowed between the identifier and `[`.
    pub fn is_gap(b: u8) -> bool {
        b == b' ' || b == b'\t'
    }
}
