use super::rope::Span;

/// A byte cursor over a text slice that reports absolute document offsets.
///
/// The slice may be a whole document, a single line or a visible range; the
/// `base` offset translates local indices back into document coordinates.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The slice being scanned.
    pub s: &'a str,
    /// Document offset of `s[0]`.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Consumes `b` if it is the current byte.
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds and returns the consumed span.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> Span {
        let start = self.pos();
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        Span {
            start,
            end: self.pos(),
        }
    }

    /// Returns the text of an absolute span that lies inside this slice.
    ///
    /// Callers only build spans that start and end on ASCII delimiters, so
    /// the local indices are always char boundaries.
    pub fn text(&self, sp: Span) -> &'a str {
        &self.s[sp.start - self.base..sp.end - self.base]
    }
}
