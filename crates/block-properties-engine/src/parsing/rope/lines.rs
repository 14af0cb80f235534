use xi_rope::Rope;

use super::{slice::slice_to_string, span::Span};

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Zero-based line number.
    pub number: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The raw line text, terminator included.
    pub text: String,
}

impl LineRef {
    /// The line text without its `\n` / `\r\n` terminator.
    pub fn content(&self) -> &str {
        let t = self.text.strip_suffix('\n').unwrap_or(&self.text);
        t.strip_suffix('\r').unwrap_or(t)
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters so that consecutive
/// spans tile the whole rope.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(number, line)| {
        let start = offset;
        offset += line.len();
        LineRef {
            number,
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Returns the line containing byte offset `pos`, or `None` past the end.
///
/// A position equal to the rope length belongs to the last line, matching a
/// caret placed after the final character.
pub fn line_at(rope: &Rope, pos: usize) -> Option<LineRef> {
    if pos > rope.len() {
        return None;
    }
    let number = rope.line_of_offset(pos);
    let start = rope.offset_of_line(number);
    let end = rope.offset_of_line(number + 1).max(start);
    let span = Span { start, end };
    Some(LineRef {
        number,
        span,
        text: slice_to_string(rope, span),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_rope() {
        let rope = Rope::from("one\ntwo\r\nthree");
        let lines: Vec<_> = lines_with_spans(&rope).collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].span, Span::new(0, 4));
        assert_eq!(lines[1].span, Span::new(4, 9));
        assert_eq!(lines[2].span, Span::new(9, 14));
        assert_eq!(lines[1].content(), "two");
        assert_eq!(lines[2].number, 2);
    }

    #[test]
    fn line_at_middle_of_document() {
        let rope = Rope::from("alpha\nbeta ^b [k: v]\ngamma");
        let line = line_at(&rope, 10).unwrap();
        assert_eq!(line.number, 1);
        assert_eq!(line.content(), "beta ^b [k: v]");
        assert_eq!(line.span.start, 6);
    }

    #[test]
    fn line_at_end_of_document() {
        let rope = Rope::from("alpha\nbeta");
        let line = line_at(&rope, 10).unwrap();
        assert_eq!(line.number, 1);
        assert_eq!(line.content(), "beta");
        assert!(line_at(&rope, 11).is_none());
    }

    #[test]
    fn line_at_newline_belongs_to_its_line() {
        let rope = Rope::from("ab\ncd");
        let line = line_at(&rope, 2).unwrap();
        assert_eq!(line.number, 0);
        assert_eq!(line.content(), "ab");
    }
}
