pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, line_at, lines_with_spans};
pub use slice::{preview, slice_to_string, truncate_chars};
pub use span::Span;
