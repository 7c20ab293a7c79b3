use crate::Stream;

/// Anything that can render itself onto a [`Stream`].
pub trait Code {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  );
}

/// A blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyLine;

pub const EMPTY_LINE: EmptyLine = EmptyLine;

impl Code for EmptyLine {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    stream.line_feed();
  }
}

impl<T: Code + ?Sized> Code for Box<T> {
  fn act(
    &self,
    stream: &mut Stream<'_>,
  ) {
    (**self).act(stream);
  }
}
