mod code;
mod error;
mod source;
mod stream;

pub use code::{Code, EmptyLine, EMPTY_LINE};
pub use error::CodeError;
pub use source::Source;
pub use stream::Stream;
