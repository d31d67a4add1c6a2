/*!
## Rust Language Module

This Rust module provides the syntax of the klang language: the error
type, the verb vocabulary, and the character cursor the evaluator reads
expressions through.

*/

#[macro_use]
mod error;
mod cursor;
mod verb;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use verb::Dyad;
pub use verb::Monad;
pub use verb::is_operator;

pub type Column = std::ops::Range<usize>;

#[cfg(test)]
mod tests;
