/*!
# Rust Language Module

This Rust module provides line classification, lexical analysis and
parsing of qu source lines.

*/

/// Zero-based index of a source line.
pub type LineNumber = usize;
/// Byte offset within a source line.
pub type Column = usize;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use token::Word;

pub mod ast;

#[cfg(test)]
mod tests;
