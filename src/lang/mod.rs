/*!
# VEE Language Module

This Rust module provides lexical analysis and line parsing of the VEE
token language.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod term;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use term::AssignOp;
pub use term::Flow;
pub use term::Term;
pub use term::{CARRIAGE_RETURN_STR, INDENT_STR};

pub mod ast;
