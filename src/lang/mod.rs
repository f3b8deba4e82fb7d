/*!
# Rust Language Module

This Rust module converts TI-BASIC source text to calculator tokens
and back again.

*/

mod lex;
mod listing;
pub mod token;

pub use lex::tokenize;
pub use lex::tokenize_lines;
pub use listing::detokenize;
pub use token::Code;
pub use token::TokenTable;
