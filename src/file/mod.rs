/*!
## Rust File Module

This Rust module writes and reads the TI-83F program file that carries
a token buffer to the calculator.

*/

use crate::error::Result;

mod entry;
mod header;
mod program;

pub use entry::{checksum, name_field, ENTRY_HEADER_LEN, MAX_TOKENS, NAME_LEN, PROGRAM_TYPE};
pub use header::{COMMENT, COMMENT_LEN, HEADER_LEN, SIGNATURE, SUB_SIGNATURE};
pub use program::Program;

/// Wraps `tokens` as the program `name`: header, entry, checksum.
/// Fails with `TooLarge` past `MAX_TOKENS` tokens.
pub fn build(name: &str, tokens: &[u8]) -> Result<Vec<u8>> {
    let mut blob = header::header(COMMENT).to_vec();
    blob.extend(entry::entry(name, tokens)?);
    Ok(blob)
}
