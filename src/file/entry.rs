use crate::error::{Error, Result};

pub const PROGRAM_TYPE: u8 = 0x05;
pub const NAME_LEN: usize = 8;
/// Bytes of the entry ahead of the token length word, counting the
/// leading data section length itself.
pub const ENTRY_HEADER_LEN: usize = 17;
/// Largest token buffer whose lengths still fit the 16-bit fields.
pub const MAX_TOKENS: usize = u16::MAX as usize - ENTRY_HEADER_LEN - 2;

/// Upper-cased, null-padded, cut to `NAME_LEN`. Non-ASCII characters
/// have no place in a calculator name and are skipped.
pub fn name_field(name: &str) -> [u8; NAME_LEN] {
    let mut field = [0u8; NAME_LEN];
    let bytes = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_uppercase() as u8);
    for (slot, b) in field.iter_mut().zip(bytes) {
        *slot = b;
    }
    field
}

/// Unsigned byte sum, kept to 16 bits.
pub fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b)))
}

/// The variable entry for one program, checksum last. More than
/// `MAX_TOKENS` tokens would overflow the length fields.
pub fn entry(name: &str, tokens: &[u8]) -> Result<Vec<u8>> {
    if tokens.len() > MAX_TOKENS {
        return Err(Error::TooLarge { size: tokens.len() });
    }
    let data_len = (tokens.len() + 2) as u16;
    let mut e = Vec::with_capacity(ENTRY_HEADER_LEN + tokens.len() + 4);
    e.extend_from_slice(&(data_len + ENTRY_HEADER_LEN as u16).to_le_bytes());
    e.extend_from_slice(&data_len.to_le_bytes());
    e.push(PROGRAM_TYPE);
    e.extend_from_slice(&name_field(name));
    e.push(0); // version
    e.push(0); // archived
    e.extend_from_slice(&data_len.to_le_bytes());
    debug_assert_eq!(e.len(), ENTRY_HEADER_LEN);
    e.extend_from_slice(&(tokens.len() as u16).to_le_bytes());
    e.extend_from_slice(tokens);
    let sum = checksum(&e);
    e.extend_from_slice(&sum.to_le_bytes());
    Ok(e)
}
