use super::entry::{checksum, ENTRY_HEADER_LEN, NAME_LEN};
use super::header::{self, HEADER_LEN};
use crate::error::{Error, Result};
use std::convert::TryInto;

/// A program file read back from its bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    comment: String,
    kind: u8,
    name: String,
    tokens: Vec<u8>,
    checksum: u16,
}

impl Program {
    /// Reads a whole program file. Fails on a foreign signature, on
    /// length fields that disagree with each other, on a blob shorter or
    /// longer than they claim, or on a checksum that does not match the
    /// entry.
    pub fn parse(blob: &[u8]) -> Result<Program> {
        let mut r = Reader { bytes: blob, pos: 0 };
        let head: &[u8; HEADER_LEN] = r
            .take(HEADER_LEN)?
            .try_into()
            .map_err(|_| Error::BadSignature)?;
        if !header::is_signed(head) {
            return Err(Error::BadSignature);
        }
        let comment = header::comment(head);

        let start = r.pos;
        let section_len = r.u16()? as usize;
        let data_len = r.u16()? as usize;
        if section_len != data_len + ENTRY_HEADER_LEN {
            return Err(Error::SectionLength {
                stored: section_len,
                expected: data_len + ENTRY_HEADER_LEN,
            });
        }
        let kind = r.u8()?;
        let name = r.take(NAME_LEN)?;
        let name_end = name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        let name = String::from_utf8_lossy(&name[..name_end]).into_owned();
        let _version = r.u8()?;
        let _archived = r.u8()?;
        let data_len_again = r.u16()? as usize;
        if data_len_again != data_len {
            return Err(Error::DataLength {
                first: data_len,
                second: data_len_again,
            });
        }
        debug_assert_eq!(r.pos - start, ENTRY_HEADER_LEN);
        let token_len = r.u16()? as usize;
        if data_len != token_len + 2 {
            return Err(Error::TokenLength {
                data: data_len,
                tokens: token_len,
            });
        }
        let tokens = r.take(token_len)?.to_vec();
        let computed = checksum(&blob[start..r.pos]);
        let stored = r.u16()?;
        if stored != computed {
            return Err(Error::ChecksumMismatch { stored, computed });
        }
        if r.pos != blob.len() {
            return Err(Error::TrailingBytes {
                extra: blob.len() - r.pos,
            });
        }
        Ok(Program {
            comment,
            kind,
            name,
            tokens,
            checksum: stored,
        })
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[u8] {
        &self.tokens
    }

    pub fn checksum(&self) -> u16 {
        self.checksum
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos + n;
        match self.bytes.get(self.pos..end) {
            Some(slice) => {
                self.pos = end;
                Ok(slice)
            }
            None => Err(Error::Truncated {
                needed: end,
                have: self.bytes.len(),
            }),
        }
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::build;

    #[test]
    fn test_parse_built() {
        let blob = build("launch", &[0xDE, 0x31, 0x3F]).unwrap();
        let program = Program::parse(&blob).unwrap();
        assert_eq!(program.name(), "LAUNCH");
        assert_eq!(program.kind(), 0x05);
        assert_eq!(program.tokens(), &[0xDE, 0x31, 0x3F]);
        assert_eq!(program.comment(), header::COMMENT);
    }

    #[test]
    fn test_short_blob() {
        let blob = build("A", &[0x31, 0x3F]).unwrap();
        match Program::parse(&blob[..blob.len() - 1]) {
            Err(Error::Truncated { needed, have }) => {
                assert_eq!(needed, blob.len());
                assert_eq!(have, blob.len() - 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Program::parse(&blob[..10]),
            Err(Error::Truncated { .. })
        ));
    }
}
