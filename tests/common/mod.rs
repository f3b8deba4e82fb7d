#![allow(dead_code)]
use std::path::PathBuf;
use tibasic::encode::EncoderChoice;
use tibasic::file::HEADER_LEN;
use tibasic::term::Args;

/// Tokens of a single line, without the line terminator.
pub fn token(s: &str) -> Vec<u8> {
    let mut v = tibasic::lang::tokenize_lines(Some(s));
    assert_eq!(v.pop(), Some(0x3F));
    v
}

/// The variable entry of a program file, checksum included.
pub fn entry(blob: &[u8]) -> &[u8] {
    &blob[HEADER_LEN..]
}

/// Recomputes the checksum of a program file after its entry was edited.
pub fn resum(blob: &mut [u8]) {
    let end = blob.len() - 2;
    let sum = tibasic::file::checksum(&blob[HEADER_LEN..end]);
    blob[end..].copy_from_slice(&sum.to_le_bytes());
}

pub fn args(dir: &tempfile::TempDir) -> Args {
    Args {
        input: dir.path().join("LAUNCHER.8xp.txt"),
        output: dir.path().join("launcher.h"),
        name: "ANDYGPT".to_string(),
        symbol: "__launcher_var".to_string(),
        encoder: EncoderChoice::Manual,
        python: "python3".to_string(),
        binary: None,
        list: false,
    }
}

pub fn path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
