pub const SIGNATURE: &[u8; 8] = b"**TI83F*";
pub const SUB_SIGNATURE: &[u8; 3] = &[0x1A, 0x0A, 0x00];
pub const COMMENT: &str = "Created by TI-84 GPT Hack";
pub const COMMENT_LEN: usize = 42;
pub const HEADER_LEN: usize = 55;

const COMMENT_START: usize = 11;

/// Fixed file header. The comment is cut at `COMMENT_LEN` bytes and
/// everything after it is zero.
pub fn header(comment: &str) -> [u8; HEADER_LEN] {
    let mut h = [0u8; HEADER_LEN];
    h[..SIGNATURE.len()].copy_from_slice(SIGNATURE);
    h[SIGNATURE.len()..COMMENT_START].copy_from_slice(SUB_SIGNATURE);
    let comment = comment.as_bytes();
    let len = comment.len().min(COMMENT_LEN);
    h[COMMENT_START..COMMENT_START + len].copy_from_slice(&comment[..len]);
    h
}

/// The comment text of a header, up to its first null.
pub fn comment(h: &[u8; HEADER_LEN]) -> String {
    let field = &h[COMMENT_START..COMMENT_START + COMMENT_LEN];
    let end = field.iter().position(|&b| b == 0).unwrap_or(COMMENT_LEN);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

pub fn is_signed(h: &[u8; HEADER_LEN]) -> bool {
    h.starts_with(SIGNATURE) && &h[SIGNATURE.len()..COMMENT_START] == SUB_SIGNATURE
}
