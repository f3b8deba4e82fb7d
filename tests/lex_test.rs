mod common;
use common::token;
use tibasic::lang::{tokenize, tokenize_lines, TokenTable};

#[test]
fn test_every_entry() {
    TokenTable::with(|table| {
        for entry in table.entries() {
            if entry.pattern().trim().is_empty() {
                continue;
            }
            let mut expected = vec![];
            entry.code().write_to(&mut expected);
            assert_eq!(token(entry.pattern()), expected, "{:?}", entry.pattern());
        }
    });
}

#[test]
fn test_store() {
    assert_eq!(token("A->"), vec![0x41, 0x04]);
    assert_eq!(token("5->Z"), vec![0x35, 0x04, 0x5A]);
    assert_eq!(token("X->Y"), vec![0x58, 0x04, 0x59]);
}

#[test]
fn test_keywords() {
    assert_eq!(token("ClrHome"), vec![0xE1]);
    assert_eq!(token("Lbl A"), vec![0xD6, 0x41]);
    assert_eq!(token("Goto A"), vec![0xD7, 0x41]);
    assert_eq!(token("If K=21"), vec![0xCE, 0x4B, 0x6A, 0x32, 0x31]);
    assert_eq!(token("getKey->K"), vec![0xAD, 0x04, 0x4B]);
    assert_eq!(token("RecallPic Pic1"), vec![0x62, 0x60, 0x00]);
    assert_eq!(token("Send(Str1)"), vec![0xE5, 0xAA, 0x01, 0x11]);
}

#[test]
fn test_keyword_needs_space() {
    // Without its trailing space "Lbl" is just three letters.
    assert_eq!(token("Lbl"), vec![0x4C, 0x42, 0x4C]);
}

#[test]
fn test_menu() {
    assert_eq!(
        token("Menu(\"GO\",A)"),
        vec![0xE6, 0x2A, 0x47, 0x4F, 0x2A, 0x2B, 0x41, 0x11]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(token("{1,2}"), vec![0x08, 0x31, 0x2B, 0x32, 0x09]);
    assert_eq!(token("~1"), vec![0xB0, 0x31]);
    assert_eq!(token("1-2"), vec![0x31, 0x71, 0x32]);
    assert_eq!(token("A B"), vec![0x41, 0x29, 0x42]);
}

#[test]
fn test_colon_separates() {
    assert_eq!(token("ClrHome:Stop"), vec![0xE1, 0x3F, 0xD9]);
}

#[test]
fn test_lowercase() {
    assert_eq!(token("ab"), vec![0x41, 0x42]);
    // Lower case keywords are not keywords.
    assert_eq!(token("stop"), vec![0x53, 0x54, 0x4F, 0x50]);
}

#[test]
fn test_unknown_dropped() {
    assert_eq!(tokenize("#"), vec![0x3F]);
    assert_eq!(token("1#2"), vec![0x31, 0x32]);
    assert_eq!(token("\t1"), vec![0x31]);
}

#[test]
fn test_blank_lines() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize("\n\n"), vec![]);
    assert_eq!(tokenize("  \t\n"), vec![]);
    assert_eq!(tokenize("1\n\n   \n2"), vec![0x31, 0x3F, 0x32, 0x3F]);
}

#[test]
fn test_one_terminator_per_line() {
    let lines = ["Stop", ":", "#", "Disp 1:"];
    let v = tokenize_lines(lines.iter().copied());
    assert_eq!(
        v,
        vec![0xD9, 0x3F, 0x3F, 0x3F, 0x3F, 0xDE, 0x31, 0x3F, 0x3F]
    );
}

#[test]
fn test_crlf() {
    assert_eq!(tokenize("1\r\n2\r\n"), vec![0x31, 0x3F, 0x32, 0x3F]);
}
