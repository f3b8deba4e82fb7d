use super::token::*;
use log::debug;
use std::collections::HashMap;

/// Renders token bytes back to source text.
///
/// Only the launcher subset is known. Any other byte is printed as
/// `[?XX]` rather than guessed at.
pub fn detokenize(bytes: &[u8]) -> String {
    TokenTable::with(|table| {
        let reverse = Reverse::new(table);
        let mut s = String::new();
        let mut unknown = 0;
        let mut i = 0;
        while i < bytes.len() {
            if let Some(text) = bytes
                .get(i..i + 2)
                .and_then(|pair| reverse.get(Code::Double(pair[0], pair[1])))
            {
                s.push_str(text);
                i += 2;
                continue;
            }
            match reverse.get(Code::Single(bytes[i])) {
                Some(text) => s.push_str(text),
                None => {
                    s.push_str(&format!("[?{:02X}]", bytes[i]));
                    unknown += 1;
                }
            }
            i += 1;
        }
        if unknown > 0 {
            debug!("{} unsupported token bytes in listing", unknown);
        }
        s
    })
}

struct Reverse<'a> {
    map: HashMap<Code, &'a str>,
}

impl<'a> Reverse<'a> {
    fn new(table: &'a TokenTable) -> Reverse<'a> {
        let mut map = HashMap::new();
        for entry in table.entries().iter().filter(|e| !e.is_store()) {
            map.entry(entry.code()).or_insert_with(|| entry.pattern());
        }
        Reverse { map }
    }

    fn get(&self, code: Code) -> Option<&'a str> {
        self.map.get(&code).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_is_newline() {
        assert_eq!(detokenize(&[0x31, TERMINATOR]), "1\n");
    }

    #[test]
    fn test_store_splits() {
        assert_eq!(detokenize(&[0x31, STORE, 0x41]), "1->A");
        assert_eq!(detokenize(&[0x41, STORE]), "A->");
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detokenize(&[0xBB, 0x31]), "[?BB]1");
        assert_eq!(detokenize(&[0xAA]), "[?AA]");
    }
}
