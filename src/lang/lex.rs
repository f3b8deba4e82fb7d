use super::token::*;
use log::trace;

/// Tokenizes a whole source file, one line at a time.
/// Line terminators (`\n`, `\r\n`) separate lines and are not tokenized.
pub fn tokenize(source: &str) -> Vec<u8> {
    tokenize_lines(source.lines())
}

/// Tokenizes each non-blank line and ends it with a terminator.
/// Blank lines contribute nothing. Never fails: characters with no
/// token and no fallback are dropped.
pub fn tokenize_lines<'a, I>(lines: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a str>,
{
    TokenTable::with(|table| {
        let mut out = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            LineLexer { table, line }.lex(&mut out);
            out.push(TERMINATOR);
        }
        out
    })
}

fn fallback(ch: char) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(LETTER_BASE + (ch as u8 - b'A')),
        'a'..='z' => Some(LETTER_BASE + (ch as u8 - b'a')),
        '0'..='9' => Some(DIGIT_BASE + (ch as u8 - b'0')),
        '\n' | ':' => Some(TERMINATOR),
        _ => None,
    }
}

struct LineLexer<'a> {
    table: &'a TokenTable,
    line: &'a str,
}

impl<'a> LineLexer<'a> {
    fn lex(&self, out: &mut Vec<u8>) {
        let mut pos = 0;
        while let Some(rest) = self.line.get(pos..) {
            let ch = match rest.chars().next() {
                Some(ch) => ch,
                None => break,
            };
            if let Some(entry) = self.table.longest_match(rest) {
                entry.code().write_to(out);
                pos += entry.pattern().len();
                continue;
            }
            match fallback(ch) {
                Some(code) => out.push(code),
                None => trace!("dropped {:?} at column {}", ch, pos),
            }
            pos += ch.len_utf8();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback() {
        assert_eq!(fallback('a'), Some(0x41));
        assert_eq!(fallback('z'), Some(0x5A));
        assert_eq!(fallback('7'), Some(0x37));
        assert_eq!(fallback(':'), Some(TERMINATOR));
        assert_eq!(fallback('\n'), Some(TERMINATOR));
        assert_eq!(fallback('#'), None);
        assert_eq!(fallback('É'), None);
    }

    #[test]
    fn test_lowercase_folds() {
        assert_eq!(tokenize("abc"), tokenize("ABC"));
    }

    #[test]
    fn test_multibyte_dropped() {
        assert_eq!(tokenize("π1"), vec![0x31, TERMINATOR]);
    }
}
