use std::collections::HashMap;

/// Statement terminator. Ends every line and stands in for `:`.
pub const TERMINATOR: u8 = 0x3F;
/// The store arrow `->`.
pub const STORE: u8 = 0x04;
/// Code of the letter `A`; the other letters follow in order.
pub const LETTER_BASE: u8 = 0x41;
/// Code of the digit `0`; the other digits follow in order.
pub const DIGIT_BASE: u8 = 0x30;

thread_local!(
    static TOKEN_TABLE: TokenTable = TokenTable::new();
);

/// The byte form of one token.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Code {
    Single(u8),
    Double(u8, u8),
}

impl Code {
    pub fn len(&self) -> usize {
        match self {
            Code::Single(_) => 1,
            Code::Double(_, _) => 2,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        match *self {
            Code::Single(a) => out.push(a),
            Code::Double(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Code::Single(a) => write!(f, "{:02X}", a),
            Code::Double(a, b) => write!(f, "{:02X} {:02X}", a, b),
        }
    }
}

/// Keywords, slots, operators and punctuation of the launcher program.
/// Order matters only for the reverse lookup: the first pattern
/// listed for a code is the one a listing prints.
const KEYWORDS: &[(&str, Code)] = &[
    // Screen state
    ("ClrHome", Code::Single(0xE1)),
    ("ClrDraw", Code::Single(0x85)),
    ("GridOff", Code::Single(0x74)),
    ("AxesOff", Code::Single(0x63)),
    ("RecallPic ", Code::Single(0x62)),
    // Control flow
    ("Lbl ", Code::Single(0xD6)),
    ("Goto ", Code::Single(0xD7)),
    ("Menu(", Code::Single(0xE6)),
    ("If ", Code::Single(0xCE)),
    ("Then", Code::Single(0xCF)),
    ("End", Code::Single(0xD4)),
    ("Repeat ", Code::Single(0xD3)),
    ("Stop", Code::Single(0xD9)),
    ("Pause", Code::Single(0xD8)),
    // I/O
    ("Disp ", Code::Single(0xDE)),
    ("Output(", Code::Single(0xE7)),
    ("Input ", Code::Single(0xDC)),
    ("Prompt ", Code::Single(0xDD)),
    ("Send(", Code::Single(0xE5)),
    ("Get(", Code::Single(0xE2)),
    ("getKey", Code::Single(0xAD)),
    // Slots
    ("Str0", Code::Double(0xAA, 0x00)),
    ("Str1", Code::Double(0xAA, 0x01)),
    ("Str2", Code::Double(0xAA, 0x02)),
    ("Pic1", Code::Double(0x60, 0x00)),
    // Operators
    ("max(", Code::Single(0xB9)),
    ("->", Code::Single(STORE)),
    ("+", Code::Single(0x70)),
    ("-", Code::Single(0x71)),
    ("*", Code::Single(0x82)),
    ("/", Code::Single(0x83)),
    ("=", Code::Single(0x6A)),
    ("<", Code::Single(0x6B)),
    (">", Code::Single(0x6C)),
    // Punctuation
    ("\n", Code::Single(TERMINATOR)),
    (":", Code::Single(TERMINATOR)),
    ("~", Code::Single(0xB0)),
    ("\"", Code::Single(0x2A)),
    (",", Code::Single(0x2B)),
    ("(", Code::Single(0x10)),
    (")", Code::Single(0x11)),
    ("{", Code::Single(0x08)),
    ("}", Code::Single(0x09)),
    (" ", Code::Single(0x29)),
];

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

#[derive(Debug, Clone)]
pub struct Entry {
    pattern: String,
    code: Code,
}

impl Entry {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn code(&self) -> Code {
        self.code
    }

    /// True for the `X->` entries that fuse a letter with the store arrow.
    pub fn is_store(&self) -> bool {
        matches!(self.code, Code::Double(_, STORE))
    }
}

#[derive(Debug)]
pub struct TokenTable {
    entries: Vec<Entry>,
    by_first: HashMap<char, Vec<usize>>,
}

impl TokenTable {
    pub fn new() -> TokenTable {
        let mut entries: Vec<Entry> = KEYWORDS
            .iter()
            .map(|(pattern, code)| Entry {
                pattern: pattern.to_string(),
                code: *code,
            })
            .collect();
        for (ch, code) in LETTERS.chars().zip(LETTER_BASE..) {
            entries.push(Entry {
                pattern: format!("{}->", ch),
                code: Code::Double(code, STORE),
            });
        }
        for (ch, code) in DIGITS.chars().zip(DIGIT_BASE..) {
            entries.push(Entry {
                pattern: ch.to_string(),
                code: Code::Single(code),
            });
        }
        for (ch, code) in LETTERS.chars().zip(LETTER_BASE..) {
            entries.push(Entry {
                pattern: ch.to_string(),
                code: Code::Single(code),
            });
        }

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if let Some(ch) = entry.pattern.chars().next() {
                by_first.entry(ch).or_default().push(index);
            }
        }
        // Stable sort keeps declaration order among equal lengths.
        for candidates in by_first.values_mut() {
            candidates.sort_by_key(|&i| std::cmp::Reverse(entries[i].pattern.chars().count()));
        }
        TokenTable { entries, by_first }
    }

    /// Runs `f` with this thread's shared table.
    pub fn with<F: FnOnce(&TokenTable) -> R, R>(f: F) -> R {
        TOKEN_TABLE.with(|table| f(table))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Longest pattern that is a prefix of `rest`.
    pub fn longest_match(&self, rest: &str) -> Option<&Entry> {
        let first = rest.chars().next()?;
        self.by_first
            .get(&first)?
            .iter()
            .map(|&i| &self.entries[i])
            .find(|entry| rest.starts_with(entry.pattern.as_str()))
    }

    /// Exact pattern lookup.
    pub fn get(&self, pattern: &str) -> Option<Code> {
        self.longest_match(pattern)
            .filter(|entry| entry.pattern == pattern)
            .map(|entry| entry.code)
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        TokenTable::new()
    }
}
