use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("FILE NOT FOUND; {path}")]
    FileNotFound { path: String },

    #[error("DISK I/O ERROR; {0}")]
    Io(#[from] std::io::Error),

    #[error("BAD FILE SIGNATURE")]
    BadSignature,

    #[error("INPUT PAST END; NEED {needed} BYTES, HAVE {have}")]
    Truncated { needed: usize, have: usize },

    #[error("CHECKSUM MISMATCH; STORED {stored:04X}, COMPUTED {computed:04X}")]
    ChecksumMismatch { stored: u16, computed: u16 },

    #[error("BAD SECTION LENGTH; STORED {stored}, EXPECTED {expected}")]
    SectionLength { stored: usize, expected: usize },

    #[error("BAD DATA LENGTH; {first} THEN {second}")]
    DataLength { first: usize, second: usize },

    #[error("BAD TOKEN LENGTH; {tokens} TOKENS IN {data} DATA BYTES")]
    TokenLength { data: usize, tokens: usize },

    #[error("TRAILING BYTES; {extra} AFTER CHECKSUM")]
    TrailingBytes { extra: usize },

    #[error("PROGRAM TOO LARGE; {size} TOKEN BYTES")]
    TooLarge { size: usize },

    #[error("ENCODER FAILED; {0}")]
    Delegate(String),
}

impl Error {
    /// Maps a failed open of `path` to `FileNotFound` when that is the cause.
    pub fn open(path: &std::path::Path, error: std::io::Error) -> Error {
        match error.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(error),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
