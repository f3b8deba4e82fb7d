//! # TI-BASIC Compile
//!
//! Converts a TI-BASIC program to the token bytes a TI-84 Plus runs,
//! wraps them in a TI-83F program file and emits the file as a C byte
//! array for firmware to embed.
//!
//! ```text
//! tibasic-compile --input LAUNCHER.8xp.txt --output launcher.h --name ANDYGPT
//! ```
//!
//! Only the tokens one launcher program needs are known. Anything else
//! in the source is dropped, not guessed at.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/tokens.rs"]
#[allow(non_snake_case)]
pub mod __Tokens;

#[path = "doc/file_format.rs"]
#[allow(non_snake_case)]
pub mod __File_Format;

pub mod emit;
pub mod encode;
pub mod error;
pub mod file;
pub mod lang;
pub mod term;

pub use error::{Error, Result};
