/*!
## Rust Encode Module

Two ways to turn source into bytes for the calculator. `Manual` runs the
tokenizer in this crate and wraps the result in a program file. `Tivars`
hands the source to the Python `tivars` package and returns its
calc-data. Which one runs is decided once, by `select`.

*/

use crate::error::{Error, Result};
use crate::{file, lang};
use log::{debug, warn};
use std::io::Write;
use std::process::{Command, Stdio};

/// Encoder output.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoded {
    /// A complete program file.
    Container(Vec<u8>),
    /// Token length word followed by the tokens, with no file around them.
    CalcData(Vec<u8>),
}

impl Encoded {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Encoded::Container(b) | Encoded::CalcData(b) => b,
        }
    }

    /// The raw token buffer inside the output.
    pub fn tokens(&self) -> Result<Vec<u8>> {
        match self {
            Encoded::Container(b) => Ok(file::Program::parse(b)?.tokens().to_vec()),
            Encoded::CalcData(b) => Ok(b.get(2..).unwrap_or_default().to_vec()),
        }
    }
}

pub trait Encoder {
    fn name(&self) -> &'static str;
    fn encode(&self, program: &str, source: &str) -> Result<Encoded>;
}

#[derive(Debug, Default)]
pub struct Manual;

impl Encoder for Manual {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn encode(&self, program: &str, source: &str) -> Result<Encoded> {
        let tokens = lang::tokenize(source);
        let blob = file::build(program, &tokens)?;
        let check = file::Program::parse(&blob)?;
        debug!(
            "{} token bytes, {} file bytes, checksum {:04X}",
            tokens.len(),
            blob.len(),
            check.checksum()
        );
        Ok(Encoded::Container(blob))
    }
}

const TIVARS_SCRIPT: &str = "\
import sys
from tivars import TIProgram
from tivars.models import TI_84P
prog = TIProgram(name=sys.argv[1])
prog.load_string(sys.stdin.read(), model=TI_84P)
sys.stdout.buffer.write(prog.calc_data)
";

#[derive(Debug)]
pub struct Tivars {
    python: String,
}

impl Tivars {
    pub fn new(python: &str) -> Tivars {
        Tivars {
            python: python.to_string(),
        }
    }

    /// True when `python` runs and can import `tivars`.
    pub fn available(python: &str) -> bool {
        Command::new(python)
            .args(&["-c", "import tivars"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl Encoder for Tivars {
    fn name(&self) -> &'static str {
        "tivars"
    }

    fn encode(&self, program: &str, source: &str) -> Result<Encoded> {
        let mut child = Command::new(&self.python)
            .args(&["-c", TIVARS_SCRIPT, program])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Delegate(stderr.trim().to_string()));
        }
        debug!("tivars returned {} bytes", output.stdout.len());
        Ok(Encoded::CalcData(output.stdout))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EncoderChoice {
    /// Use tivars when it is installed, otherwise the built-in tokenizer.
    Auto,
    Manual,
    Tivars,
}

/// Picks the encoder for this run.
pub fn select(choice: EncoderChoice, python: &str) -> Box<dyn Encoder> {
    match choice {
        EncoderChoice::Manual => Box::new(Manual),
        EncoderChoice::Tivars => Box::new(Tivars::new(python)),
        EncoderChoice::Auto => {
            if Tivars::available(python) {
                Box::new(Tivars::new(python))
            } else {
                warn!("tivars not installed, using manual tokenization");
                Box::new(Manual)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual() {
        let encoded = Manual.encode("AB", "1").unwrap();
        assert_eq!(encoded.tokens().unwrap(), vec![0x31, 0x3F]);
        let blob = file::build("AB", &[0x31, 0x3F]).unwrap();
        assert_eq!(encoded.bytes(), blob.as_slice());
    }

    #[test]
    fn test_calc_data_tokens() {
        let encoded = Encoded::CalcData(vec![2, 0, 0x31, 0x3F]);
        assert_eq!(encoded.tokens().unwrap(), vec![0x31, 0x3F]);
        assert!(Encoded::CalcData(vec![]).tokens().unwrap().is_empty());
    }

    #[test]
    fn test_missing_python() {
        assert!(!Tivars::available("no-such-python-for-tibasic"));
        let encoder = select(EncoderChoice::Auto, "no-such-python-for-tibasic");
        assert_eq!(encoder.name(), "manual");
        assert_eq!(select(EncoderChoice::Tivars, "python3").name(), "tivars");
    }

    #[test]
    fn test_delegate_spawn_fails() {
        let encoder = Tivars::new("no-such-python-for-tibasic");
        assert!(matches!(encoder.encode("A", "1"), Err(Error::Io(_))));
    }
}
