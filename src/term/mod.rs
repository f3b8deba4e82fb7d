/*!
## Rust Terminal Module

Command line front end. Reads a TI-BASIC source file, encodes it and
writes the C header that firmware builds embed.

*/

extern crate ansi_term;
use crate::emit::c_header;
use crate::encode::{select, EncoderChoice};
use crate::error::{Error, Result};
use crate::lang::detokenize;
use ansi_term::Style;
use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// Compile a TI-BASIC program to a C header
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// TI-BASIC source file
    #[clap(long, default_value = "programs/LAUNCHER.8xp.txt")]
    pub input: PathBuf,

    /// C header to write
    #[clap(long, default_value = "esp32/launcher.h")]
    pub output: PathBuf,

    /// Program name on the calculator
    #[clap(long, default_value = "ANDYGPT")]
    pub name: String,

    /// C identifier of the byte array
    #[clap(long, default_value = "__launcher_var")]
    pub symbol: String,

    /// Which encoder to run
    #[clap(long, value_enum, default_value = "auto")]
    pub encoder: EncoderChoice,

    /// Python interpreter used to look for tivars
    #[clap(long, default_value = "python3")]
    pub python: String,

    /// Also write the encoded bytes to this file
    #[clap(long)]
    pub binary: Option<PathBuf>,

    /// Print the token listing of the result
    #[clap(long)]
    pub list: bool,
}

pub fn main() {
    let env = env_logger::Env::default()
        .filter_or("TIBASIC_LOG", "info")
        .write_style_or("TIBASIC_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

/// Runs one conversion. Nothing is written unless every step succeeds.
pub fn run(args: &Args) -> Result<usize> {
    let source = fs::read_to_string(&args.input).map_err(|e| Error::open(&args.input, e))?;
    let encoder = select(args.encoder, &args.python);
    info!("encoding {} with {}", args.input.display(), encoder.name());
    let encoded = encoder.encode(&args.name, &source)?;

    if args.list {
        print!("{}", detokenize(&encoded.tokens()?));
    }

    let data = encoded.bytes();
    let header = c_header(data, &args.symbol, &args.name);
    fs::write(&args.output, header)?;
    if let Some(binary) = &args.binary {
        if let Err(error) = fs::write(binary, data) {
            if fs::remove_file(&args.output).is_err() {
                warn!("could not remove {}", args.output.display());
            }
            return Err(error.into());
        }
    }
    info!("Generated {} ({} bytes)", args.output.display(), data.len());
    Ok(data.len())
}
