//! # TI-BASIC Compile
//!
//! Turns a TI-BASIC launcher program into a C header.
//!

fn main() {
    tibasic::term::main();
}
