//! `argview`: shows how a command line is classified.
//!
//! Prints the raw argv, the positional arguments left after binding, every
//! received option, the defaults of options that were not given, and the
//! values of the repeatable `--expr` option.
//!
//! ```text
//! argview -d -v2 --expr=a -e b in.txt out.txt -- --literal
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use cliop::constants::{display_level, set_display_level, HELP_CODE};
use cliop::{OptionAttr, Parser, Slot};

fn set_options(parser: &mut Parser, quiet: &Slot<bool>) {
    parser
        .flag('d', "debug", "enable debug mode")
        .option('v', "verbose", "verbose level")
        .option_with(
            '\0',
            "default",
            "option that has default val",
            "val",
            OptionAttr::ARGUMENT,
        )
        .flag_bound('q', "quiet", "only print parsed values", quiet)
        .set("-D --Debug", "same as flag -d")
        .set("-V --Verbose=", "same as option -v")
        .set("--Default= [Val]", "option that has default val")
        .set("-u $USER --user=", "user can be from environment")
        .set("-e --expr=+", "expression, may be repeated")
        .set("-i #1 --input=", "input file name")
        .set("-o #2 --output=", "output file name");
}

/// Writes the report to `out`. Below display level 2 only the parsed values
/// are shown.
fn report<W: Write>(out: &mut W, parser: &Parser, argv: &[String]) -> Result<()> {
    let verbose = display_level() >= 2;

    if verbose {
        writeln!(out, "raw input arguments:")?;
        writeln!(out, "\targc = {}", argv.len())?;
        for (i, arg) in argv.iter().enumerate() {
            writeln!(out, "\targv[{}] = {}", i, arg)?;
        }
    }

    writeln!(out, "position arguments:")?;
    for (i, arg) in parser.argv().iter().enumerate() {
        writeln!(out, "\t{}\t{}", arg, parser.get_pos(i + 1))?;
    }

    writeln!(out, "option arguments:")?;
    for (key, value) in parser.args() {
        let shown = parser.get(key).replace('\0', ", ");
        writeln!(out, "\t{:<15}:\t{}\t{}", key, value.replace('\0', ", "), shown)?;
    }

    if verbose {
        writeln!(out, "option default argument:")?;
        for name in ["default", "Default", "user"] {
            if !parser.has(name) {
                writeln!(out, "\t{} = {}", name, parser.get(name))?;
            }
        }
    }

    if let Some(expr) = parser.get_as::<Vec<String>>("expr") {
        writeln!(out, "option allowed repeated has multiple value")?;
        writeln!(out, "\texpr = {}", expr.join(", "))?;
    }
    out.flush().context("flushing stdout")
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let quiet = Slot::new(false);

    let mut parser = Parser::new();
    parser.command_with("argview", "Examine what command line arguments received.");
    set_options(&mut parser, &quiet);

    let code = parser.feed(&argv);
    if code == HELP_CODE {
        std::process::exit(0);
    }
    if code != 0 {
        std::process::exit(code);
    }
    if quiet.get() {
        set_display_level(1);
    }

    let mut out = io::stdout().lock();
    if let Err(e) = report(&mut out, &parser, &argv) {
        eprintln!("argview: {:#}", e);
        std::process::exit(1);
    }
}
