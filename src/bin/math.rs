//! `math`: sub-command dispatch by handler and by nested parser.
//!
//! ```text
//! math add 2 3            # handler reading the parent's positionals
//! math mul 2 3            # nested parser binding #1 and #2
//! math mul --left=2 -r 3
//! ```
//!
//! Installed under the name `add` or `mul` (symlink), the sub-command is
//! taken from the program name instead.

use std::io::{self, Write};

use anyhow::{Context, Result};
use cliop::{ErrorKind, Parser, Slot};

fn print_result(value: i64) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", value).context("writing result")
}

fn add(_argv: &[String], parser: &Parser) -> i32 {
    let sum: i64 = parser
        .get_as::<Vec<i64>>("--")
        .unwrap_or_default()
        .into_iter()
        .sum();
    exit_code(print_result(sum))
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("math: {:#}", e);
            1
        }
    }
}

fn mul_parser() -> Parser {
    let left = Slot::new(0i64);
    let right = Slot::new(0i64);

    let mut parser = Parser::new();
    parser
        .catch_many(&[ErrorKind::OptionRequired, ErrorKind::ArgtypeUnmatch])
        .set_bound("-l #1 --left=?", "left operand", &left)
        .set_bound("-r #2 --right=?", "right operand", &right)
        .on_run(move |_, _| exit_code(print_result(left.get() * right.get())));
    parser
}

fn main() {
    let mut parser = Parser::new();
    parser
        .command_with("math", "basic math operation")
        .version("v0.3.0")
        .sub_command_only()
        .sub_command("add", "sum of all arguments", add)
        .sub_command_parser("mul", "product of two operands", mul_parser());

    let code = parser.feed_from_env();
    std::process::exit(if code == cliop::HELP_CODE { 0 } else { code });
}
