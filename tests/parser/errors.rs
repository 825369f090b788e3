// Catch policy: which conditions fail a feed, and how the failure persists.

use cliop::{Error, ErrorKind, Parser, HELP_CODE};

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

fn context(p: &Parser) -> String {
    p.last_error().map(|e| e.context().to_owned()).unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn permissive_by_default() {
    let mut p = Parser::new();
    p.flag('d', "debug", "")
        .flag('d', "again", "")
        .flag('1', "digit", "")
        .option('\0', "debug", "")
        .required('r', "req", "");
    let code = p.feed_args(&args(&["--undefined", "x", "-d", "--dangling"]));
    assert_eq!(code, 0);
    assert!(!p.has_error());
    assert_eq!(p.error_code(), 0);
    assert!(!p.has("req"));
    assert!(p.has("undefined"));
}

#[test]
fn codes_are_distinct_and_above_help() {
    let mut codes: Vec<i32> = ErrorKind::ALL.iter().map(|k| k.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), ErrorKind::ALL.len());
    assert!(codes.iter().all(|&c| c > HELP_CODE));
    assert_eq!(ErrorKind::from_code(ErrorKind::FlagRedefine.code()), Some(ErrorKind::FlagRedefine));
    assert_eq!(ErrorKind::from_code(0), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Registration checks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn option_invalid_when_caught() {
    let mut p = Parser::new();
    p.catch(ErrorKind::OptionInvalid).flag('\0', "a=b", "");
    assert_eq!(p.error_code(), ErrorKind::OptionInvalid.code());
    assert_eq!(context(&p), "a=b");
    assert!(p.options().is_empty());
    let mut q = Parser::new();
    q.catch(ErrorKind::OptionInvalid).flag('x', "", "");
    assert_eq!(q.error_code(), ErrorKind::OptionInvalid.code());
}

#[test]
fn option_redefine_when_caught() {
    let mut p = Parser::new();
    p.catch(ErrorKind::OptionRedefine)
        .option('a', "name", "")
        .flag('b', "name", "");
    assert_eq!(p.error_code(), ErrorKind::OptionRedefine.code());
    assert_eq!(context(&p), "name");
    assert_eq!(p.options().len(), 1);
}

#[test]
fn flag_checks_when_caught() {
    let mut p = Parser::new();
    p.catch_many(&[ErrorKind::FlagInvalid, ErrorKind::FlagRedefine]);
    p.flag('a', "alpha", "").flag('a', "again", "");
    assert_eq!(p.error_code(), ErrorKind::FlagRedefine.code());
    assert_eq!(context(&p), "a");

    let mut q = Parser::new();
    q.catch_many(&[ErrorKind::FlagInvalid, ErrorKind::FlagRedefine]);
    q.flag('7', "seven", "");
    assert_eq!(q.error_code(), ErrorKind::FlagInvalid.code());
    assert_eq!(context(&q), "char%55");
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse-time checks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn required_option_missing() {
    let mut p = Parser::new();
    p.catch(ErrorKind::OptionRequired).required('n', "name", "");
    assert_eq!(p.feed_args(&args(&["x"])), ErrorKind::OptionRequired.code());
    assert_eq!(context(&p), "name");
}

#[test]
fn required_not_satisfied_by_default_value() {
    let mut p = Parser::new();
    p.catch(ErrorKind::OptionRequired).set("--name=? [anon]", "");
    assert_eq!(p.feed_args::<&str>(&[]), ErrorKind::OptionRequired.code());
    p.clear_error();
    assert_eq!(p.feed_args(&args(&["--name=me"])), 0);
}

#[test]
fn option_only_rejects_undefined() {
    let mut p = Parser::new();
    p.option_only().flag('d', "debug", "");
    assert_eq!(p.feed_args(&args(&["-d"])), 0);
    assert_eq!(p.feed_args(&args(&["-dz"])), ErrorKind::OptionUnknown.code());
    assert_eq!(context(&p), "z");
}

#[test]
fn incomplete_option_at_end() {
    let mut p = Parser::new();
    p.catch(ErrorKind::OptionIncomplete).option('o', "output", "");
    assert_eq!(p.feed_args(&args(&["-o"])), ErrorKind::OptionIncomplete.code());
    assert_eq!(context(&p), "output");
}

#[test]
fn argument_looking_like_option() {
    let mut p = Parser::new();
    p.catch(ErrorKind::ArgumentInvalid).option('o', "output", "");
    assert_eq!(p.feed_args(&args(&["-o", "-x"])), ErrorKind::ArgumentInvalid.code());
    assert_eq!(context(&p), "-x");
    assert!(!p.has("output"));
}

#[test]
fn argument_looking_like_option_accepted_by_default() {
    let mut p = Parser::new();
    p.option('o', "output", "");
    assert_eq!(p.feed_args(&args(&["-o", "-x"])), 0);
    assert_eq!(p.get("output"), "-x");
}

// ─────────────────────────────────────────────────────────────────────────────
// Catch sets
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn catch_all_then_ignore() {
    let mut p = Parser::new();
    p.catch_all().ignore_many(&[ErrorKind::ConfigUnreadable, ErrorKind::OptionUnknown]);
    assert!(p.is_catch(ErrorKind::OptionRequired));
    assert!(!p.is_catch(ErrorKind::OptionUnknown));
    assert_eq!(p.feed_args(&args(&["--free", "x"])), 0);

    p.ignore(ErrorKind::OptionRequired).catch(ErrorKind::OptionUnknown);
    assert!(!p.is_catch(ErrorKind::OptionRequired));
    assert_eq!(p.feed_args(&args(&["--free", "x"])), ErrorKind::OptionUnknown.code());
}

#[test]
fn catch_all_reports_missing_default_config() {
    let mut p = Parser::new();
    p.catch_all();
    assert_eq!(p.feed_args::<&str>(&[]), ErrorKind::ConfigUnreadable.code());
    assert!(context(&p).ends_with(".ini"));
}

#[test]
fn pending_error_persists_until_cleared() {
    let mut p = Parser::new();
    p.catch(ErrorKind::OptionIncomplete);
    let code = ErrorKind::OptionIncomplete.code();
    assert_eq!(p.feed_args(&args(&["--out"])), code);
    assert_eq!(p.feed_args(&args(&["fine"])), code);
    assert_eq!(p.feed(&["tool", "fine"]), code);
    p.clear_error();
    assert_eq!(p.error_code(), 0);
    assert_eq!(p.feed_args(&args(&["fine"])), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn message_joins_tip_and_context() {
    let err = Error::new(ErrorKind::OptionRequired, "name");
    assert_eq!(err.to_string(), "required option absent: name");
    assert_eq!(Error::new(ErrorKind::CommandUnknown, "").to_string(), "unsupported command");
    assert_eq!(err.kind().to_string(), "required option absent");
}

#[test]
fn set_error_by_code() {
    let mut p = Parser::new();
    p.set_error(ErrorKind::OptionUnknown.code(), "manual");
    assert!(!p.has_error());

    p.catch(ErrorKind::OptionUnknown)
        .set_error(ErrorKind::OptionUnknown.code(), "manual");
    assert_eq!(p.feed_args(&args(&["x"])), ErrorKind::OptionUnknown.code());
    assert_eq!(context(&p), "manual");

    p.set_error(0, "");
    assert!(!p.has_error());
    assert_eq!(p.feed_args(&args(&["x"])), 0);
}
