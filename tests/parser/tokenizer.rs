// Integration tests for token classification through `Parser::feed_args`.
//
// Covers:
//   - short-flag clusters, with and without definitions
//   - `--name=value` vs `--name value`
//   - repeatable vs first-write-wins storage
//   - the `--` end-of-options marker
//   - spec-string vs structured registration

use cliop::{OptionAttr, OptionDef, Parser};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Parser {
    let mut p = Parser::new();
    p.flag('d', "debug", "enable debug mode")
        .option('v', "verbose", "verbose level")
        .set("-e --expr=+", "repeatable expression")
        .set("-u --user=", "user name");
    p
}

// ─────────────────────────────────────────────────────────────────────────────
// Short-flag clusters
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn undefined_cluster_sets_each_letter() {
    let mut p = Parser::new();
    assert_eq!(p.feed_args(&args(&["-abc"])), 0);
    assert!(p.has("a"));
    assert!(p.has("b"));
    assert!(p.has("c"));
    assert!(!p.has("abc"));
}

#[test]
fn cluster_stops_at_argument_option() {
    let mut p = sample();
    p.feed_args(&args(&["-dvx"]));
    assert!(p.has("debug"));
    assert_eq!(p.get("verbose"), "x");
    assert!(!p.has("x"));
}

#[test]
fn cluster_argument_from_next_token() {
    let mut p = sample();
    p.feed_args(&args(&["-dv", "3", "file"]));
    assert_eq!(p.get("verbose"), "3");
    assert_eq!(p.argv(), ["file".to_string()]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Long options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn equals_and_split_forms_store_same_value() {
    let mut joined = sample();
    joined.feed_args(&args(&["--user=alice"]));
    let mut split = sample();
    split.feed_args(&args(&["--user", "alice"]));
    assert_eq!(joined.args(), split.args());
    assert_eq!(split.get("user"), "alice");
}

#[test]
fn name_value_without_dashes_is_an_option() {
    let mut p = sample();
    p.feed_args(&args(&["user=bob", "plain"]));
    assert_eq!(p.get("user"), "bob");
    assert_eq!(p.argv(), ["plain".to_string()]);
}

#[test]
fn undefined_long_option_takes_next_token() {
    let mut p = sample();
    p.feed_args(&args(&["--colour", "red", "tail"]));
    assert_eq!(p.get("colour"), "red");
    assert_eq!(p.argv(), ["tail".to_string()]);
}

#[test]
fn defined_long_flag_does_not_consume() {
    let mut p = sample();
    p.feed_args(&args(&["--debug", "tail"]));
    assert!(p.has("d"));
    assert_eq!(p.argc(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Storage rules
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn repeatable_accumulates_in_order() {
    let mut p = sample();
    p.feed_args(&args(&["-e", "one", "--expr=two", "-ethree"]));
    assert_eq!(p.get("expr"), "one\0two\0three");
    let list: Vec<String> = p.get_as("expr").unwrap();
    assert_eq!(list, vec!["one", "two", "three"]);
}

#[test]
fn repeatable_keeps_leading_empty_value() {
    let mut p = sample();
    p.feed_args(&args(&["--expr=", "--expr=b", "--expr=c"]));
    let list: Vec<String> = p.get_as("expr").unwrap();
    assert_eq!(list, vec!["", "b", "c"]);
}

#[test]
fn non_repeatable_keeps_first() {
    let mut p = sample();
    p.feed_args(&args(&["--user=first", "-u", "second"]));
    assert_eq!(p.get("user"), "first");
}

#[test]
fn tokens_after_end_marker_are_positional() {
    let mut p = sample();
    p.feed_args(&args(&["-d", "--", "-v", "--user=x", "--"]));
    assert!(p.has("debug"));
    assert!(!p.has("verbose"));
    assert!(!p.has("user"));
    assert_eq!(p.argv(), args(&["-v", "--user=x", "--"]));
}

#[test]
fn empty_tokens_are_skipped() {
    let mut p = sample();
    p.feed_args(&args(&["", "a", ""]));
    assert_eq!(p.argv(), ["a".to_string()]);
}

#[test]
fn feed_clears_previous_values() {
    let mut p = sample();
    p.feed_args(&args(&["-d", "x"]));
    p.feed_args(&args(&["y"]));
    assert!(!p.has("debug"));
    assert_eq!(p.argv(), ["y".to_string()]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Registration forms
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn spec_string_and_structured_forms_agree() {
    let tokens = args(&["-n", "5", "--level=2", "-n", "6", "rest"]);

    let mut by_spec = Parser::new();
    by_spec
        .set("-n --num=+", "numbers")
        .set("--level= [1]", "level");
    by_spec.feed_args(&tokens);

    let mut by_fields = Parser::new();
    by_fields
        .add_option(
            OptionDef::new("num")
                .short('n')
                .attrs(OptionAttr::ARGUMENT | OptionAttr::REPEATED),
        )
        .option_with('\0', "level", "level", "1", OptionAttr::ARGUMENT);
    by_fields.feed_args(&tokens);

    assert_eq!(by_spec.args(), by_fields.args());
    assert_eq!(by_spec.argv(), by_fields.argv());
    assert_eq!(by_spec.get("num"), "5\06");
}

#[test]
fn bare_double_dash_in_spec_string_is_ignored() {
    let mut p = Parser::new();
    p.set("--name= --", "name");
    assert!(p.options().contains_long("name"));
    assert!(!p.options().contains_long(""));
    p.feed_args(&args(&["--name", "x"]));
    assert_eq!(p.get("name"), "x");
}
