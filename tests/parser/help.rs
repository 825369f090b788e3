// Usage text layout.

use cliop::Parser;

fn row(label: &str, description: &str) -> String {
    format!("{:<31}{}\n", label, description)
}

fn demo() -> Parser {
    let mut p = Parser::new();
    p.command_with("demo", "demo tool")
        .version("v1.0")
        .flag('d', "debug", "enable debug")
        .set("-o #1 --output= [out.txt]", "output file")
        .required('n', "name", "your name");
    p
}

#[test]
fn option_table_is_aligned() {
    let expected = [
        "Usage: demo [options] [arguments] ...\n".to_string(),
        "\tv1.0\tdemo tool\n".to_string(),
        "Option:\n".to_string(),
        row("  -d --debug", "enable debug"),
        row("  -o #1 --output= [out.txt]", "output file"),
        row("  -n --name=?", "your name"),
    ]
    .concat();
    assert_eq!(demo().usage(), expected);
}

#[test]
fn reserved_options_listed_after_feed() {
    let mut p = demo();
    p.feed_args(&["-n", "x"]);
    let text = p.usage();
    assert!(text.contains("  --config= ["));
    assert!(text.contains("--version"));
    assert!(text.trim_end().ends_with("print help message"));
}

#[test]
fn sub_commands_get_their_own_table() {
    let mut p = demo();
    p.sub_command("build", "compile things", |_, _| 0)
        .sub_command("clean", "remove output", |_, _| 0);
    let text = p.usage();
    assert!(text.starts_with("Usage: demo command [options] [arguments] ...\n"));
    let commands = text
        .split("Command:\n")
        .nth(1)
        .and_then(|rest| rest.split("Option:\n").next())
        .unwrap();
    assert_eq!(commands, "  build    compile things\n  clean    remove output\n");
}

#[test]
fn version_string_is_kept() {
    assert_eq!(demo().version_str(), "v1.0");
    assert_eq!(Parser::new().version_str(), "");
}
