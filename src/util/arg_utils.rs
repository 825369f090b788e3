// util/arg_utils.rs: Token and name helpers shared by the tokenizer, the
// registry checks, and sub-command dispatch.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns `true` if `exe_name` matches `name`, excluding any file extension.
///
/// The exe name must start with `name` and the next character must be the
/// end of the string or `'.'`, so `add.exe` matches `add` but `adder` does not.
pub fn exe_name_match(exe_name: &str, name: &str) -> bool {
    if let Some(rest) = exe_name.strip_prefix(name) {
        rest.is_empty() || rest.starts_with('.')
    } else {
        false
    }
}

/// Basename of the running process's `argv[0]`, or `""` when unavailable.
pub fn invocation_name() -> String {
    std::env::args()
        .next()
        .map(|argv0| last_name_from_path(&argv0).to_owned())
        .unwrap_or_default()
}

/// Strips the leading run of `-` from `token`.
///
/// Returns the remainder and the number of dashes removed. A token made only
/// of dashes strips to `""` with a count equal to its length.
pub fn trim_left_dashes(token: &str) -> (&str, usize) {
    let rest = token.trim_start_matches('-');
    (rest, token.len() - rest.len())
}

/// `true` for a name that cannot be used as an option long name, sub-command
/// name, or (when checked) an option argument: empty, starting with `-`, or
/// containing `=`.
pub fn is_invalid_name(name: &str) -> bool {
    name.is_empty() || name.starts_with('-') || name.contains('=')
}
