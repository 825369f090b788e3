// parser/config_file.rs: Turn a config file into synthetic tokens.
//
// Line rules, after trimming:
//   blank, `#...`, `;...`   → skipped
//   `--` or `[--]`          → emit `--`; every later line is emitted verbatim
//   `[group]`               → prefix later keys with `group.`
//   `key = value`           → emit `key=value` (leading dashes dropped from key)
//   anything else           → emitted as-is, or CONFIG_INVALID when caught

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{ErrorKind, ErrorState, Result};
use crate::util::trim_left_dashes;

/// Read `path` into tokens. An unreadable file yields no tokens (and raises
/// CONFIG_UNREADABLE when caught).
pub fn read_config(path: &str, errors: &mut ErrorState) -> Result<Vec<String>> {
    match File::open(path) {
        Ok(file) => config_tokens(BufReader::new(file), path, errors),
        Err(e) => {
            crate::displaylevel!(4, "cliop: config '{}' not read: {}\n", path, e);
            errors.raise(ErrorKind::ConfigUnreadable, path)?;
            Ok(Vec::new())
        }
    }
}

/// Convert config lines from `reader` into tokens. `source` names the input
/// in error context.
pub fn config_tokens<R: BufRead>(
    reader: R,
    source: &str,
    errors: &mut ErrorState,
) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut raw = false;
    let mut group = String::new();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                errors.raise(ErrorKind::ConfigUnreadable, format!("{}: {}", source, e))?;
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line == "--" || line == "[--]" {
            raw = true;
            tokens.push("--".to_owned());
            continue;
        }
        if raw {
            tokens.push(line.to_owned());
            continue;
        }

        if line.len() > 2 && line.starts_with('[') && line.ends_with(']') {
            group = line[1..line.len() - 1].to_owned();
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                let (key, _) = trim_left_dashes(key.trim());
                let token = if group.is_empty() {
                    format!("{}={}", key, value.trim())
                } else {
                    format!("{}.{}={}", group, key, value.trim())
                };
                tokens.push(token);
            }
            None => {
                errors.raise(ErrorKind::ConfigInvalid, line)?;
                tokens.push(line.to_owned());
            }
        }
    }
    Ok(tokens)
}
