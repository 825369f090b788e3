// parser/tokenizer.rs: Classify command-line tokens into the argument store.
//
// Per token, first match wins:
//   1. empty                          → skipped
//   2. `--` (first time)              → end of options
//   3. after end of options           → positional
//   4. an option awaits its argument  → that option's value
//   5. contains `=`                   → `name=value`, dashes stripped from name
//   6. no leading dash, or all dashes → positional
//   7. one dash                       → short-flag cluster
//   8. two or more dashes             → long option or flag

use crate::error::{ErrorKind, ErrorState, Result};
use crate::option::OptionDef;
use crate::registry::OptionRegistry;
use crate::store::ArgumentStore;
use crate::util::{is_invalid_name, trim_left_dashes};

/// An option seen without its argument, waiting for the next token.
enum Pending<'r> {
    None,
    Known(&'r OptionDef),
    Unknown(String),
}

/// Store `value` for a defined option: repeatable options accumulate, all
/// others keep their first value.
pub(crate) fn save_value(store: &mut ArgumentStore, def: &OptionDef, value: &str) {
    if def.is_repeated() {
        store.save_repeated(&def.long, value);
    } else {
        store.save_first(&def.long, value);
    }
}

fn check_argument(errors: &mut ErrorState, token: &str) -> Result<()> {
    if is_invalid_name(token) {
        errors.raise(ErrorKind::ArgumentInvalid, token)?;
    }
    Ok(())
}

/// Walk `tokens` left to right, writing options and positionals into `store`.
pub fn parse_cmdline<S: AsRef<str>>(
    registry: &OptionRegistry,
    store: &mut ArgumentStore,
    errors: &mut ErrorState,
    tokens: &[S],
) -> Result<()> {
    let mut end_of_options = false;
    let mut pending = Pending::None;

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        if token == "--" && !end_of_options {
            end_of_options = true;
            continue;
        }
        if end_of_options {
            store.push_positional(token);
            continue;
        }

        match std::mem::replace(&mut pending, Pending::None) {
            Pending::Known(def) => {
                check_argument(errors, token)?;
                save_value(store, def, token);
                continue;
            }
            Pending::Unknown(name) => {
                check_argument(errors, token)?;
                store.save_first(&name, token);
                continue;
            }
            Pending::None => {}
        }

        let (body, dashes) = trim_left_dashes(token);

        if let Some((name, value)) = body.split_once('=') {
            match registry.find_long(name) {
                Some(def) => save_value(store, def, value),
                None => store.save_first(name, value),
            }
            continue;
        }

        if dashes == 0 || body.is_empty() {
            store.push_positional(token);
        } else if dashes == 1 {
            for (i, c) in body.char_indices() {
                match registry.find_short(c) {
                    Some(def) if def.takes_argument() => {
                        let rest = &body[i + c.len_utf8()..];
                        if rest.is_empty() {
                            pending = Pending::Known(def);
                        } else {
                            save_value(store, def, rest);
                        }
                        break;
                    }
                    Some(def) => store.save_flag(&def.long),
                    None => store.save_flag(&c.to_string()),
                }
            }
        } else {
            match registry.find_long(body) {
                Some(def) if def.takes_argument() => pending = Pending::Known(def),
                Some(def) => store.save_flag(&def.long),
                None => pending = Pending::Unknown(body.to_owned()),
            }
        }
    }

    let incomplete = match pending {
        Pending::None => None,
        Pending::Known(def) => Some(def.long.clone()),
        Pending::Unknown(name) => Some(name),
    };
    if let Some(name) = incomplete {
        crate::displaylevel!(4, "cliop: option '{}' has no argument\n", name);
        errors.raise(ErrorKind::OptionIncomplete, name)?;
    }
    Ok(())
}
