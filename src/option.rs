//! Option definitions and the declarative spec-string form.
//!
//! An option is identified by its long name. It may also carry a short
//! letter, a positional-bind index, an environment variable fallback and a
//! default value. The spec-string accepted by [`OptionDef::from_spec`] reads
//! like a help line:
//!
//! ```text
//! -n #1 $ENV_NAME --long-name=?+ [default-value]
//! ```
//!
//! `-` marks the short name, `--` the long name, a trailing `=` an argument
//! (`?` required, `+` repeatable), `#` the positional-bind index, `$` the
//! environment variable and `[...]` the default. Word order does not matter.

use bitflags::bitflags;

use crate::util::split_by_space;

bitflags! {
    /// Attribute bits of an option.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OptionAttr: u8 {
        /// Takes an argument: `--name value` or `--name=value`.
        const ARGUMENT = 0b0000_0001;
        /// Must be supplied on the command line or in the config file.
        const REQUIRED = 0b0000_0010;
        /// May be supplied repeatedly; values accumulate.
        const REPEATED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionDef {
    pub short: Option<char>,
    pub long: String,
    pub attrs: OptionAttr,
    /// 1-based positional slot, 0 when not bound.
    pub bind_index: i32,
    pub default: String,
    pub env: Option<String>,
    pub description: String,
}

impl OptionDef {
    pub fn new(long: impl Into<String>) -> Self {
        OptionDef { long: long.into(), ..Default::default() }
    }

    /// Set the short letter; `'\0'` clears it.
    pub fn short(mut self, c: char) -> Self {
        self.short = (c != '\0').then_some(c);
        self
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env = Some(var.into());
        self
    }

    pub fn bind_index(mut self, index: i32) -> Self {
        self.bind_index = index;
        self
    }

    pub fn attrs(mut self, attrs: OptionAttr) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn takes_argument(&self) -> bool {
        self.attrs.contains(OptionAttr::ARGUMENT)
    }

    pub fn is_required(&self) -> bool {
        self.attrs.contains(OptionAttr::REQUIRED)
    }

    pub fn is_repeated(&self) -> bool {
        self.attrs.contains(OptionAttr::REPEATED)
    }

    /// Build a definition from a spec-string such as `-u $USER --user=`.
    ///
    /// Words shorter than two characters and words matching no rule are
    /// ignored; when a field is given twice the later word wins.
    pub fn from_spec(spec: &str, description: &str) -> Self {
        let mut def = OptionDef::new("").describe(description);

        for word in split_by_space(spec) {
            if word.len() < 2 {
                continue;
            }
            let mut chars = word.chars();
            let first = chars.next();
            let second = chars.next();

            if word.chars().count() == 2 && first == Some('-') && second != Some('-') {
                def.short = second;
            } else if let Some(index) = word.strip_prefix('#') {
                def.bind_index = crate::convert::parse_int_prefix(index)
                    .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
            } else if let Some(var) = word.strip_prefix('$') {
                def.env = Some(var.to_owned());
            } else if word.starts_with('[') && word.ends_with(']') {
                def.default = word[1..word.len() - 1].to_owned();
            } else if let Some(body) = word.strip_prefix("--").filter(|b| !b.is_empty()) {
                match body.split_once('=') {
                    Some((long, marks)) => {
                        def.long = long.to_owned();
                        def.attrs = OptionAttr::ARGUMENT;
                        def.attrs.set(OptionAttr::REQUIRED, marks.contains('?'));
                        def.attrs.set(OptionAttr::REPEATED, marks.contains('+'));
                    }
                    None => {
                        def.long = body.to_owned();
                        def.attrs = OptionAttr::empty();
                    }
                }
            }
        }
        def
    }
}
