// parser/help.rs: Usage text and the `--help` / `--version` printers.

use crate::option::OptionDef;
use crate::util::TextAlign;

use super::Parser;

/// Name column of an option row: `-c #N $ENV --long=?+ [default]`.
fn option_label(def: &OptionDef) -> String {
    let mut label = String::from("  ");
    if let Some(c) = def.short {
        label.push('-');
        label.push(c);
        label.push(' ');
    }
    if def.bind_index != 0 {
        label.push_str(&format!("#{} ", def.bind_index));
    }
    if let Some(var) = def.env.as_deref().filter(|v| !v.is_empty()) {
        label.push_str(&format!("${} ", var));
    }
    label.push_str("--");
    label.push_str(&def.long);
    if def.takes_argument() {
        label.push('=');
        if def.is_required() {
            label.push('?');
        }
        if def.is_repeated() {
            label.push('+');
        }
    }
    if !def.default.is_empty() && !def.is_required() {
        label.push_str(&format!(" [{}]", def.default));
    }
    label
}

impl Parser {
    /// Help text: usage line, version and description, sub-commands, options.
    pub fn usage(&self) -> String {
        let mut text = format!("Usage: {}", self.command.name);
        if !self.commands.is_empty() {
            text.push_str(" command");
        }
        text.push_str(" [options] [arguments] ...\n");

        if !self.version.is_empty() {
            text.push('\t');
            text.push_str(&self.version);
        }
        if !self.command.description.is_empty() {
            text.push('\t');
            text.push_str(&self.command.description);
        }
        text.push('\n');

        if !self.commands.is_empty() {
            text.push_str("Command:\n");
            let mut align = TextAlign::default();
            for cmd in &self.commands {
                align.add_line([format!("  {}", cmd.name), cmd.description.clone()]);
            }
            text.push_str(&align.text());
        }

        text.push_str("Option:\n");
        let mut align = TextAlign::default();
        for def in &self.registry {
            align.add_line([option_label(def), def.description.clone()]);
        }
        text.push_str(&align.text());
        text
    }

    pub fn print_help(&self) {
        crate::displayout!("{}", self.usage());
    }

    pub fn print_version(&self) {
        crate::displayout!("{}\n", self.version);
    }
}
