//! The parser aggregate: option setup, bound variables, received values,
//! catch policy and command metadata.
//!
//! | Submodule       | Responsibility |
//! |-----------------|----------------|
//! | [`tokenizer`]   | Classify tokens into options, flags and positionals. |
//! | [`positional`]  | Move leading positionals into `#N`-bound options. |
//! | [`config_file`] | Turn a config file into lower-precedence tokens. |
//! | `dispatch`      | `feed` cycle and sub-command selection. |
//! | `help`          | Usage text, `--help` and `--version` output. |
//!
//! Setup methods return `&mut Self` for chaining. A definition that violates
//! a caught check is not added; the error is kept and returned by the next
//! `feed`.

pub mod config_file;
mod dispatch;
mod help;
pub mod positional;
pub mod tokenizer;

use std::collections::BTreeMap;
use std::fmt;

use crate::binding::Binding;
use crate::command::{CommandHandler, CommandInfo, SubHandler};
use crate::constants::{
    CONFIG_EXTENSION, OPTION_NAME_CONFIG, OPTION_NAME_HELP, OPTION_NAME_VERSION, POSITIONAL_KEY,
};
use crate::convert::FromArg;
use crate::error::{Error, ErrorKind, ErrorState, Result};
use crate::option::{OptionAttr, OptionDef};
use crate::registry::OptionRegistry;
use crate::store::ArgumentStore;
use crate::util::{invocation_name, is_invalid_name};

#[derive(Default)]
pub struct Parser {
    registry: OptionRegistry,
    bindings: BTreeMap<String, Binding>,
    store: ArgumentStore,
    errors: ErrorState,
    version: String,
    command: CommandInfo,
    commands: Vec<CommandInfo>,
    current: Option<usize>,
    on_run: Option<CommandHandler>,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("command", &self.command.name)
            .field("options", &self.registry.len())
            .field("commands", &self.commands)
            .field("store", &self.store)
            .field("last_error", &self.errors.last())
            .finish()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Option setup ─────────────────────────────────────────────────────────

    fn check_option(&mut self, def: &OptionDef) -> Result<()> {
        if is_invalid_name(&def.long) {
            self.errors.raise(ErrorKind::OptionInvalid, def.long.as_str())?;
        }
        if self.registry.contains_long(&def.long) {
            self.errors.raise(ErrorKind::OptionRedefine, def.long.as_str())?;
        }
        if let Some(c) = def.short {
            if !c.is_ascii_alphabetic() {
                self.errors.raise(ErrorKind::FlagInvalid, format!("char%{}", c as u32))?;
            }
            if self.registry.find_short(c).is_some() {
                self.errors.raise(ErrorKind::FlagRedefine, c.to_string())?;
            }
        }
        Ok(())
    }

    /// Add a prepared definition.
    pub fn add_option(&mut self, def: OptionDef) -> &mut Self {
        if self.check_option(&def).is_ok() {
            self.registry.push(def);
        }
        self
    }

    /// Add a flag (no argument). `short` may be `'\0'`.
    pub fn flag(&mut self, short: char, long: &str, description: &str) -> &mut Self {
        self.add_option(OptionDef::new(long).short(short).describe(description))
    }

    /// Add a flag and bind its presence to `slot`.
    pub fn flag_bound(
        &mut self,
        short: char,
        long: &str,
        description: &str,
        slot: impl Into<Binding>,
    ) -> &mut Self {
        self.bind(long, slot);
        self.flag(short, long, description)
    }

    /// Add an option that takes an argument.
    pub fn option(&mut self, short: char, long: &str, description: &str) -> &mut Self {
        self.option_with(short, long, description, "", OptionAttr::ARGUMENT)
    }

    /// Add an option with a default value and explicit attributes. Passing
    /// empty attributes makes it a flag.
    pub fn option_with(
        &mut self,
        short: char,
        long: &str,
        description: &str,
        default: &str,
        attrs: OptionAttr,
    ) -> &mut Self {
        self.add_option(
            OptionDef::new(long)
                .short(short)
                .describe(description)
                .default_value(default)
                .attrs(attrs),
        )
    }

    /// Add a required option that takes an argument.
    pub fn required(&mut self, short: char, long: &str, description: &str) -> &mut Self {
        self.option_with(short, long, description, "", OptionAttr::ARGUMENT | OptionAttr::REQUIRED)
    }

    /// Add an option described by a spec-string, see [`OptionDef::from_spec`].
    pub fn set(&mut self, spec: &str, description: &str) -> &mut Self {
        self.add_option(OptionDef::from_spec(spec, description))
    }

    /// [`set`](Self::set) and bind the option's value to `binding`.
    pub fn set_bound(
        &mut self,
        spec: &str,
        description: &str,
        binding: impl Into<Binding>,
    ) -> &mut Self {
        let def = OptionDef::from_spec(spec, description);
        self.bind(&def.long, binding);
        self.add_option(def)
    }

    /// Bind the value of option `name` to a typed slot, written at the end
    /// of each successful feed. `"--"` binds all positional arguments.
    pub fn bind(&mut self, name: &str, binding: impl Into<Binding>) -> &mut Self {
        self.bindings.insert(name.to_owned(), binding.into());
        self
    }

    fn reserve_options(&mut self) {
        if !self.registry.contains_long(OPTION_NAME_CONFIG) {
            self.registry.push(
                OptionDef::new(OPTION_NAME_CONFIG)
                    .describe("read arguments from config file")
                    .default_value(format!("{}{}", invocation_name(), CONFIG_EXTENSION))
                    .attrs(OptionAttr::ARGUMENT),
            );
        }
        if !self.registry.contains_long(OPTION_NAME_VERSION) {
            self.registry.push(OptionDef::new(OPTION_NAME_VERSION).describe("print version"));
        }
        if !self.registry.contains_long(OPTION_NAME_HELP) {
            self.registry.push(OptionDef::new(OPTION_NAME_HELP).describe("print help message"));
        }
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    pub fn version(&mut self, version: &str) -> &mut Self {
        self.version = version.to_owned();
        self
    }

    pub fn version_str(&self) -> &str {
        &self.version
    }

    /// Set the command name; `feed` adopts `argv[0]` when none is set.
    pub fn command(&mut self, name: &str) -> &mut Self {
        self.command.name = name.to_owned();
        self
    }

    pub fn command_with(&mut self, name: &str, description: &str) -> &mut Self {
        self.command.name = name.to_owned();
        self.command.description = description.to_owned();
        self
    }

    /// Set the command and a handler run after every successful parse.
    pub fn command_with_handler<F>(
        &mut self,
        name: &str,
        description: &str,
        handler: F,
    ) -> &mut Self
    where
        F: Fn(&[String], &Parser) -> i32 + 'static,
    {
        self.command_with(name, description);
        self.command.handler = SubHandler::Handler(Box::new(handler));
        self
    }

    fn add_command(&mut self, info: CommandInfo) -> &mut Self {
        let checked = if is_invalid_name(&info.name) {
            self.errors.raise(ErrorKind::SubcmdInvalid, info.name.as_str())
        } else if self.find_command(&info.name).is_some() {
            self.errors.raise(ErrorKind::SubcmdRedefine, info.name.as_str())
        } else {
            Ok(())
        };
        if checked.is_ok() {
            self.commands.push(info);
        }
        self
    }

    /// Sub-command handled by a function that reads this parser's values.
    pub fn sub_command<F>(&mut self, name: &str, description: &str, handler: F) -> &mut Self
    where
        F: Fn(&[String], &Parser) -> i32 + 'static,
    {
        let info = CommandInfo::new(name, description)
            .with_handler(SubHandler::Handler(Box::new(handler)));
        self.add_command(info)
    }

    /// Sub-command handled by its own parser, which receives the argv window
    /// starting at the sub-command name and runs a full feed cycle.
    pub fn sub_command_parser(
        &mut self,
        name: &str,
        description: &str,
        mut parser: Parser,
    ) -> &mut Self {
        parser.command_with(name, description);
        let info = CommandInfo::new(name, description)
            .with_handler(SubHandler::Nested(Box::new(parser)));
        self.add_command(info)
    }

    /// Default handler, run when neither a sub-command handler nor a
    /// command handler applies.
    pub fn on_run<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&[String], &Parser) -> i32 + 'static,
    {
        self.on_run = Some(Box::new(handler));
        self
    }

    /// Reject runs whose sub-command is not registered.
    pub fn sub_command_only(&mut self) -> &mut Self {
        self.catch(ErrorKind::CommandUnknown)
    }

    /// Reject options that were never defined.
    pub fn option_only(&mut self) -> &mut Self {
        self.catch(ErrorKind::OptionUnknown)
    }

    fn find_command(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.name == name)
    }

    /// Nested parser registered for sub-command `name`.
    pub fn sub_parser(&self, name: &str) -> Option<&Parser> {
        let idx = self.find_command(name)?;
        match &self.commands[idx].handler {
            SubHandler::Nested(p) => Some(&**p),
            _ => None,
        }
    }

    pub fn sub_parser_mut(&mut self, name: &str) -> Option<&mut Parser> {
        let idx = self.find_command(name)?;
        match &mut self.commands[idx].handler {
            SubHandler::Nested(p) => Some(&mut **p),
            _ => None,
        }
    }

    /// Name of the sub-command selected by the last `feed`.
    pub fn current_sub_command(&self) -> Option<&str> {
        self.current.map(|i| self.commands[i].name.as_str())
    }

    // ── Catch policy ─────────────────────────────────────────────────────────

    pub fn catch(&mut self, kind: ErrorKind) -> &mut Self {
        self.errors.catch(kind);
        self
    }

    pub fn catch_many(&mut self, kinds: &[ErrorKind]) -> &mut Self {
        for &kind in kinds {
            self.errors.catch(kind);
        }
        self
    }

    pub fn catch_all(&mut self) -> &mut Self {
        self.errors.catch_all();
        self
    }

    pub fn ignore(&mut self, kind: ErrorKind) -> &mut Self {
        self.errors.ignore(kind);
        self
    }

    pub fn ignore_many(&mut self, kinds: &[ErrorKind]) -> &mut Self {
        for &kind in kinds {
            self.errors.ignore(kind);
        }
        self
    }

    pub fn is_catch(&self, kind: ErrorKind) -> bool {
        self.errors.is_catch(kind)
    }

    pub fn has_error(&self) -> bool {
        self.errors.last().is_some()
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.errors.last()
    }

    /// Code of the pending error, 0 when none.
    pub fn error_code(&self) -> i32 {
        self.errors.code()
    }

    pub fn clear_error(&mut self) {
        self.errors.clear();
    }

    /// Record an error by code, as if raised. `0` clears the pending error;
    /// unknown codes and kinds outside the catch set are ignored.
    pub fn set_error(&mut self, code: i32, context: &str) -> &mut Self {
        self.errors.set_error(code, context);
        self
    }

    /// Drop received values, typically before feeding again.
    pub fn clear_argument(&mut self) {
        self.store.clear();
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Whether option `name` was received. A one-letter name also matches
    /// the option with that short letter.
    pub fn has(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if self.store.contains(name) {
            return true;
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self
                .registry
                .find_short(c)
                .is_some_and(|def| self.store.contains(&def.long)),
            _ => false,
        }
    }

    /// Raw value of option `name`: received value, else environment, else
    /// default, else (for a one-letter name) the option with that short
    /// letter. `"--"` returns all positionals joined by NUL.
    pub fn get(&self, name: &str) -> String {
        if name == POSITIONAL_KEY {
            return self.store.joined_positionals();
        }
        if name.is_empty() {
            return String::new();
        }
        if let Some(value) = self.store.value(name) {
            return value.to_owned();
        }
        let value = self.get_default(name);
        if !value.is_empty() {
            return value;
        }
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(def) = self.registry.find_short(c).filter(|def| def.long != name) {
                return self.get(&def.long);
            }
        }
        value
    }

    /// Environment value (when set and non-empty) or default of option `name`.
    pub fn get_default(&self, name: &str) -> String {
        let Some(def) = self.registry.find_long(name) else {
            return String::new();
        };
        if let Some(var) = &def.env {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    return value;
                }
            }
        }
        def.default.clone()
    }

    /// Positional argument `pos`, 1-based. `0` returns all of them joined by
    /// NUL; past the end returns `""`.
    pub fn get_pos(&self, pos: usize) -> String {
        if pos == 0 {
            return self.store.joined_positionals();
        }
        self.store
            .positionals()
            .get(pos - 1)
            .cloned()
            .unwrap_or_default()
    }

    /// Value of option `name` converted to `T`, `None` when empty.
    pub fn get_as<T: FromArg>(&self, name: &str) -> Option<T> {
        let raw = self.get(name);
        (!raw.is_empty()).then(|| T::from_arg(&raw))
    }

    /// Received options by key.
    pub fn args(&self) -> &BTreeMap<String, String> {
        self.store.options()
    }

    /// Positional arguments left after binding.
    pub fn argv(&self) -> &[String] {
        self.store.positionals()
    }

    pub fn argc(&self) -> usize {
        self.store.positionals().len()
    }

    /// Command name, usually `argv[0]`.
    pub fn arg0(&self) -> &str {
        &self.command.name
    }

    pub fn arguments(&self) -> &ArgumentStore {
        &self.store
    }

    pub fn options(&self) -> &OptionRegistry {
        &self.registry
    }
}
