// parser/dispatch.rs: The feed cycle and sub-command selection.
//
// feed(argv):
//   argv[0] names the command. A sub-command is looked up as argv[1], then
//   as the basename of argv[0], then as the process invocation name. A nested
//   parser takes over the whole cycle; otherwise this parser parses the rest
//   and runs the sub-command handler, the command handler, or the run hook.
//
// feed_args(args), one cycle:
//   clear → tokenize → help/version → positional binding → config merge →
//   bindings → required check → unknown-option check

use crate::command::SubHandler;
use crate::constants::{
    CONFIG_NONE, EMPTY_ARGV_CODE, HELP_CODE, OPTION_NAME_CONFIG, OPTION_NAME_HELP,
    OPTION_NAME_VERSION,
};
use crate::error::{ErrorKind, Result};
use crate::util::{exe_name_match, invocation_name, last_name_from_path};

use super::config_file::read_config;
use super::positional::move_arguments;
use super::tokenizer::parse_cmdline;
use super::Parser;

fn to_owned_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter().map(|s| s.as_ref().to_owned()).collect()
}

impl Parser {
    /// Parse a full `argv` (including `argv[0]`) and run the matching handler.
    ///
    /// Returns 0 or the handler's result on success, [`HELP_CODE`] after
    /// `--help`/`--version`, the code of a caught error, or `-1` for an empty
    /// `argv`.
    pub fn feed<S: AsRef<str>>(&mut self, argv: &[S]) -> i32 {
        let argv = to_owned_args(argv);
        if argv.is_empty() {
            return EMPTY_ARGV_CODE;
        }
        if let Err(e) = self.errors.pending() {
            return e.code();
        }
        if self.command.name.is_empty() {
            self.command.name = argv[0].clone();
        }

        let (sub, shift) = self.select_sub_command(&argv);
        self.current = sub;
        if let Some(idx) = sub {
            crate::displaylevel!(4, "cliop: sub-command '{}'\n", self.commands[idx].name);
            if let SubHandler::Nested(nested) = &mut self.commands[idx].handler {
                return nested.feed(&argv[shift..]);
            }
        }

        match self.run_cycle(&argv[shift + 1..]) {
            Ok(0) => {}
            Ok(code) => return code,
            Err(e) => return e.code(),
        }

        if sub.is_none() && !self.commands.is_empty() {
            let context = argv.get(1).unwrap_or(&argv[0]);
            if let Err(e) = self.errors.raise(ErrorKind::CommandUnknown, context.as_str()) {
                return e.code();
            }
        }

        let this: &Parser = self;
        if let Some(SubHandler::Handler(handler)) = sub.map(|i| &this.commands[i].handler) {
            return handler(&argv[shift..], this);
        }
        if let SubHandler::Handler(handler) = &this.command.handler {
            return handler(&argv, this);
        }
        match &this.on_run {
            Some(run) => run(&argv, this),
            None => 0,
        }
    }

    /// Parse `std::env::args()`.
    pub fn feed_from_env(&mut self) -> i32 {
        let argv: Vec<String> = std::env::args().collect();
        self.feed(&argv)
    }

    /// Run one parse cycle over `args`, which excludes the command name.
    /// No handler is invoked.
    pub fn feed_args<S: AsRef<str>>(&mut self, args: &[S]) -> i32 {
        self.current = None;
        match self.run_cycle(&to_owned_args(args)) {
            Ok(code) => code,
            Err(e) => e.code(),
        }
    }

    fn select_sub_command(&self, argv: &[String]) -> (Option<usize>, usize) {
        if self.commands.is_empty() {
            return (None, 0);
        }
        if let Some(idx) = argv.get(1).and_then(|name| self.find_command(name)) {
            return (Some(idx), 1);
        }
        let by_name = |exe: &str| self.commands.iter().position(|c| exe_name_match(exe, &c.name));
        let found = by_name(last_name_from_path(&argv[0])).or_else(|| by_name(&invocation_name()));
        (found, 0)
    }

    fn run_cycle(&mut self, args: &[String]) -> Result<i32> {
        self.errors.pending()?;
        self.clear_argument();
        self.reserve_options();

        parse_cmdline(&self.registry, &mut self.store, &mut self.errors, args)?;

        if self.current.is_none() {
            if self.store.contains(OPTION_NAME_HELP) {
                self.print_help();
                return Ok(HELP_CODE);
            }
            if self.store.contains(OPTION_NAME_VERSION) {
                self.print_version();
                return Ok(HELP_CODE);
            }
        }

        move_arguments(&self.registry, &mut self.store, &mut self.errors)?;
        self.merge_config()?;
        self.resolve_bindings()?;
        self.check_required()?;
        self.check_unknown()?;
        Ok(0)
    }

    /// Feed the config file's tokens at lower precedence than the command line.
    fn merge_config(&mut self) -> Result<()> {
        let path = self.get(OPTION_NAME_CONFIG);
        if path.is_empty() || path == CONFIG_NONE {
            return Ok(());
        }
        let tokens = read_config(&path, &mut self.errors)?;
        if tokens.is_empty() {
            return Ok(());
        }
        crate::displaylevel!(4, "cliop: {} token(s) from config '{}'\n", tokens.len(), path);
        self.store.freeze();
        parse_cmdline(&self.registry, &mut self.store, &mut self.errors, &tokens)
    }

    fn resolve_bindings(&mut self) -> Result<()> {
        let check = self.errors.is_catch(ErrorKind::ArgtypeUnmatch);
        for (name, binding) in &self.bindings {
            let present = self.has(name);
            let raw = if binding.is_bool() { String::new() } else { self.get(name) };
            if check {
                if let Some(bad) = binding.malformed(&raw) {
                    let context = format!("{}={}", name, bad);
                    self.errors.raise(ErrorKind::ArgtypeUnmatch, context)?;
                }
            }
            binding.assign(present, &raw);
        }
        Ok(())
    }

    fn check_required(&mut self) -> Result<()> {
        for def in &self.registry {
            if def.is_required() && !self.store.contains(&def.long) {
                self.errors.raise(ErrorKind::OptionRequired, def.long.as_str())?;
            }
        }
        Ok(())
    }

    fn check_unknown(&mut self) -> Result<()> {
        if !self.errors.is_catch(ErrorKind::OptionUnknown) {
            return Ok(());
        }
        for key in self.store.options().keys() {
            if !self.registry.contains_long(key) {
                self.errors.raise(ErrorKind::OptionUnknown, key.as_str())?;
            }
        }
        Ok(())
    }
}
