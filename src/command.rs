// command.rs: Command and sub-command descriptions.

use std::fmt;

use crate::parser::Parser;

/// Handler invoked after a successful parse. Receives the argv window that
/// starts at the (sub-)command name and the parser holding parsed values.
pub type CommandHandler = Box<dyn Fn(&[String], &Parser) -> i32>;

/// How a command is run once its arguments are parsed.
#[derive(Default)]
pub enum SubHandler {
    /// Nothing attached; the parser falls back to its run hook.
    #[default]
    None,
    /// Plain function that reads values from the parent parser.
    Handler(CommandHandler),
    /// Independent parser that runs its own full feed cycle.
    Nested(Box<Parser>),
}

impl fmt::Debug for SubHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubHandler::None => f.write_str("None"),
            SubHandler::Handler(_) => f.write_str("Handler(..)"),
            SubHandler::Nested(p) => f.debug_tuple("Nested").field(&p.arg0()).finish(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
    pub handler: SubHandler,
}

impl CommandInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        CommandInfo {
            name: name.into(),
            description: description.into(),
            handler: SubHandler::None,
        }
    }

    pub fn with_handler(mut self, handler: SubHandler) -> Self {
        self.handler = handler;
        self
    }
}
