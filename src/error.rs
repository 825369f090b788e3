//! Error kinds, the per-parser catch policy, and the process-wide reporter.
//!
//! Nothing in this crate fails unless the caller asked for it: every
//! questionable condition goes through [`ErrorState::raise`], which only
//! produces an [`Error`] when that [`ErrorKind`] is in the parser's catch set.
//! Otherwise the condition is tolerated and parsing continues.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::constants::HELP_CODE;

/// Every condition the parser can be asked to treat as a failure.
///
/// Codes are distinct, start right after [`HELP_CODE`], and are never 0.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    CommandUnknown = HELP_CODE + 1,
    OptionIncomplete,
    ConfigUnreadable,
    ConfigInvalid,
    ArgumentInvalid,
    ArgtypeUnmatch,
    PositionBind,
    OptionRequired,
    OptionUnknown,
    OptionInvalid,
    OptionRedefine,
    FlagInvalid,
    FlagRedefine,
    SubcmdInvalid,
    SubcmdRedefine,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 15] = [
        ErrorKind::CommandUnknown,
        ErrorKind::OptionIncomplete,
        ErrorKind::ConfigUnreadable,
        ErrorKind::ConfigInvalid,
        ErrorKind::ArgumentInvalid,
        ErrorKind::ArgtypeUnmatch,
        ErrorKind::PositionBind,
        ErrorKind::OptionRequired,
        ErrorKind::OptionUnknown,
        ErrorKind::OptionInvalid,
        ErrorKind::OptionRedefine,
        ErrorKind::FlagInvalid,
        ErrorKind::FlagRedefine,
        ErrorKind::SubcmdInvalid,
        ErrorKind::SubcmdRedefine,
    ];

    /// Integer result code returned by `feed` for this kind.
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<ErrorKind> {
        ErrorKind::ALL.iter().copied().find(|k| k.code() == code)
    }

    /// Static description, without context.
    pub fn tip(self) -> &'static str {
        match self {
            ErrorKind::CommandUnknown => "unsupported command",
            ErrorKind::OptionIncomplete => "no argument for the last option",
            ErrorKind::ConfigUnreadable => "can't read config file",
            ErrorKind::ConfigInvalid => "config line may confuse or invalid",
            ErrorKind::ArgumentInvalid => "argument may confuse or invalid",
            ErrorKind::ArgtypeUnmatch => "argument bound type is unmatch",
            ErrorKind::PositionBind => "position argument bound index mistake",
            ErrorKind::OptionRequired => "required option absent",
            ErrorKind::OptionUnknown => "unexpected option encountered",
            ErrorKind::OptionInvalid => "option name may confuse or invalid",
            ErrorKind::OptionRedefine => "option name is redefined",
            ErrorKind::FlagInvalid => "flag letter invalid",
            ErrorKind::FlagRedefine => "flag letter is redefined",
            ErrorKind::SubcmdInvalid => "sub-command name may confuse or invalid",
            ErrorKind::SubcmdRedefine => "sub-command name is redefined",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tip())
    }
}

/// A caught error: its kind plus free-text context (option name, offending
/// token, file path, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.kind, .context))]
pub struct Error {
    kind: ErrorKind,
    context: String,
}

fn render(kind: &ErrorKind, context: &str) -> String {
    if context.is_empty() {
        kind.tip().to_owned()
    } else {
        format!("{}: {}", kind.tip(), context)
    }
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error { kind, context: context.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// ── Process-wide reporter ─────────────────────────────────────────────────────

/// Callback invoked once for every raised error.
pub type ErrorHandler = Arc<dyn Fn(&Error) + Send + Sync>;

static ERROR_HANDLER: RwLock<Option<ErrorHandler>> = RwLock::new(None);

/// Install `handler` (or restore the default with `None`), returning the
/// handler that was installed before.
///
/// There is no automatic scoping: a caller that overrides the handler
/// temporarily must put the old one back.
pub fn set_error_handler(handler: Option<ErrorHandler>) -> Option<ErrorHandler> {
    let mut slot = ERROR_HANDLER.write().unwrap_or_else(|e| e.into_inner());
    std::mem::replace(&mut *slot, handler)
}

/// Forward `err` to the installed handler, or print `E{code}: {message}` to
/// stderr when none is installed.
pub fn report_error(err: &Error) {
    let handler = ERROR_HANDLER
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone();
    match handler {
        Some(handler) => handler(err),
        None => crate::displaylevel!(1, "E{}: {}\n", err.code(), err),
    }
}

// ── Catch policy ──────────────────────────────────────────────────────────────

/// Which kinds are surfaced, and the most recent surfaced error.
#[derive(Debug, Clone, Default)]
pub struct ErrorState {
    caught: BTreeSet<ErrorKind>,
    last: Option<Error>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catch(&mut self, kind: ErrorKind) {
        self.caught.insert(kind);
    }

    pub fn ignore(&mut self, kind: ErrorKind) {
        self.caught.remove(&kind);
    }

    pub fn catch_all(&mut self) {
        self.caught.extend(ErrorKind::ALL);
    }

    pub fn is_catch(&self, kind: ErrorKind) -> bool {
        self.caught.contains(&kind)
    }

    /// Raise `kind` with `context`.
    ///
    /// When the kind is caught the error is recorded as the last error,
    /// reported, and returned as `Err`. Otherwise nothing happens.
    pub fn raise(&mut self, kind: ErrorKind, context: impl Into<String>) -> Result<()> {
        if !self.is_catch(kind) {
            return Ok(());
        }
        let err = Error::new(kind, context);
        report_error(&err);
        self.last = Some(err.clone());
        Err(err)
    }

    /// `Err` with the recorded error, if one is pending.
    pub fn pending(&self) -> Result<()> {
        match &self.last {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub fn last(&self) -> Option<&Error> {
        self.last.as_ref()
    }

    /// Code of the last error, 0 when none.
    pub fn code(&self) -> i32 {
        self.last.as_ref().map_or(0, Error::code)
    }

    /// Set the last error by code; 0 clears it. Unknown codes and kinds
    /// outside the catch set are ignored.
    pub fn set_error(&mut self, code: i32, context: &str) {
        if code == 0 {
            self.clear();
            return;
        }
        if let Some(kind) = ErrorKind::from_code(code) {
            let _ = self.raise(kind, context);
        }
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
