//! Command-line option parsing.
//!
//! | Module        | Responsibility |
//! |---------------|----------------|
//! | [`constants`] | Reserved option names, result codes, display level and output macros. |
//! | [`error`]     | `ErrorKind` codes, `Error`, per-parser catch policy, process-wide reporter. |
//! | [`util`]      | Path basename, exe-name matching, NUL split/join, text alignment. |
//! | [`convert`]   | Text to integer, float and list conversion; strict numeric shape checks. |
//! | [`option`]    | `OptionDef`, `OptionAttr` and the `-n #1 $ENV --name=?+ [x]` spec-string. |
//! | [`registry`]  | Ordered option definitions with short/long lookup. |
//! | [`store`]     | Received option values and positional arguments. |
//! | [`binding`]   | `Slot<T>` handles and the `Binding` sum type. |
//! | [`command`]   | Command and sub-command descriptions and handlers. |
//! | [`parser`]    | `Parser`: setup, `feed`, queries, help. |
//!
//! ```no_run
//! use cliop::{Parser, Slot};
//!
//! let verbose = Slot::new(false);
//! let mut parser = Parser::new();
//! parser
//!     .command_with("tool", "does things")
//!     .flag_bound('v', "verbose", "chatty output", &verbose)
//!     .set("-o #1 --output= [out.txt]", "output file");
//! let code = parser.feed_from_env();
//! if code != 0 {
//!     std::process::exit(code);
//! }
//! println!("verbose={} output={}", verbose.get(), parser.get("output"));
//! ```

pub mod constants;
pub mod error;
pub mod util;
pub mod convert;
pub mod option;
pub mod registry;
pub mod store;
pub mod binding;
pub mod command;
pub mod parser;

pub use binding::{Binding, Slot};
pub use command::{CommandHandler, CommandInfo, SubHandler};
pub use constants::{HELP_CODE, OPTION_NAME_CONFIG, OPTION_NAME_HELP, OPTION_NAME_VERSION};
pub use convert::FromArg;
pub use error::{
    report_error, set_error_handler, Error, ErrorHandler, ErrorKind, ErrorState, Result,
};
pub use option::{OptionAttr, OptionDef};
pub use parser::Parser;
pub use store::ArgumentStore;
