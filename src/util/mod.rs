//! Small helpers used across the parser:
//! - [`arg_utils`]   basename, exe-name matching, dash stripping, name validity
//! - [`strings`]     whitespace split, NUL split and join
//! - [`text_align`]  column alignment for help output

pub mod arg_utils;
pub mod strings;
pub mod text_align;

pub use arg_utils::{
    exe_name_match, invocation_name, is_invalid_name, last_name_from_path, trim_left_dashes,
};
pub use strings::{join_null, split_by_null, split_by_space};
pub use text_align::TextAlign;
