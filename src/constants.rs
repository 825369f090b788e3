// constants.rs: Reserved option names, result codes, and display infrastructure.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Reserved option names ─────────────────────────────────────────────────────
pub const OPTION_NAME_HELP: &str = "help";
pub const OPTION_NAME_VERSION: &str = "version";
pub const OPTION_NAME_CONFIG: &str = "config";

/// Config path value that disables config loading.
pub const CONFIG_NONE: &str = "NONE";
/// Extension appended to the invocation name for the default config path.
pub const CONFIG_EXTENSION: &str = ".ini";

/// Key used by `get` and bindings to address all positional arguments.
pub const POSITIONAL_KEY: &str = "--";

/// Value stored for a flag that is present.
pub const FLAG_PRESENT: &str = "1";

/// Separator between accumulated values of a repeatable option.
pub const VALUE_SEPARATOR: char = '\0';

// ── Result codes ──────────────────────────────────────────────────────────────
/// Returned by `feed` after `--help` or `--version` was displayed.
pub const HELP_CODE: i32 = 0xABCDE0;
/// Returned by `feed` when `argv` is empty.
pub const EMPTY_ARGV_CODE: i32 = -1;

// ── Help layout ───────────────────────────────────────────────────────────────
pub const HELP_WIDTH_MAX: usize = 40;
pub const HELP_COLUMN_GAP: usize = 4;

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = more; 4 = verbose trace
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)      → print to stdout
//   display!(...)         → print to stderr
//   displaylevel!(l, ...) → print to stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
