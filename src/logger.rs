//! Colored build logging.
//!
//! Everything this crate prints goes through the `log!` macro, which
//! tags each line with a bracketed module prefix:
//!
//! ```ignore
//! log!("config"; "loaded {} (page size {})", path.display(), size);
//! log!("collect"; "posts: {} published", count);
//! ```
//!
//! Long single-line messages are cut at the terminal edge so build logs
//! never wrap mid-line.

use colored::{ColoredString, Colorize};
use crossterm::terminal;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Columns assumed when terminal width detection fails
const FALLBACK_WIDTH: usize = 120;

/// Detected terminal width, fetched once on first log
static WIDTH: OnceLock<usize> = OnceLock::new();

fn terminal_width() -> usize {
    *WIDTH.get_or_init(|| terminal::size().map_or(FALLBACK_WIDTH, |(cols, _)| cols as usize))
}

/// Log a line under a module tag.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Write one tagged line to stdout.
pub fn log(module: &str, message: &str) {
    let tag = tag(module);
    // Room left on the row after "[module] "
    let room = terminal_width().saturating_sub(module.len() + 3);

    let mut out = stdout().lock();
    if message.contains('\n') {
        // Multiline messages pass through uncut
        writeln!(out, "{tag} {message}").ok();
    } else {
        writeln!(out, "{tag} {}", clip(message, room)).ok();
    }
    out.flush().ok();
}

/// Bracketed, colored module tag
fn tag(module: &str) -> ColoredString {
    let tag = format!("[{module}]");
    match module {
        "config" => tag.bright_blue().bold(),
        "collect" => tag.bright_green().bold(),
        "error" => tag.bright_red().bold(),
        _ => tag.bright_yellow().bold(),
    }
}

/// Cut a single-line message to at most `max` bytes, on a char boundary
fn clip(message: &str, max: usize) -> &str {
    if message.len() <= max {
        return message;
    }

    let end = message
        .char_indices()
        .map(|(at, _)| at)
        .take_while(|&at| at <= max)
        .last()
        .unwrap_or(0);
    &message[..end]
}
