//! Coloured status lines for the terminal.

use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colour only when writing to a terminal and NO_COLOR is unset.
fn paint(color: &str, icon: &str, to_stderr: bool) -> String {
    let tty = if to_stderr {
        std::io::stderr().is_terminal()
    } else {
        std::io::stdout().is_terminal()
    };
    if tty && std::env::var_os("NO_COLOR").is_none() {
        format!("{color}{BOLD}{icon}{RESET}")
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(FG_BLUE, ICON_INFO, false), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(FG_GREEN, ICON_OK, false), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(FG_YELLOW, ICON_WARN, false), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(FG_RED, ICON_ERR, true), msg);
}
