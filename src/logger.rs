//! Tagged console logging.
//!
//! A trimmed-down structured logger: colored, timestamped lines with a
//! per-subsystem tag. Debug output is gated on a `--verbose` flag captured
//! once at init.
//!
//! ```ignore
//! logger::init();
//! logger::info(LogTag::Scan, "Found 12 token accounts");
//! logger::error(LogTag::Rpc, "Endpoint unreachable");
//! ```

use chrono::Utc;
use colored::*;
use once_cell::sync::OnceCell;
use std::io::{ self, Write };

static VERBOSE: OnceCell<bool> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    Scan,
    Build,
    Rpc,
    Config,
    System,
}

impl LogTag {
    fn label(&self) -> &'static str {
        match self {
            LogTag::Scan => "SCAN",
            LogTag::Build => "BUILD",
            LogTag::Rpc => "RPC",
            LogTag::Config => "CONFIG",
            LogTag::System => "SYSTEM",
        }
    }
}

/// Initialize the logger from command-line arguments.
///
/// Call once at startup; scans the argument list for `--verbose`.
pub fn init() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let _ = VERBOSE.set(verbose);
}

pub fn is_verbose() -> bool {
    *VERBOSE.get().unwrap_or(&false)
}

pub fn info(tag: LogTag, message: &str) {
    emit("ℹ".blue().bold(), tag, message.normal());
}

pub fn warning(tag: LogTag, message: &str) {
    emit("⚠".yellow().bold(), tag, message.yellow());
}

pub fn error(tag: LogTag, message: &str) {
    emit("❌".red().bold(), tag, message.red());
}

pub fn success(tag: LogTag, message: &str) {
    emit("✅".green().bold(), tag, message.green());
}

/// Shown only when `--verbose` was passed
pub fn debug(tag: LogTag, message: &str) {
    if is_verbose() {
        emit("🐛".purple().bold(), tag, message.dimmed());
    }
}

fn emit(symbol: ColoredString, tag: LogTag, message: ColoredString) {
    let timestamp = Utc::now().format("%H:%M:%S");
    println!(
        "{} {} {} {}",
        symbol,
        tag.label().bold(),
        format!("[{}]", timestamp).dimmed(),
        message
    );
    let _ = io::stdout().flush();
}
