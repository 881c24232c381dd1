//! Crash report printed instead of the default panic message.
//!
//! The report names the command and the input file being processed, which
//! is usually enough to reproduce a crash on an exported listing.

use std::panic::PanicHookInfo;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 66;

/// What the process was doing when it crashed.
#[derive(Debug, Clone, Default)]
pub struct CrashContext {
    pub command: String,
    pub input: Option<PathBuf>,
}

/// Install the crash report hook. Call once, early in `main`.
pub fn install_panic_hook(context: CrashContext) {
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("{}", render_crash_report(info, &context));
    }));
}

fn render_crash_report(info: &PanicHookInfo<'_>, context: &CrashContext) -> String {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        "GIVEBANK CRASH REPORT".to_string(),
        format!("Version: {VERSION}"),
        format!("Platform: {}", std::env::consts::OS),
        format!("Panic: {}", truncate(&panic_message(info), WIDTH)),
        format!("Location: {}", truncate(&location, WIDTH)),
        format!("Command: {}", context.command),
    ];
    if let Some(input) = &context.input {
        lines.push(format!("Input: {}", truncate(&input.display().to_string(), WIDTH)));
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.join("\n")
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
