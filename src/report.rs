//! Reporting of validation progress, warnings and errors.
//!
//! The validator never prints directly. It talks to a [`Reporter`] handed to
//! it at construction; [`Output`] is the terminal implementation with three
//! modes:
//! - Human: colored, prefixed lines for terminal display
//! - Json: one JSON event per line for programmatic consumption
//! - Quiet: only errors are emitted
//!
//! Verbose trace (`log`/`info`) is only written when verbose mode is on.

use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Sink for validation diagnostics.
pub trait Reporter {
    /// Fine-grained progress trace ("Checking component: X").
    fn log(&self, msg: &str);
    /// Secondary detail attached to the preceding trace line.
    fn info(&self, msg: &str);
    /// Non-fatal inconsistency.
    fn warn(&self, msg: &str);
    /// Fatal inconsistency; the run aborts right after.
    fn error(&self, msg: &str);

    /// Components that no configuration reference reaches.
    fn unused(&self, ids: &[String]) {
        for id in ids {
            self.warn(&format!("Unused component: {}", id));
        }
    }
}

/// Check if quiet mode is forced via the `BOMCHECK_QUIET` environment variable
pub fn is_quiet() -> bool {
    std::env::var("BOMCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON-formatted structured output
    Json,
    /// Silent mode - only errors
    Quiet,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    verbose: bool,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            verbose: false,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            verbose: false,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false,
        }
    }

    /// Enable or disable the verbose trace
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Output a heading line, e.g. the database currently being validated
    pub fn step(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let line = if self.is_tty {
                    msg.bold().to_string()
                } else {
                    msg.to_string()
                };
                self.write_line(&line);
            }
            OutputMode::Json => self.write_json("step", msg, None),
            OutputMode::Quiet => {}
        }
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✓".green().to_string()
                } else {
                    "✓".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json("success", msg, None),
            OutputMode::Quiet => {}
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn write_json(&self, level: &str, msg: &str, extra: Option<(&str, serde_json::Value)>) {
        if let Ok(mut writer) = self.writer.lock() {
            let mut obj = json!({
                "level": level,
                "msg": msg,
            });

            if let Some((key, value)) = extra {
                obj[key] = value;
            }

            let _ = writeln!(writer, "{}", obj);
        }
    }
}

impl Reporter for Output {
    fn log(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("log", msg, None),
            OutputMode::Quiet => {}
        }
    }

    fn info(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                let line = format!("  {}", msg);
                if self.is_tty {
                    self.write_line(&line.dimmed().to_string());
                } else {
                    self.write_line(&line);
                }
            }
            OutputMode::Json => self.write_json("info", msg, None),
            OutputMode::Quiet => {}
        }
    }

    fn warn(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "Warning:".yellow().to_string()
                } else {
                    "Warning:".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json("warning", msg, None),
            OutputMode::Quiet => {}
        }
    }

    fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "Error:".red().bold().to_string()
                } else {
                    "Error:".to_string()
                };
                self.write_line("");
                self.write_line(&format!("{} {}", prefix, msg));
                self.write_line("");
            }
            OutputMode::Json => self.write_json("error", msg, None),
            // Errors always output, even in quiet mode
            OutputMode::Quiet => self.write_line(&format!("Error: {}", msg)),
        }
    }

    fn unused(&self, ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        match self.mode {
            OutputMode::Human => {
                self.write_line("Unused components:");
                for id in ids {
                    self.write_line(&format!("  - {:?}", id));
                }
            }
            OutputMode::Json => {
                self.write_json("unused", "Unused components", Some(("components", json!(ids))))
            }
            OutputMode::Quiet => {}
        }
    }
}
