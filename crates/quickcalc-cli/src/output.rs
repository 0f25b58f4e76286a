//! Output management and formatting.
//!
//! [`OutputManager`] owns the writer the interactive protocol goes to.
//! It is generic over `io::Write` so the session can be driven against an
//! in-memory buffer in tests; production code uses [`OutputManager::stdout`]
//! which wraps a [`console::Term`].

use std::io::{self, IsTerminal, Write};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager<W: Write> {
    writer: W,
    quiet: bool,
    no_color: bool,
}

impl OutputManager<Term> {
    /// Build an `OutputManager` over stdout from parsed CLI flags and config.
    pub fn stdout(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let no_color = args.no_color
            || config.output.no_color
            || resolved_format == OutputFormat::Plain;

        Self {
            writer: Term::stdout(),
            quiet: args.quiet,
            no_color,
        }
    }
}

impl<W: Write> OutputManager<W> {
    /// Build an `OutputManager` over an arbitrary writer (used in tests).
    pub fn new(writer: W, quiet: bool, no_color: bool) -> Self {
        Self {
            writer,
            quiet,
            no_color,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Menu/banner text; suppressed in quiet mode.
    pub fn line(&mut self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.writer, "{msg}")
    }

    /// A prompt without trailing newline. Never suppressed — the session
    /// cannot proceed without the user knowing what to type. Flushed so the
    /// text appears before the blocking read.
    pub fn prompt(&mut self, msg: &str) -> io::Result<()> {
        write!(self.writer, "{msg}")?;
        self.writer.flush()
    }

    /// A computation result. Never suppressed; this line is the whole point
    /// of the invocation.
    pub fn result(&mut self, msg: &str) -> io::Result<()> {
        if self.no_color {
            writeln!(self.writer, "{msg}")
        } else {
            writeln!(self.writer, "{}", msg.green())
        }
    }

    /// An error line. *Not* suppressed in quiet mode — errors must always
    /// be visible.
    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        if self.no_color {
            writeln!(self.writer, "{msg}")
        } else {
            writeln!(self.writer, "{}", msg.red())
        }
    }

    /// Bold cyan header line; suppressed in quiet mode.
    pub fn header(&mut self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            writeln!(self.writer, "{text}")
        } else {
            writeln!(self.writer, "{}", text.cyan().bold())
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses menu output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Consume the manager and recover the writer (test inspection).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(quiet: bool) -> OutputManager<Vec<u8>> {
        OutputManager::new(Vec::new(), quiet, true)
    }

    fn written(out: OutputManager<Vec<u8>>) -> String {
        String::from_utf8(out.writer).unwrap()
    }

    #[test]
    fn quiet_suppresses_line_and_header() {
        let mut out = capture(true);
        out.line("menu entry").unwrap();
        out.header("banner").unwrap();
        assert!(written(out).is_empty());
    }

    #[test]
    fn result_not_suppressed_in_quiet_mode() {
        let mut out = capture(true);
        out.result("3.0 + 4.0 = 7.0").unwrap();
        assert_eq!(written(out), "3.0 + 4.0 = 7.0\n");
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let mut out = capture(true);
        out.error("Error: Cannot divide by zero.").unwrap();
        assert!(written(out).contains("divide by zero"));
    }

    #[test]
    fn prompt_has_no_trailing_newline() {
        let mut out = capture(false);
        out.prompt("Enter first number: ").unwrap();
        assert_eq!(written(out), "Enter first number: ");
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = OutputManager::new(Vec::new(), false, false);
        let plain = OutputManager::new(Vec::new(), false, true);
        assert!(colored.supports_color());
        assert!(!plain.supports_color());
    }

    #[test]
    fn quiet_flag_reported() {
        assert!(capture(true).is_quiet());
        assert!(!capture(false).is_quiet());
    }
}
