//! Error handling for the QuickCalc CLI.
//!
//! User-level calculator failures (unparsable numbers, unknown menu tokens,
//! mathematically undefined operations) are *not* errors at this layer: the
//! session prints a message and the process exits normally. `CliError`
//! covers genuine process failures only — I/O on the terminal and startup
//! problems — with suggestions and exit-code mapping.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Process-level CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// An I/O operation on stdin/stdout failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Logging or other startup machinery failed to initialise.
    #[error("Startup error: {message}")]
    Startup { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check that stdin and stdout are connected".into(),
            ],
            Self::Startup { message } => vec![
                format!("Startup issue: {message}"),
                "Try again without RUST_LOG set".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Calculator-level failures never reach this mapping; they exit 0 by
    /// design. Everything here is an internal/system failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::IoError { .. } | Self::Startup { .. } => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        let mut source = self.source();
        while let Some(err) = source {
            output.push_str(&format!(
                "\n  {} {}\n",
                "\u{2192}".dimmed(), // →
                err.to_string().dimmed()
            ));
            source = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        let mut src = self.source();
        while let Some(err) = src {
            out.push_str(&format!("  Caused by: {err}\n"));
            src = err.source();
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        tracing::error!("{}", self);
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn exit_code_is_internal() {
        let err: CliError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            CliError::Startup {
                message: "x".into()
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn io_error_carries_source() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::Startup {
            message: "no subscriber".into(),
        };
        let s = err.format_plain();
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn suggestions_non_empty() {
        let err: CliError = io::Error::other("e").into();
        assert!(!err.suggestions().is_empty());
    }
}
