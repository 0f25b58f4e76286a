//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// With no subcommand, `quickcalc` runs the full interactive menu: eleven
/// operations, one computation per invocation.
#[derive(Debug, Parser)]
#[command(
    name    = "quickcalc",
    bin_name = "quickcalc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "Obiechi Ebuka Samuel oesisu@outlook.com",
    about    = "\u{1f9ee} Menu-driven command-line calculator",
    long_about = "QuickCalc reads a menu selection and numeric inputs from \
                  standard input, performs one arithmetic, trigonometric, or \
                  area computation, and prints the formatted result.",
    after_help = "EXAMPLES:\n\
        \x20 quickcalc                 # full menu (11 operations)\n\
        \x20 quickcalc area            # area-only shape menu\n\
        \x20 echo '1\\n3\\n4' | quickcalc\n\
        \x20 quickcalc completions bash > /usr/share/bash-completion/completions/quickcalc",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; none means the full interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run only the area sub-menu (circle, rectangle, triangle).
    #[command(
        visible_alias = "a",
        about = "Calculate the area of a shape",
        after_help = "EXAMPLES:\n\
            \x20 quickcalc area            # then pick a shape and enter dimensions\n\
            \x20 printf '1\\n2\\n' | quickcalc area"
    )]
    Area(AreaArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 quickcalc completions bash > ~/.local/share/bash-completion/completions/quickcalc\n\
            \x20 quickcalc completions zsh  > ~/.zfunc/_quickcalc\n\
            \x20 quickcalc completions fish > ~/.config/fish/completions/quickcalc.fish"
    )]
    Completions(CompletionsArgs),
}

// ── area ──────────────────────────────────────────────────────────────────────

/// Arguments for `quickcalc area`.
#[derive(Debug, Args)]
pub struct AreaArgs {
    /// Decimal places in the printed area.
    #[arg(
        long = "decimals",
        value_name = "N",
        help = "Decimal places in the printed area (default: 2)"
    )]
    pub decimals: Option<u8>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `quickcalc completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
