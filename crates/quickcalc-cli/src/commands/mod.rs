//! Command handlers. Each submodule owns one subcommand (or the default
//! menu) and stays thin: wire stdin/stdout into a session and run it.

pub mod area;
pub mod completions;
pub mod menu;
