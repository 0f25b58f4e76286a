//! QuickCalc Core - Operation Library
//!
//! This crate provides the pure computation layer for the quickcalc
//! command-line calculator. Every function here is deterministic, performs
//! no I/O, and reports failures through [`error::MathError`] rather than
//! panicking or returning sentinel values.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         quickcalc-cli (shell)           │
//! │   (menu, prompts, formatting, exit)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       quickcalc-core (this crate)       │
//! │   ops: add … tangent   geometry: areas  │
//! │   menu: Operation / Shape tokens        │
//! │         No I/O, no subscribers          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The crate emits `tracing` events at trace/debug level but never installs
//! a subscriber; that is the CLI's job.
//!
//! ## Usage
//!
//! ```rust
//! use quickcalc_core::prelude::*;
//!
//! let quotient = divide(10.0, 4.0).unwrap();
//! assert_eq!(quotient, 2.5);
//!
//! let op: Operation = "4".parse().unwrap();
//! assert_eq!(op, Operation::Divide);
//! ```

pub mod error;
pub mod geometry;
pub mod menu;
pub mod ops;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::geometry::{circle_area, rectangle_area, triangle_area};
    pub use crate::menu::{Operation, Shape, UnknownChoice};
    pub use crate::ops::{
        add, cosine, divide, factorial, logarithm, multiply, power, sine, subtract, tangent,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
