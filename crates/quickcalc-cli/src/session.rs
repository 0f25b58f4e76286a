//! The interactive calculator session.
//!
//! A session is a two-state machine: print the menu, then perform exactly
//! one operation and finish. All numeric prompts go through one
//! parse-or-fail reader, so every dispatch path checks input failure the
//! same way. Parse, domain, and selection failures print a message and end
//! the session normally; only real I/O failures surface as [`CliError`].
//!
//! The session is generic over its reader and writer so tests can drive it
//! with in-memory buffers; `main` wires stdin and stdout.

use std::f64::consts::E;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use quickcalc_core::prelude::*;

use crate::error::CliResult;
use crate::output::OutputManager;

/// Printed when a numeric prompt receives unparsable text.
const INVALID_NUMBER: &str = "Error: Invalid input. Please enter a valid number.";

/// An interactive session over a reader/writer pair.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    out: OutputManager<W>,
    area_decimals: u8,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: OutputManager<W>, area_decimals: u8) -> Self {
        Self {
            input,
            out,
            area_decimals,
        }
    }

    // ── Top-level menu ────────────────────────────────────────────────────

    /// Run the full eleven-entry menu: one operation, then done.
    pub fn run_menu(&mut self) -> CliResult<()> {
        self.out.header("===== QuickCalc =====")?;
        self.out.line("Available operations:")?;
        self.out.line("1. Addition (+)")?;
        self.out.line("2. Subtraction (-)")?;
        self.out.line("3. Multiplication (*)")?;
        self.out.line("4. Division (/)")?;
        self.out.line("5. Factorial (!)")?;
        self.out.line("6. Power (x^y)")?;
        self.out.line("7. Logarithm (log)")?;
        self.out.line("8. Sine (sin)")?;
        self.out.line("9. Cosine (cos)")?;
        self.out.line("10. Tangent (tan)")?;
        self.out
            .line("11. Area Calculation (Circle, Rectangle, Triangle)")?;

        self.out.prompt("Choose an operation (1-11): ")?;
        let token = self.read_token()?;

        let op = match token.parse::<Operation>() {
            Ok(op) => op,
            Err(e) => {
                debug!(token = %e.token, "unrecognized menu choice");
                self.out.error("Error: Invalid operation choice.")?;
                return Ok(());
            }
        };

        info!(choice = %token, op = ?op, "dispatching operation");

        match op {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => self.run_binary(op),
            Operation::Factorial => self.run_factorial(),
            Operation::Logarithm => self.run_logarithm(),
            Operation::Sine => self.run_trig("sine", "sin", sine),
            Operation::Cosine => self.run_trig("cosine", "cos", cosine),
            Operation::Tangent => self.run_trig("tangent", "tan", tangent),
            Operation::Area => self.run_area(),
        }
    }

    // ── Two-operand operations ────────────────────────────────────────────

    /// Arithmetic and power: two prompts, both validated before computing.
    fn run_binary(&mut self, op: Operation) -> CliResult<()> {
        let first = self.prompt_number("Enter first number: ")?;
        let second = self.prompt_number("Enter second number: ")?;

        let (Some(a), Some(b)) = (first, second) else {
            self.out.error("Invalid number input.")?;
            return Ok(());
        };

        match op {
            Operation::Add => self.print_binary(a, op, b, add(a, b)),
            Operation::Subtract => self.print_binary(a, op, b, subtract(a, b)),
            Operation::Multiply => self.print_binary(a, op, b, multiply(a, b)),
            Operation::Divide => match divide(a, b) {
                Ok(r) => self.print_binary(a, op, b, r),
                Err(e) => self.print_math_error(e),
            },
            Operation::Power => {
                let r = power(a, b);
                let line = format!("{}^{} = {}", fmt_num(a), fmt_num(b), fmt_num(r));
                self.out.result(&line).map_err(Into::into)
            }
            _ => Ok(()),
        }
    }

    fn print_binary(&mut self, a: f64, op: Operation, b: f64, r: f64) -> CliResult<()> {
        let line = format!("{} {op} {} = {}", fmt_num(a), fmt_num(b), fmt_num(r));
        self.out.result(&line).map_err(Into::into)
    }

    // ── Single-operand operations ─────────────────────────────────────────

    fn run_factorial(&mut self) -> CliResult<()> {
        let Some(n) = self.prompt_number("Enter a number for factorial: ")? else {
            self.out.error(INVALID_NUMBER)?;
            return Ok(());
        };

        match factorial(n) {
            Ok(r) => {
                let line = format!("{}! = {r}", fmt_num(n));
                self.out.result(&line).map_err(Into::into)
            }
            Err(e) => self.print_math_error(e),
        }
    }

    fn run_logarithm(&mut self) -> CliResult<()> {
        // Both prompts are issued before validation, preserving the
        // two-question protocol even when the value is bad.
        let value = self.prompt_number("Enter number for logarithm: ")?;
        self.out.prompt("Enter base (optional, default is e): ")?;
        let base_token = self.read_token()?;

        let Some(x) = value else {
            self.out.error(INVALID_NUMBER)?;
            return Ok(());
        };

        // Unparsable, empty, or zero base means "not provided": default to e.
        let base = match base_token.parse::<f64>() {
            Ok(b) if b != 0.0 => b,
            _ => E,
        };

        match logarithm(x, base) {
            Ok(r) => {
                let line = format!("log({}) = {}", fmt_num(x), fmt_num(r));
                self.out.result(&line).map_err(Into::into)
            }
            Err(e) => self.print_math_error(e),
        }
    }

    /// Trigonometric entries. The angle prompt is validated like every
    /// other numeric prompt.
    fn run_trig(&mut self, name: &str, label: &str, func: fn(f64) -> f64) -> CliResult<()> {
        let prompt = format!("Enter angle in degrees for {name}: ");
        let Some(degrees) = self.prompt_number(&prompt)? else {
            self.out.error(INVALID_NUMBER)?;
            return Ok(());
        };

        let r = func(degrees);
        let line = format!("{label}({}) = {}", fmt_num(degrees), fmt_num(r));
        self.out.result(&line).map_err(Into::into)
    }

    // ── Area sub-menu ─────────────────────────────────────────────────────

    /// The three-entry shape menu. Also the whole program in the area-only
    /// variant (`quickcalc area`).
    pub fn run_area(&mut self) -> CliResult<()> {
        self.out.line("Choose a shape to calculate its area:")?;
        self.out.line("1. Circle")?;
        self.out.line("2. Rectangle")?;
        self.out.line("3. Triangle")?;

        self.out.prompt("Enter the number of your choice: ")?;
        let token = self.read_token()?;

        let shape = match token.parse::<Shape>() {
            Ok(shape) => shape,
            Err(e) => {
                debug!(token = %e.token, "unrecognized shape choice");
                self.out.error("Invalid choice. Please choose 1, 2, or 3.")?;
                return Ok(());
            }
        };

        info!(shape = %shape, "calculating area");

        match shape {
            Shape::Circle => {
                let Some(radius) = self.prompt_number("Enter the radius of the circle: ")? else {
                    self.out.error(INVALID_NUMBER)?;
                    return Ok(());
                };
                self.print_area(shape, circle_area(radius))
            }
            Shape::Rectangle => {
                let length = self.prompt_number("Enter the length of the rectangle: ")?;
                let width = self.prompt_number("Enter the width of the rectangle: ")?;
                let (Some(length), Some(width)) = (length, width) else {
                    self.out.error("Invalid input.")?;
                    return Ok(());
                };
                self.print_area(shape, rectangle_area(length, width))
            }
            Shape::Triangle => {
                let base = self.prompt_number("Enter the base of the triangle: ")?;
                let height = self.prompt_number("Enter the height of the triangle: ")?;
                let (Some(base), Some(height)) = (base, height) else {
                    self.out.error("Invalid input.")?;
                    return Ok(());
                };
                self.print_area(shape, triangle_area(base, height))
            }
        }
    }

    fn print_area(&mut self, shape: Shape, area: f64) -> CliResult<()> {
        let prec = self.area_decimals as usize;
        let line = format!("The area of the {shape} is: {area:.prec$}");
        self.out.result(&line).map_err(Into::into)
    }

    // ── Input helpers ─────────────────────────────────────────────────────

    /// Read one line and strip surrounding whitespace. EOF yields an empty
    /// token, which fails whichever parse comes next — every path already
    /// handles that.
    fn read_token(&mut self) -> CliResult<String> {
        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(buf.trim().to_string())
    }

    /// The single parse-or-fail numeric reader behind every prompt.
    /// `Ok(None)` means the text was not a valid number; the caller decides
    /// which message to print.
    fn prompt_number(&mut self, prompt: &str) -> CliResult<Option<f64>> {
        self.out.prompt(prompt)?;
        let token = self.read_token()?;
        match token.parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                debug!(token = %token, "numeric input failed to parse");
                Ok(None)
            }
        }
    }

    fn print_math_error(&mut self, e: MathError) -> CliResult<()> {
        debug!(error = ?e, "domain error");
        self.out.error(&e.to_string()).map_err(Into::into)
    }
}

// ── Numeric formatting ────────────────────────────────────────────────────────

/// Echo a float the way the menu protocol expects: integral finite values
/// get one decimal (`3.0`), everything else uses `f64` Display.
pub(crate) fn fmt_num(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
