//! Menu-choice value objects.
//!
//! The shell reads raw tokens from stdin; these enums are the validated
//! form. Parsing is the only place that knows the numeric menu tokens, and
//! `Display` yields the label used when formatting results.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A token that matches no menu entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized choice '{token}'")]
pub struct UnknownChoice {
    pub token: String,
}

// ── Top-level operations ──────────────────────────────────────────────────────

/// The eleven top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Factorial,
    Power,
    Logarithm,
    Sine,
    Cosine,
    Tangent,
    Area,
}

impl Operation {
    /// `true` for the entries that prompt for two operands and print
    /// `"{a} {op} {b} = {r}"`.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power
        )
    }

    /// `true` for the single-angle trigonometric entries.
    pub fn is_trig(self) -> bool {
        matches!(self, Self::Sine | Self::Cosine | Self::Tangent)
    }
}

impl FromStr for Operation {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Subtract),
            "3" => Ok(Self::Multiply),
            "4" => Ok(Self::Divide),
            "5" => Ok(Self::Factorial),
            "6" => Ok(Self::Power),
            "7" => Ok(Self::Logarithm),
            "8" => Ok(Self::Sine),
            "9" => Ok(Self::Cosine),
            "10" => Ok(Self::Tangent),
            "11" => Ok(Self::Area),
            other => Err(UnknownChoice {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    /// The operator or function label used in result lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Factorial => write!(f, "!"),
            Self::Power => write!(f, "^"),
            Self::Logarithm => write!(f, "log"),
            Self::Sine => write!(f, "sin"),
            Self::Cosine => write!(f, "cos"),
            Self::Tangent => write!(f, "tan"),
            Self::Area => write!(f, "area"),
        }
    }
}

// ── Shape sub-menu ────────────────────────────────────────────────────────────

/// The three entries of the area sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Rectangle,
    Triangle,
}

impl FromStr for Shape {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Circle),
            "2" => Ok(Self::Rectangle),
            "3" => Ok(Self::Triangle),
            other => Err(UnknownChoice {
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Rectangle => write!(f, "rectangle"),
            Self::Triangle => write!(f, "triangle"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_token_parses() {
        let expected = [
            ("1", Operation::Add),
            ("2", Operation::Subtract),
            ("3", Operation::Multiply),
            ("4", Operation::Divide),
            ("5", Operation::Factorial),
            ("6", Operation::Power),
            ("7", Operation::Logarithm),
            ("8", Operation::Sine),
            ("9", Operation::Cosine),
            ("10", Operation::Tangent),
            ("11", Operation::Area),
        ];
        for (token, op) in expected {
            assert_eq!(token.parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn tokens_are_trimmed() {
        // stdin lines arrive with trailing newlines already stripped, but
        // stray whitespace from the user should not matter
        assert_eq!(" 4 ".parse::<Operation>().unwrap(), Operation::Divide);
        assert_eq!("2\t".parse::<Shape>().unwrap(), Shape::Rectangle);
    }

    #[test]
    fn unknown_tokens_are_selection_errors() {
        let err = "12".parse::<Operation>().unwrap_err();
        assert_eq!(err.token, "12");
        assert!("abc".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
        assert!("4".parse::<Shape>().is_err());
        assert!("0".parse::<Shape>().is_err());
    }

    #[test]
    fn binary_classification() {
        assert!(Operation::Add.is_binary());
        assert!(Operation::Power.is_binary());
        assert!(!Operation::Factorial.is_binary());
        assert!(!Operation::Sine.is_binary());
    }

    #[test]
    fn trig_classification() {
        assert!(Operation::Sine.is_trig());
        assert!(Operation::Cosine.is_trig());
        assert!(Operation::Tangent.is_trig());
        assert!(!Operation::Logarithm.is_trig());
    }

    #[test]
    fn display_labels() {
        assert_eq!(Operation::Add.to_string(), "+");
        assert_eq!(Operation::Power.to_string(), "^");
        assert_eq!(Operation::Sine.to_string(), "sin");
        assert_eq!(Shape::Circle.to_string(), "circle");
        assert_eq!(Shape::Rectangle.to_string(), "rectangle");
        assert_eq!(Shape::Triangle.to_string(), "triangle");
    }
}
