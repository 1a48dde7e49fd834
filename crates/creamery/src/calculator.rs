//! Four-function integer calculator.
//!
//! The calculator is a small state machine driven one key at a time through
//! [`Calculator::handle_input`]. It mirrors a pocket calculator without
//! operator precedence: pressing an operator captures the display as the left
//! operand, and `=` applies the most recent operator to that operand and the
//! number entered since. Pressing a second operator before `=` replaces the
//! first one (last operator wins).
//!
//! # Example
//!
//! ```
//! use creamery::calculator::{tokenize, Calculator};
//!
//! let mut calc = Calculator::new();
//! for token in tokenize("7 × 8 =").unwrap() {
//!     calc.handle_input(token);
//! }
//! assert_eq!(calc.display(), "56");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Display text shown after a division by zero or an overflow.
pub const ERROR_DISPLAY: &str = "Error";

/// Display text of a cleared calculator.
const ZERO_DISPLAY: &str = "0";

/// A binary operator awaiting its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Integer division, truncating toward zero.
    Divide,
}

impl Operator {
    /// Apply the operator as `lhs OP rhs`.
    ///
    /// Returns `None` when the result is undefined (division by zero) or does
    /// not fit in an `i64`.
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => lhs.checked_div(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "−"),
            Self::Multiply => write!(f, "×"),
            Self::Divide => write!(f, "÷"),
        }
    }
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal digit, `0..=9`.
    Digit(u8),
    /// One of the four operators.
    Operator(Operator),
    /// `AC`: reset everything.
    Clear,
    /// `⌫`: drop the last character of the display.
    Backspace,
    /// `=`: apply the pending operator.
    Equals,
}

impl FromStr for Token {
    type Err = Error;

    /// Parse a key label.
    ///
    /// Accepts the button glyphs (`−`, `×`, `÷`, `⌫`, `AC`) as well as the
    /// ASCII spellings people type (`-`, `*`, `x`, `/`, `backspace`, `clear`).
    fn from_str(label: &str) -> Result<Self> {
        let label = label.trim();
        let token = match label {
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "*" | "×" | "x" | "X" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "⌫" => Self::Backspace,
            _ => {
                if let [b] = label.as_bytes() {
                    if b.is_ascii_digit() {
                        return Ok(Self::Digit(b - b'0'));
                    }
                }
                let word = label.to_ascii_lowercase();
                match word.as_str() {
                    "ac" | "c" | "clear" => Self::Clear,
                    "backspace" | "bs" | "del" => Self::Backspace,
                    _ => return Err(Error::UnknownToken(label.to_string())),
                }
            }
        };
        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Clear => write!(f, "AC"),
            Self::Backspace => write!(f, "⌫"),
            Self::Equals => write!(f, "="),
        }
    }
}

/// Split a typed line into key presses.
///
/// Whitespace separates words. A word that is itself a key label (`AC`,
/// `del`, but not `12`) becomes one token; any other word is read one
/// character at a time, so `12×3=` yields five tokens.
///
/// # Errors
///
/// Returns [`Error::UnknownToken`] for a character that is not a key.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        if let Ok(token) = word.parse::<Token>() {
            tokens.push(token);
            continue;
        }
        for ch in word.chars() {
            let mut buf = [0u8; 4];
            tokens.push(ch.encode_utf8(&mut buf).parse()?);
        }
    }
    Ok(tokens)
}

/// Calculator state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculator {
    display: String,
    pending_operand: i64,
    pending_operation: Option<Operator>,
    awaiting_new_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: ZERO_DISPLAY.to_string(),
            pending_operand: 0,
            pending_operation: None,
            awaiting_new_entry: false,
        }
    }
}

impl Calculator {
    /// Start a fresh session showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a fresh session over `tokens` and return the final display.
    #[must_use]
    pub fn evaluate(tokens: impl IntoIterator<Item = Token>) -> String {
        let mut calc = Self::new();
        for token in tokens {
            calc.handle_input(token);
        }
        calc.display
    }

    /// The text currently on the display. Never empty.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The left operand captured by the last operator press.
    #[must_use]
    pub fn pending_operand(&self) -> i64 {
        self.pending_operand
    }

    /// The operator waiting for `=`, if any.
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operator> {
        self.pending_operation
    }

    /// Whether the next digit starts a new number.
    #[must_use]
    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Whether the display shows the error sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Feed one key press into the state machine.
    pub fn handle_input(&mut self, token: Token) {
        trace!(%token, display = %self.display, "calculator input");
        match token {
            Token::Digit(digit) => self.push_digit(digit),
            Token::Operator(op) => self.set_op(op),
            Token::Clear => self.clear(),
            Token::Backspace => self.backspace(),
            Token::Equals => self.calculate_result(),
        }
    }

    /// The display as a number. Anything unparsable, including the error
    /// sentinel, counts as zero.
    fn current_value(&self) -> i64 {
        self.display.parse().unwrap_or(0)
    }

    fn push_digit(&mut self, digit: u8) {
        let ch = char::from(b'0' + digit);
        if self.awaiting_new_entry || self.display == ZERO_DISPLAY || self.is_error() {
            self.display = ch.to_string();
            self.awaiting_new_entry = false;
            return;
        }

        let candidate = format!("{}{ch}", self.display);
        if candidate.parse::<i64>().is_ok() {
            self.display = candidate;
        } else {
            debug!(display = %self.display, "ignoring digit that would overflow the entry");
        }
    }

    fn set_op(&mut self, op: Operator) {
        self.pending_operand = self.current_value();
        self.pending_operation = Some(op);
        self.awaiting_new_entry = true;
    }

    fn clear(&mut self) {
        self.display = ZERO_DISPLAY.to_string();
        self.pending_operand = 0;
        self.pending_operation = None;
        self.awaiting_new_entry = false;
    }

    fn backspace(&mut self) {
        if self.is_error() || self.display.len() <= 1 {
            self.display = ZERO_DISPLAY.to_string();
            return;
        }
        self.display.pop();
        // A negative result can leave just the sign behind.
        if self.display == "-" {
            self.display = ZERO_DISPLAY.to_string();
        }
    }

    fn calculate_result(&mut self) {
        let current = self.current_value();
        if let Some(op) = self.pending_operation {
            self.display = match op.apply(self.pending_operand, current) {
                Some(value) => value.to_string(),
                None => {
                    debug!(lhs = self.pending_operand, %op, rhs = current, "undefined result");
                    ERROR_DISPLAY.to_string()
                }
            };
        }
        self.awaiting_new_entry = true;
    }
}
