//! Error codes for all evaluator diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E6001`) with the first digit
//! indicating the stage that raised it. Used for `explain` lookups.

use std::fmt;

/// Error codes for all evaluator diagnostics.
///
/// Format: E#### where first digit indicates the stage:
/// - E0xxx: Scanner errors
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Unexpected character in input
    E0001,
    /// Malformed form keyword after `(`
    E0002,
    /// Invalid integer literal
    E0003,
    /// Input too large to address
    E0004,

    // Evaluation Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Closing `)` with no open form
    E6002,
    /// Input ended inside a form
    E6003,
    /// Form closed before it produced a value
    E6004,
    /// Integer overflow in arithmetic
    E6005,
    /// Operand given to a form that already has its value
    E6006,
    /// Input continues after the complete expression
    E6007,
    /// Nesting deeper than the configured limit
    E6008,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        // Scanner
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        // Evaluation
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
    ];

    /// Get the numeric code as a string (e.g., "E6001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            // Evaluation
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E6001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
