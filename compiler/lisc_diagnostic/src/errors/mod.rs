//! Embedded error documentation for `lisc explain` support.
//!
//! Each error code has a markdown file in this directory, embedded at
//! compile time and retrieved through [`ErrorDocs::get`].

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Scanner errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    (ErrorCode::E0003, include_str!("E0003.md")),
    (ErrorCode::E0004, include_str!("E0004.md")),
    // Evaluation errors (E6xxx)
    (ErrorCode::E6001, include_str!("E6001.md")),
    (ErrorCode::E6002, include_str!("E6002.md")),
    (ErrorCode::E6003, include_str!("E6003.md")),
    (ErrorCode::E6004, include_str!("E6004.md")),
    (ErrorCode::E6005, include_str!("E6005.md")),
    (ErrorCode::E6006, include_str!("E6006.md")),
    (ErrorCode::E6007, include_str!("E6007.md")),
    (ErrorCode::E6008, include_str!("E6008.md")),
];
