//! Error types for grid validation with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G003) for documentation lookup:
//!
//! - G001: `Empty` (Grid has no rows)
//! - G002: `EmptyRow` (A grid row has no cells)
//! - G003: `Ragged` (A grid row's length differs from the first row)
//!
//! # Examples
//!
//! ## Basic Error Handling
//!
//! ```
//! use wordgrid::errors::GridError;
//! use wordgrid::grid::Grid;
//!
//! match Grid::new(vec![vec!['A', 'B'], vec!['C']]) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for grid validation.
///
/// Validation is fail-fast: the first offending row is reported and no
/// scanning takes place. The first row's length is authoritative when
/// deciding whether a later row is ragged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("row {row} has {found} cells (expected {expected})")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::Empty => "G001",
            GridError::EmptyRow { .. } => "G002",
            GridError::Ragged { .. } => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::Empty => "Grid has no rows",
            GridError::EmptyRow { .. } => "A grid row has no cells",
            GridError::Ragged { .. } => "A grid row's length differs from the first row",
        }
    }

    /// Returns a detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::Empty => "The grid must contain at least one row of letters before it can be scanned. When parsing puzzle text, a file with no non-blank lines also produces this error.",
            GridError::EmptyRow { .. } => "Every row must contain at least one cell. Row indexes in the error are 0-based.",
            GridError::Ragged { .. } => "Scanning requires a rectangular grid. The first row's length is authoritative; every later row must have exactly that many cells. Row indexes in the error are 0-based.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::Empty => Some("Provide at least one row of letters, e.g. a line like 'CAT' or 'C A T'"),
            GridError::EmptyRow { .. } => Some("Remove the empty row or fill it with letters"),
            GridError::Ragged { .. } => Some("Pad or trim the row so that every row has the same number of letters as the first row"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
