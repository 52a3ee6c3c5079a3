//! Letter-grid model and parsing.
//!
//! A [`Grid`] is a rectangular matrix of cells. Construction validates shape
//! up front so that scanning never has to deal with ragged input: the first
//! row's length is authoritative and every later row must match it.
//!
//! Two entry points are provided. [`Grid::new`] takes already-split rows
//! (useful for programmatic callers and the wasm boundary), while
//! [`Grid::parse_from_str`] accepts puzzle text where rows are lines and
//! whitespace between letters is ignored, so both `CAT` and `C A T` parse to
//! the same row.
//!
//! # Examples
//!
//! ```
//! use wordgrid::grid::Grid;
//!
//! let grid = Grid::parse_from_str("D O G\nC A T")?;
//! assert_eq!(grid.height(), 2);
//! assert_eq!(grid.width(), 3);
//! # Ok::<(), wordgrid::errors::GridError>(())
//! ```

use crate::errors::GridError;

/// A validated rectangular grid of letters.
///
/// Cells are stored as given; case policy lives in the scanner, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from pre-split rows, validating rectangularity.
    ///
    /// Fails fast on the first offending row: [`GridError::Empty`] when there
    /// are no rows at all, [`GridError::EmptyRow`] when a row has no cells,
    /// and [`GridError::Ragged`] when a row's length differs from row 0's.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] describing the first shape violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid::errors::GridError;
    /// use wordgrid::grid::Grid;
    ///
    /// assert!(Grid::new(vec![vec!['A', 'B'], vec!['C', 'D']]).is_ok());
    ///
    /// let err = Grid::new(vec![vec!['A', 'B'], vec!['C']]).unwrap_err();
    /// assert_eq!(err, GridError::Ragged { row: 1, expected: 2, found: 1 });
    /// ```
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.len();

        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if cells.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        Ok(Self { rows })
    }

    /// Parses puzzle text into a grid.
    ///
    /// Each non-blank line becomes one row. Lines are trimmed (so CRLF input
    /// is fine), blank lines are skipped, and whitespace between letters is
    /// dropped. The surviving rows then go through the same validation as
    /// [`Grid::new`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when no non-blank line is found, or
    /// [`GridError::Ragged`] when the stripped rows are not all the same
    /// length.
    pub fn parse_from_str(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        Self::new(rows)
    }

    /// Reads and parses a grid file.
    ///
    /// Read failures are reported with the offending path; shape violations
    /// carry their `G`-code message through [`From<GridError>`] for
    /// [`std::io::Error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or the contents fail
    /// validation.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        let path_ref = path.as_ref();

        let text = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read grid from '{}': {}", path_ref.display(), e),
            )
        })?;

        Self::parse_from_str(&text).map_err(std::io::Error::from)
    }

    /// The grid's rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of columns (cells per row).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The rows with each row's cells reversed (a horizontal mirror).
    ///
    /// Mirroring swaps which diagonal family a line belongs to, which is how
    /// the scanner covers main diagonals with one counter-diagonal walk.
    #[must_use]
    pub fn reversed_rows(&self) -> Vec<Vec<char>> {
        self.rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect()
    }
}
