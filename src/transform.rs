//! Grid re-linearizations: the alternate views each scan axis reads.
//!
//! The scanner itself only understands "a list of lines". This module turns
//! a rectangular grid of rows into the other line layouts: the transpose
//! (columns as lines) and the anti-diagonal grouping. The fourth axis (main
//! diagonals) never gets its own function; mirroring every row with
//! [`crate::grid::Grid::reversed_rows`] swaps the two diagonal families, so
//! the orchestrator reuses [`diagonal_group`] on the mirrored rows.
//!
//! Anti-diagonal grouping collects cells sharing `row + col`. For this grid:
//!
//! ```text
//! A B
//! C D
//! ```
//!
//! the groups are `[A]`, `[B, C]`, `[D]`. Each line runs top-right to
//! bottom-left.
//!
//! All functions here assume rectangular input, which a validated
//! [`crate::grid::Grid`] guarantees.

/// One axis's lines: the shape the scanner consumes.
pub type LineGrid = Vec<Vec<char>>;

/// Re-expresses the grid column-major: cell (r, c) moves to line c,
/// position r.
///
/// An R-by-C input yields C lines of length R.
///
/// # Examples
///
/// ```
/// use wordgrid::grid::Grid;
/// use wordgrid::transform::transpose;
///
/// let grid = Grid::parse_from_str("AB\nCD")?;
/// assert_eq!(transpose(grid.rows()), vec![vec!['A', 'C'], vec!['B', 'D']]);
/// # Ok::<(), wordgrid::errors::GridError>(())
/// ```
#[must_use]
pub fn transpose(rows: &[Vec<char>]) -> LineGrid {
    let width = rows.first().map_or(0, Vec::len);

    (0..width)
        .map(|c| rows.iter().map(|row| row[c]).collect())
        .collect()
}

/// Groups cells sharing the same `row + col` into anti-diagonal lines.
///
/// An R-by-C input yields R+C-1 lines, indexed 0 through R+C-2 by the shared
/// sum. Rows are walked top to bottom, so within a line cells appear in
/// increasing row order (equivalently, decreasing column order).
#[must_use]
pub fn diagonal_group(rows: &[Vec<char>]) -> LineGrid {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut lines: LineGrid = vec![Vec::new(); height + width - 1];
    for (r, row) in rows.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            lines[r + c].push(cell);
        }
    }

    lines
}
