//! The word-search engine: four axis scans, one concatenated answer.
//!
//! Each scan direction is just a different linearization of the same grid
//! handed to the same scanner:
//!
//! 1. the grid's own rows (horizontal words),
//! 2. the transpose (vertical words),
//! 3. the anti-diagonal grouping (one diagonal family),
//! 4. the anti-diagonal grouping of the row-mirrored grid (the other
//!    family).
//!
//! Because the scanner also checks the reversed haystack, four linearizations
//! cover all eight reading directions. The four result lists are concatenated
//! in exactly that order, duplicates retained, so a word readable as both a
//! row and a column shows up twice.
//!
//! The whole pass is deterministic and idempotent: no state, no I/O, just a
//! function of the grid and the word list.
//!
//! # Examples
//!
//! ```
//! use wordgrid::grid::Grid;
//! use wordgrid::searcher::search;
//!
//! let grid = Grid::parse_from_str("CAT\nXXX\nXXX")?;
//! assert_eq!(search(&grid, &["CAT", "DOG"]), vec!["CAT"]);
//! # Ok::<(), wordgrid::errors::GridError>(())
//! ```

use log::debug;

use crate::errors::GridError;
use crate::grid::Grid;
use crate::scan::{ScanMode, scan_lines};
use crate::transform::{diagonal_group, transpose};

/// Scans all four axes of `grid` for `words` in the default merged mode.
///
/// Returns one entry per (axis, matched word) pair: axis results are
/// concatenated rows-first, then columns, then each diagonal family, with
/// word-list order preserved inside each axis and original casing echoed.
#[must_use]
pub fn search(grid: &Grid, words: &[&str]) -> Vec<String> {
    search_with_mode(grid, words, ScanMode::default())
}

/// Scans all four axes of `grid` for `words` under an explicit [`ScanMode`].
#[must_use]
pub fn search_with_mode(grid: &Grid, words: &[&str], mode: ScanMode) -> Vec<String> {
    // 1. Rows as they are.
    let by_rows = scan_lines(grid.rows(), words, mode);
    debug!("row axis matched {} word(s)", by_rows.len());

    // 2. Columns, via the transpose.
    let by_columns = scan_lines(&transpose(grid.rows()), words, mode);
    debug!("column axis matched {} word(s)", by_columns.len());

    // 3. Anti-diagonals of the grid as given.
    let by_anti_diagonals = scan_lines(&diagonal_group(grid.rows()), words, mode);
    debug!("anti-diagonal axis matched {} word(s)", by_anti_diagonals.len());

    // 4. Main diagonals: mirror every row, then group anti-diagonals again.
    let by_main_diagonals = scan_lines(&diagonal_group(&grid.reversed_rows()), words, mode);
    debug!("main-diagonal axis matched {} word(s)", by_main_diagonals.len());

    let mut found = by_rows;
    found.extend(by_columns);
    found.extend(by_anti_diagonals);
    found.extend(by_main_diagonals);

    debug!(
        "search over {}x{} grid: {} of {} word(s) placed {} result(s)",
        grid.height(),
        grid.width(),
        count_distinct(&found),
        words.len(),
        found.len()
    );

    found
}

/// Validates raw rows and searches them in one call.
///
/// This is the convenience entry point for callers holding unvalidated cell
/// data. Validation is fail-fast: no axis is scanned unless the rows form a
/// proper rectangle.
///
/// # Errors
///
/// Returns a [`GridError`] if the rows are empty, contain an empty row, or
/// are ragged.
///
/// # Examples
///
/// ```
/// use wordgrid::errors::GridError;
/// use wordgrid::searcher::find_words;
///
/// let found = find_words(vec![vec!['C', 'A', 'T']], &["cat"])?;
/// assert!(found.contains(&"cat".to_string()));
///
/// let err = find_words(vec![vec!['A', 'B'], vec!['C']], &["cat"]).unwrap_err();
/// assert_eq!(err.code(), "G003");
/// # Ok::<(), GridError>(())
/// ```
pub fn find_words(rows: Vec<Vec<char>>, words: &[&str]) -> Result<Vec<String>, GridError> {
    let grid = Grid::new(rows)?;
    Ok(search(&grid, words))
}

fn count_distinct(found: &[String]) -> usize {
    let mut seen: Vec<&str> = found.iter().map(String::as_str).collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::new(lines.iter().map(|line| line.chars().collect()).collect()).unwrap()
    }

    mod scenarios {
        use super::*;

        #[test]
        fn test_word_in_a_row() {
            let g = grid(&["CAT", "XXX", "XXX"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT"]);
        }

        #[test]
        fn test_word_in_a_row_backwards() {
            let g = grid(&["TAC", "XXX", "XXX"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT"]);
        }

        #[test]
        fn test_word_on_the_anti_diagonal() {
            // C, A, T share row+col sums 2 and land in one diagonal line
            let g = grid(&["XXC", "XAX", "TXX"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT"]);
        }

        #[test]
        fn test_word_on_the_main_diagonal() {
            let g = grid(&["CXX", "XAX", "XXT"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT"]);
        }

        #[test]
        fn test_lowercase_grid_matches_uppercase_word() {
            let g = grid(&["cat", "xxx", "xxx"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT"]);
        }

        #[test]
        fn test_no_match_anywhere() {
            let g = grid(&["CA", "TX"]);
            assert_eq!(search(&g, &["XYZ"]), Vec::<String>::new());
        }

        #[test]
        fn test_word_on_two_axes_reported_twice() {
            // CAT is row 0 and column 0; nothing else spells it
            let g = grid(&["CAT", "AXX", "TXX"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT", "CAT"]);
        }
    }

    mod properties {
        use super::*;

        #[test]
        fn test_idempotent() {
            let g = grid(&["CAT", "AXX", "TXX"]);
            let words = ["CAT", "TAX", "AXE"];
            assert_eq!(search(&g, &words), search(&g, &words));
        }

        #[test]
        fn test_casing_the_grid_does_not_change_results() {
            let upper = grid(&["CAT", "DOG", "EEL"]);
            let lower = grid(&["cat", "dog", "eel"]);
            let words = ["cat", "DOG", "eEl", "COW"];
            assert_eq!(search(&upper, &words), search(&lower, &words));
        }

        #[test]
        fn test_row_mirroring_keeps_a_row_word_findable() {
            // forward in the original, backward branch after mirroring
            let g = grid(&["DOGS", "XXXX"]);
            let mirrored = Grid::new(g.reversed_rows()).unwrap();
            assert!(search(&g, &["DOG"]).contains(&"DOG".to_string()));
            assert!(search(&mirrored, &["DOG"]).contains(&"DOG".to_string()));
        }

        #[test]
        fn test_per_line_results_are_mirror_invariant() {
            // mirroring reverses each row, reorders columns, and swaps the
            // two diagonal families; none of that changes which words exist
            // when matches can't cross line seams
            let g = grid(&["CATX", "ADOG", "TXXX", "SXEW"]);
            let mirrored = Grid::new(g.reversed_rows()).unwrap();
            let words = ["CAT", "DOG", "CATS", "WEXT", "GOD", "XXT"];

            let mut a = search_with_mode(&g, &words, ScanMode::PerLine);
            let mut b = search_with_mode(&mirrored, &words, ScanMode::PerLine);
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }

        #[test]
        fn test_word_list_order_preserved_within_axis() {
            let g = grid(&["DOG", "CAT"]);
            assert_eq!(search(&g, &["CAT", "DOG"]), vec!["CAT", "DOG"]);
            assert_eq!(search(&g, &["DOG", "CAT"]), vec!["DOG", "CAT"]);
        }

        #[test]
        fn test_axis_concatenation_order() {
            // one planted word per axis, nowhere else:
            //   AB row 1, CD column 3, EF anti-diagonal, GH main diagonal
            let g = grid(&["XXXC", "ABXD", "GXXE", "XHFX"]);
            let words = ["GH", "EF", "CD", "AB"];
            assert_eq!(search(&g, &words), vec!["AB", "CD", "EF", "GH"]);
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn test_empty_word_list() {
            let g = grid(&["CAT"]);
            assert_eq!(search(&g, &[]), Vec::<String>::new());
        }

        #[test]
        fn test_single_row_grid_matches_on_every_axis() {
            // every linearization of a single row merges back into the same
            // string, so each axis reports the word
            let g = grid(&["CAT"]);
            assert_eq!(search(&g, &["CAT"]), vec!["CAT"; 4]);
        }

        #[test]
        fn test_single_cell_grid() {
            let g = grid(&["A"]);
            assert_eq!(search(&g, &["A"]), vec!["A"; 4]);
            assert_eq!(search(&g, &["AB"]), Vec::<String>::new());
        }

        #[test]
        fn test_empty_string_word_matches_once_per_axis() {
            let g = grid(&["AB", "CD"]);
            assert_eq!(search(&g, &[""]), vec![""; 4]);
        }

        #[test]
        fn test_duplicate_list_entries_each_reported() {
            let g = grid(&["CAT", "XXX", "XXX"]);
            assert_eq!(search(&g, &["CAT", "CAT"]), vec!["CAT", "CAT"]);
        }

        #[test]
        fn test_word_longer_than_grid_is_not_an_error() {
            let g = grid(&["CAT", "XXX", "XXX"]);
            assert_eq!(search(&g, &["CATASTROPHE"]), Vec::<String>::new());
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_find_words_searches_valid_rows() {
            let found = find_words(
                vec![vec!['C', 'A', 'T'], vec!['X', 'X', 'X'], vec!['X', 'X', 'X']],
                &["CAT"],
            )
            .unwrap();
            assert_eq!(found, vec!["CAT"]);
        }

        #[test]
        fn test_find_words_rejects_ragged_rows_before_scanning() {
            let err = find_words(vec![vec!['C', 'A', 'T'], vec!['X']], &["CAT"]).unwrap_err();
            assert_eq!(
                err,
                GridError::Ragged {
                    row: 1,
                    expected: 3,
                    found: 1
                }
            );
        }

        #[test]
        fn test_find_words_rejects_empty_grid() {
            assert_eq!(find_words(vec![], &["CAT"]).unwrap_err(), GridError::Empty);
        }
    }
}
