//! Substring scanning over one axis's lines.
//!
//! The scanner takes a list of lines (one axis of the grid, already
//! linearized by [`crate::transform`]) and reports which candidate words
//! occur in them, reading forward or backward, ASCII-case-insensitively.
//! Matching is the humble `str::contains`; all the word-search cleverness
//! lives in how the lines were produced.
//!
//! Two modes:
//!
//! - [`ScanMode::Merged`] (the default) joins every line into a single
//!   haystack with no separator and also checks the character-reverse of
//!   that haystack. Because nothing marks line boundaries, a word may match
//!   across the seam between two unrelated lines. That is the behavior
//!   word-search consumers of this engine have always seen, so it stays the
//!   default.
//! - [`ScanMode::PerLine`] confines matches to a single line: a word is
//!   found only if it sits inside some individual line read forward or
//!   backward.
//!
//! Results preserve the candidate list's order and original casing; a word
//! appearing twice in the list is reported twice if it matches.

/// How line boundaries are treated during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Join all lines into one haystack; matches may span line seams.
    #[default]
    Merged,
    /// Match within individual lines only.
    PerLine,
}

/// Reports which `words` occur in `lines`, forward or backward, ignoring
/// ASCII case.
///
/// The returned words keep their original casing and list order; duplicates
/// in `words` produce duplicate results.
///
/// # Examples
///
/// ```
/// use wordgrid::scan::{scan_lines, ScanMode};
///
/// let lines = vec![vec!['T', 'A', 'C']];
/// let found = scan_lines(&lines, &["cat", "dog"], ScanMode::Merged);
/// assert_eq!(found, vec!["cat"]); // readable right-to-left
/// ```
#[must_use]
pub fn scan_lines(lines: &[Vec<char>], words: &[&str], mode: ScanMode) -> Vec<String> {
    match mode {
        ScanMode::Merged => scan_merged(lines, words),
        ScanMode::PerLine => scan_per_line(lines, words),
    }
}

/// Merged-haystack scan: one forward string, one reversed string, per axis.
fn scan_merged(lines: &[Vec<char>], words: &[&str]) -> Vec<String> {
    // 1. Build the forward haystack: every line, in order, no separator.
    let haystack: String = lines
        .iter()
        .flat_map(|line| line.iter())
        .map(char::to_ascii_uppercase)
        .collect();

    // 2. Reverse the whole haystack, seams included.
    let reversed: String = haystack.chars().rev().collect();

    // 3. Keep the words that appear in either direction.
    words
        .iter()
        .filter(|word| {
            let needle = word.to_ascii_uppercase();
            haystack.contains(&needle) || reversed.contains(&needle)
        })
        .map(ToString::to_string)
        .collect()
}

/// Per-line scan: each line is its own little haystack pair.
fn scan_per_line(lines: &[Vec<char>], words: &[&str]) -> Vec<String> {
    // Build each line's forward and reversed form once, not once per word.
    let line_pairs: Vec<(String, String)> = lines
        .iter()
        .map(|line| {
            let forward: String = line.iter().map(char::to_ascii_uppercase).collect();
            let backward: String = forward.chars().rev().collect();
            (forward, backward)
        })
        .collect();

    words
        .iter()
        .filter(|word| {
            let needle = word.to_ascii_uppercase();
            line_pairs
                .iter()
                .any(|(forward, backward)| forward.contains(&needle) || backward.contains(&needle))
        })
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(strs: &[&str]) -> Vec<Vec<char>> {
        strs.iter().map(|s| s.chars().collect()).collect()
    }

    #[test]
    fn test_forward_match() {
        let found = scan_lines(&lines(&["XCATX"]), &["CAT"], ScanMode::Merged);
        assert_eq!(found, vec!["CAT"]);
    }

    #[test]
    fn test_backward_match() {
        let found = scan_lines(&lines(&["XTACX"]), &["CAT"], ScanMode::Merged);
        assert_eq!(found, vec!["CAT"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let found = scan_lines(&lines(&["XYZ"]), &["CAT"], ScanMode::Merged);
        assert!(found.is_empty());
    }

    #[test]
    fn test_case_insensitive_both_ways() {
        assert_eq!(
            scan_lines(&lines(&["cat"]), &["CAT"], ScanMode::Merged),
            vec!["CAT"]
        );
        assert_eq!(
            scan_lines(&lines(&["CAT"]), &["cat"], ScanMode::Merged),
            vec!["cat"]
        );
    }

    #[test]
    fn test_output_echoes_original_casing() {
        let found = scan_lines(&lines(&["CAT"]), &["cAt"], ScanMode::Merged);
        assert_eq!(found, vec!["cAt"]);
    }

    #[test]
    fn test_output_preserves_word_order() {
        let found = scan_lines(&lines(&["CATDOG"]), &["DOG", "CAT"], ScanMode::Merged);
        assert_eq!(found, vec!["DOG", "CAT"]);
    }

    #[test]
    fn test_duplicate_words_reported_twice() {
        let found = scan_lines(&lines(&["CAT"]), &["CAT", "CAT"], ScanMode::Merged);
        assert_eq!(found, vec!["CAT", "CAT"]);
    }

    #[test]
    fn test_empty_word_list() {
        let found = scan_lines(&lines(&["CAT"]), &[], ScanMode::Merged);
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_string_word_always_matches() {
        assert_eq!(
            scan_lines(&lines(&["XY"]), &[""], ScanMode::Merged),
            vec![""]
        );
        assert_eq!(
            scan_lines(&lines(&["XY"]), &[""], ScanMode::PerLine),
            vec![""]
        );
    }

    #[test]
    fn test_word_longer_than_haystack() {
        let found = scan_lines(&lines(&["CAT"]), &["CATALOG"], ScanMode::Merged);
        assert!(found.is_empty());
    }

    #[test]
    fn test_default_mode_is_merged() {
        assert_eq!(ScanMode::default(), ScanMode::Merged);
    }

    mod seams {
        use super::*;

        #[test]
        fn test_merged_match_spans_line_seam() {
            // CA ends line 0, T starts line 1
            let input = lines(&["CA", "TX"]);
            assert_eq!(
                scan_lines(&input, &["CAT"], ScanMode::Merged),
                vec!["CAT"]
            );
        }

        #[test]
        fn test_reversed_merged_match_spans_line_seam() {
            // merged is TACX, whose reverse XCAT crosses the seam
            let input = lines(&["TA", "CX"]);
            assert_eq!(
                scan_lines(&input, &["CAT"], ScanMode::Merged),
                vec!["CAT"]
            );
        }

        #[test]
        fn test_per_line_rejects_seam_matches() {
            let input = lines(&["CA", "TX"]);
            assert!(scan_lines(&input, &["CAT"], ScanMode::PerLine).is_empty());
        }

        #[test]
        fn test_per_line_still_matches_within_a_line() {
            let input = lines(&["XXX", "TAC"]);
            assert_eq!(
                scan_lines(&input, &["CAT"], ScanMode::PerLine),
                vec!["CAT"]
            );
        }
    }
}
