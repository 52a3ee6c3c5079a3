//! `word_list` — Loading the list of words to search for.
//!
//! The input is plain text with one word per line. Surrounding whitespace is
//! trimmed and blank lines are skipped; nothing else is touched. In
//! particular the list is NOT deduplicated, sorted, or case-normalized:
//! the output contract echoes each word exactly as the caller wrote it, once
//! per axis it matches on and once per time it appears in the list, so all
//! three properties are observable and must survive loading.
//!
//! Like the grid loader, this module is **WASM-friendly**: `parse_from_str`
//! works everywhere (pass it text fetched via JavaScript), and
//! `load_from_path` is a native-only convenience.

/// The words to look for, in caller order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    /// Words exactly as given: original casing, original order, duplicates
    /// intact.
    pub words: Vec<String>,
}

impl WordList {
    /// Parses a word list from an in-memory string, one word per line.
    ///
    /// Lines are trimmed; blank lines are skipped. Order, casing, and
    /// duplicates are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid::word_list::WordList;
    ///
    /// let list = WordList::parse_from_str("CAT\n\n  dog  \nCAT\n");
    /// assert_eq!(list.words, vec!["CAT", "dog", "CAT"]);
    /// ```
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        WordList { words }
    }

    /// Native-only convenience: read a word-list file and parse it.
    ///
    /// Not available in WebAssembly builds, where there is no filesystem to
    /// read from.
    ///
    /// # Errors
    ///
    /// Returns an error (naming the offending path) if the file can't be
    /// read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Borrowed view of the words, in the shape the search API takes.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }
}
