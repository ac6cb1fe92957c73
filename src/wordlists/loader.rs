//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use std::fs;
use std::path::Path;

/// Trim and lowercase one list entry, dropping blank lines
#[must_use]
pub fn normalize_entry(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Load words from a newline-delimited file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read, and
/// [`WordListError::Empty`] if it contains no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    if words.is_empty() {
        return Err(WordListError::Empty {
            origin: path.display().to_string(),
        });
    }

    tracing::debug!(path = %path.display(), words = words.len(), "read word list");
    Ok(words)
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize_entry).collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize_entry(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines_skips_blanks_and_normalizes() {
        let words = parse_lines("Silkworm\n\n  listen  \r\nTRIANGLE\n");
        assert_eq!(words, ["silkworm", "listen", "triangle"]);
    }

    #[test]
    fn parse_lines_empty() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n \n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_words() {
        let words = words_from_slice(&["listen", " ", "Silent"]);
        assert_eq!(words, ["listen", "silent"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/no/such/start.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("/no/such/start.txt"));
    }

    #[test]
    fn load_from_blank_file_is_empty_error() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_blank_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "\n   \n").unwrap();

        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, WordListError::Empty { .. }));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_words_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "listen\nsilkworm\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["listen", "silkworm"]);
    }
}
