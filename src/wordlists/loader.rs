//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordLists;
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Load a directory laid out like `data/`: `{len}/answers.txt` plus an
/// optional `{len}/allowed.txt` for every supported length present
///
/// # Errors
///
/// Returns an I/O error if an existing list cannot be read.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> io::Result<WordLists> {
    let dir = dir.as_ref();
    let mut lists = WordLists::default();

    for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
        let answers_path = dir.join(length.to_string()).join("answers.txt");
        if !answers_path.exists() {
            continue;
        }

        let answers = load_from_file(&answers_path)?;
        let allowed_path = dir.join(length.to_string()).join("allowed.txt");
        let allowed = if allowed_path.exists() {
            load_from_file(&allowed_path)?
        } else {
            Vec::new()
        };

        debug!(length, answers = answers.len(), allowed = allowed.len(), "loaded word lists");
        lists.insert(length, answers, allowed);
    }

    Ok(lists)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use letreco::wordlists::loader::words_from_slice;
/// use letreco::wordlists::ANSWERS_5;
///
/// let words = words_from_slice(ANSWERS_5);
/// assert_eq!(words.len(), ANSWERS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["prato", "festa", "limão"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "PRATO");
        assert_eq!(words[2].text(), "LIMÃO");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["prato", "paralelepipedo", "sol", "p4to", "festa"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "PRATO");
        assert_eq!(words[1].text(), "FESTA");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_dir_reads_per_length_lists() {
        let dir = tempfile::tempdir().unwrap();
        let five = dir.path().join("5");
        fs::create_dir_all(&five).unwrap();
        fs::write(five.join("answers.txt"), "PRATO\nFESTA\n\n").unwrap();
        fs::write(five.join("allowed.txt"), "ZEBRA\n").unwrap();
        let four = dir.path().join("4");
        fs::create_dir_all(&four).unwrap();
        fs::write(four.join("answers.txt"), "ERRO\n").unwrap();

        let lists = load_from_dir(dir.path()).unwrap();

        assert_eq!(lists.lengths(), vec![4, 5]);
        assert_eq!(lists.answers(5).len(), 2);
        assert!(lists.is_valid_guess("ZEBRA"));
        assert!(lists.is_valid_guess("ERRO"));
        assert!(lists.answers(6).is_empty());
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("nope.txt")).is_err());
    }
}
