//! Thin word-list file loading: one word per line, lowercased and
//! alphabetic; non-alphabetic or empty lines are ignored.
//! Parsing/scoring the *source* of a word list (frequency, provenance,
//! curation) is explicitly out of scope — this is just enough I/O to run
//! the demo binary and integration tests against a real file.

use std::collections::HashSet;
use std::fs;

use crate::errors::CrosswordError;
use crate::is_admissible_word;

pub fn load_word_list(path: &str) -> Result<HashSet<String>, CrosswordError> {
    let contents = fs::read_to_string(path).map_err(|e| CrosswordError::DictionaryEmpty {
        date: Some(format!("could not read word list {path}: {e}")),
    })?;
    Ok(parse_word_list(&contents))
}

pub fn parse_word_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_admissible_word(word, 1, usize::MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_blank_and_non_alphabetic_lines() {
        let words = parse_word_list("cat\n\nDOG\n123\nbird-watch\nfish\n");
        assert!(words.contains("cat"));
        assert!(words.contains("dog"));
        assert!(words.contains("fish"));
        assert!(!words.contains("123"));
        assert!(!words.contains("bird-watch"));
    }
}
