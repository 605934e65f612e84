pub mod dictionary;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod history;
pub mod logging;
pub mod solver;
pub mod trie;

pub use errors::CrosswordError;
pub use generator::{ClueRecord, Generator, PuzzleRecord};
pub use grid::{extract_entries, Direction, Entry, Grid, Template};
pub use history::{DictionaryBuilder, RollingHistory};
pub use solver::solve;
pub use trie::Trie;

/// Strips every character from `string` not present in `allowed_chars`.
/// Used to sanitise a raw word before it is considered for the working
/// dictionary.
pub fn sanitise_string(string: &str, allowed_chars: &str) -> String {
    string.replace(|c: char| allowed_chars.find(c).is_none(), "")
}

const LOWERCASE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The single admissible-word check: `word` is nonempty-alphabetic-lowercase
/// and its length lies in `[min_len, max_len]`. A word is lowercase
/// alphabetic iff sanitising it against the lowercase alphabet leaves it
/// unchanged. Shared by the word-list loader, the daily dictionary builder,
/// and the solver's own word-set filter so the rule is defined once.
pub fn is_admissible_word(word: &str, min_len: usize, max_len: usize) -> bool {
    word.len() >= min_len && word.len() <= max_len && sanitise_string(word, LOWERCASE_ALPHABET) == word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitise_strips_disallowed_chars() {
        assert_eq!(sanitise_string("c4t!", "abcdefghijklmnopqrstuvwxyz"), "ct");
    }

    #[test]
    fn is_admissible_word_checks_case_alphabetic_and_length() {
        assert!(is_admissible_word("cat", 2, 4));
        assert!(!is_admissible_word("a", 2, 4));
        assert!(!is_admissible_word("supercalifragilistic", 2, 4));
        assert!(!is_admissible_word("CAT", 2, 4));
        assert!(!is_admissible_word("ca7", 2, 4));
        assert!(!is_admissible_word("", 0, 4));
    }
}
