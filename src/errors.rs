use thiserror::Error;

/// Error kinds surfaced by the core. `InvariantViolation` is never returned
/// from a public function: self-checks that detect it panic immediately
/// (see `Trie::assert_matches`), since state corruption must halt the
/// process rather than be handled by a caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrosswordError {
    #[error("template invalid: {reason}")]
    TemplateInvalid { reason: String },

    #[error("no admissible words in working dictionary{}", .date.as_ref().map(|d| format!(" for {}", d)).unwrap_or_default())]
    DictionaryEmpty { date: Option<String> },

    #[error("solver exhausted {attempts} attempt(s) without finding a fill")]
    Unsolvable { attempts: usize },

    #[error("invariant violation: {detail}")]
    InvariantViolation { detail: String },
}
