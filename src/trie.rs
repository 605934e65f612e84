//! Mutable prefix trie over the working dictionary.
//!
//! Each node owns its children in a `HashMap<char, TrieNode>` (no arena, no
//! back-pointers — mutation always follows the word's own path, which can
//! be recomputed from the word itself). `count` is the number of currently
//! enabled words whose path passes through the node; the root's count is
//! the total number of enabled words. `disable`/`enable` are the sole
//! transactional primitive the solver uses to try and unwind placements.

use std::collections::HashMap;
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    count: usize,
    is_word_end: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie { root: TrieNode::new() }
    }

    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut trie = Trie::new();
        for word in words {
            trie.add(word);
        }
        trie
    }

    /// Inserts `word`, incrementing `count` on the root and every node
    /// along its path, and marking the terminal node as a word end.
    pub fn add(&mut self, word: &str) {
        let mut node = &mut self.root;
        node.count += 1;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(TrieNode::new);
            node.count += 1;
        }
        node.is_word_end = true;
    }

    /// Decrements `count` along `word`'s path without touching `is_word_end`,
    /// so the word temporarily stops being reported as usable. Panics if the
    /// word is not on the trie or is already fully disabled along its path —
    /// that can only happen from a double-disable bug in the solver, never
    /// from caller input, so it is an invariant violation, not a `Result`.
    pub fn disable(&mut self, word: &str) {
        let mut node = &mut self.root;
        debug_assert!(node.count > 0, "disabling {word:?} with empty root");
        node.count -= 1;
        for c in word.chars() {
            node = node
                .children
                .get_mut(&c)
                .unwrap_or_else(|| panic!("disable called on absent word {word:?}"));
            debug_assert!(node.count > 0, "disabling {word:?} past zero count");
            node.count -= 1;
        }
    }

    /// Inverse of `disable`. `disable`/`enable` must be exact inverses for
    /// any balanced sequence of calls per word.
    pub fn enable(&mut self, word: &str) {
        let mut node = &mut self.root;
        node.count += 1;
        for c in word.chars() {
            node = node
                .children
                .get_mut(&c)
                .unwrap_or_else(|| panic!("enable called on absent word {word:?}"));
            node.count += 1;
        }
    }

    /// Walks `prefix`; returns the empty set if any step is missing or any
    /// visited node has `count == 0`. Otherwise returns the set of child
    /// characters whose subtree currently has `count > 0`.
    pub fn next_letters(&self, prefix: &str) -> HashSet<char> {
        let mut node = &self.root;
        if node.count == 0 {
            return HashSet::new();
        }
        for c in prefix.chars() {
            node = match node.children.get(&c) {
                Some(child) => child,
                None => return HashSet::new(),
            };
            if node.count == 0 {
                return HashSet::new();
            }
        }
        node.children
            .iter()
            .filter(|(_, child)| child.count > 0)
            .map(|(c, _)| *c)
            .collect()
    }

    /// True iff `word` was added and is not currently disabled along its
    /// full path.
    pub fn is_word(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            node = match node.children.get(&c) {
                Some(child) => child,
                None => return false,
            };
        }
        node.is_word_end && node.count > 0
    }

    pub fn enabled_word_count(&self) -> usize {
        self.root.count
    }

    /// Halts the process if `self` is not structurally identical to
    /// `expected` — used after a solve attempt to confirm the trie unwound
    /// cleanly, leaving no leftover state behind.
    pub fn assert_matches(&self, expected: &Trie, context: &str) {
        if self != expected {
            panic!(
                "{}",
                crate::errors::CrosswordError::InvariantViolation {
                    detail: format!("trie state diverged from pre-solve snapshot: {context}"),
                }
            );
        }
    }
}
