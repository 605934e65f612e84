//! Rolling history window and the daily dictionary builder.
//!
//! Each new date's words are added to the union *before* the date that has
//! aged out of the window is subtracted, so `previously_used()` always
//! reflects exactly the union of answers placed on
//! `[date - window_days, date - 1]`.

use std::collections::BTreeMap;
use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use log::debug;

use crate::errors::CrosswordError;
use crate::grid::Template;
use crate::is_admissible_word;

pub const DEFAULT_WINDOW_DAYS: i64 = 100;

#[derive(Clone, Debug, Default)]
pub struct RollingHistory {
    window_days: i64,
    by_date: BTreeMap<NaiveDate, HashSet<String>>,
    previously_used: HashSet<String>,
}

impl RollingHistory {
    pub fn new(window_days: i64) -> Self {
        RollingHistory {
            window_days,
            by_date: BTreeMap::new(),
            previously_used: HashSet::new(),
        }
    }

    pub fn previously_used(&self) -> &HashSet<String> {
        &self.previously_used
    }

    /// Records `words` as placed on `date`, extends the rolling union, then
    /// drops whichever date has just aged out of the window.
    pub fn record(&mut self, date: NaiveDate, words: HashSet<String>) {
        self.previously_used.extend(words.iter().cloned());
        self.by_date.insert(date, words);

        let drop_day = date - Duration::days(self.window_days);
        if let Some(dropped_words) = self.by_date.get(&drop_day) {
            debug!("Rolling window dropping {drop_day} ({} words)", dropped_words.len());
            for word in dropped_words {
                self.previously_used.remove(word);
            }
        }
    }
}

/// Composes the working dictionary for a given date: base words, minus a
/// permanent exclusion list, minus the rolling history's `previously_used`
/// set, filtered to `[2, max(rows, cols)]`-length lowercase alphabetic
/// words.
#[derive(Clone, Debug)]
pub struct DictionaryBuilder {
    base_words: HashSet<String>,
    exclusions: HashSet<String>,
}

impl DictionaryBuilder {
    pub fn new(base_words: HashSet<String>, exclusions: HashSet<String>) -> Self {
        DictionaryBuilder { base_words, exclusions }
    }

    pub fn build_for_date(
        &self,
        history: &RollingHistory,
        template: &Template,
        date_iso: &str,
    ) -> Result<HashSet<String>, CrosswordError> {
        let max_len = template.max_word_len();
        let previously_used = history.previously_used();

        let usable: HashSet<String> = self
            .base_words
            .iter()
            .filter(|w| !self.exclusions.contains(*w))
            .filter(|w| !previously_used.contains(*w))
            .filter(|w| is_admissible_word(w, 2, max_len))
            .cloned()
            .collect();

        if usable.is_empty() {
            return Err(CrosswordError::DictionaryEmpty {
                date: Some(date_iso.to_string()),
            });
        }
        Ok(usable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet as HSet;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn s6_sliding_window_excludes_then_readmits() {
        let mut history = RollingHistory::new(100);
        let base = set(&["cat", "dog", "bird"]);
        let exclusions = HSet::new();
        let builder = DictionaryBuilder::new(base, exclusions);

        let d_minus_50 = date("2026-01-01");
        history.record(d_minus_50, set(&["cat"]));

        let target_date = d_minus_50 + Duration::days(50);
        let template = Template::new(3, 3, HSet::new()).unwrap();
        let working = builder
            .build_for_date(&history, &template, &target_date.to_string())
            .unwrap();
        assert!(!working.contains("cat"));

        // After day (d_minus_50 + 101), "cat" ages out of the 100-day window.
        let mut rolled = history.clone();
        let mut cursor = d_minus_50 + Duration::days(1);
        let cutoff = d_minus_50 + Duration::days(101);
        while cursor <= cutoff {
            rolled.record(cursor, HashSet::new());
            cursor += Duration::days(1);
        }
        assert!(!rolled.previously_used().contains("cat"));
    }

    #[test]
    fn dictionary_empty_when_all_words_excluded() {
        let base = set(&["cat"]);
        let exclusions = set(&["cat"]);
        let builder = DictionaryBuilder::new(base, exclusions);
        let history = RollingHistory::new(100);
        let template = Template::new(3, 3, HSet::new()).unwrap();
        assert!(builder.build_for_date(&history, &template, "2026-01-01").is_err());
    }

    #[test]
    fn dictionary_filters_by_length_and_case() {
        let base = set(&["cat", "supercalifragilistic", "CAT2", "ab"]);
        let exclusions = HSet::new();
        let builder = DictionaryBuilder::new(base, exclusions);
        let history = RollingHistory::new(100);
        let template = Template::new(3, 3, HSet::new()).unwrap();
        let usable = builder.build_for_date(&history, &template, "2026-01-01").unwrap();
        assert!(usable.contains("cat"));
        assert!(usable.contains("ab"));
        assert!(!usable.contains("supercalifragilistic"));
        assert!(!usable.contains("cat2"));
    }
}
