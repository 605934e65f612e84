//! Per-date orchestration: ties the daily dictionary builder, trie, solver,
//! and rolling history together across a date range. Mirrors a per-day
//! generate-and-record loop, minus the HTTP history fetch/upload that
//! would normally wrap it (out of scope here).

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use log::{info, warn};
use serde::Serialize;

use crate::errors::CrosswordError;
use crate::grid::{extract_entries, Template};
use crate::history::{DictionaryBuilder, RollingHistory};
use crate::solver::solve_with_retries;

/// `{"date", "board"}` export shape.
#[derive(Clone, Debug, Serialize)]
pub struct PuzzleRecord {
    pub date: String,
    pub board: Vec<Vec<Option<char>>>,
}

impl PuzzleRecord {
    /// Renders the record as a single NDJSON line, matching
    /// `json.dumps(rec, ensure_ascii=False) + '\n'` in the original's
    /// per-day write loop. Writing the line is in scope; opening the file
    /// and uploading it elsewhere is the wrapper's job, not this crate's.
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        Ok(format!("{}\n", serde_json::to_string(self)?))
    }
}

/// One record per entry. `clue` is always `None` here: clue writing via an
/// external language model is an external collaborator, not this crate's
/// concern.
#[derive(Clone, Debug, Serialize)]
pub struct ClueRecord {
    pub date: String,
    pub clue: Option<String>,
    pub direction: &'static str,
    pub row: usize,
    pub col: usize,
}

pub struct Generator {
    dictionary: DictionaryBuilder,
    history: RollingHistory,
    templates: HashMap<Weekday, Template>,
}

impl Generator {
    pub fn new(dictionary: DictionaryBuilder, history: RollingHistory, templates: HashMap<Weekday, Template>) -> Self {
        Generator { dictionary, history, templates }
    }

    pub fn history(&self) -> &RollingHistory {
        &self.history
    }

    /// Generates and records a single date's puzzle. Propagates
    /// `TemplateInvalid` if there is no template for `date`'s weekday,
    /// `DictionaryEmpty` if nothing is admissible, and `Unsolvable` if the
    /// attempt budget is exhausted.
    pub fn generate_for_date(&mut self, date: NaiveDate) -> Result<(PuzzleRecord, Vec<ClueRecord>), CrosswordError> {
        let date_iso = date.to_string();
        let weekday = date.weekday();

        let template = self.templates.get(&weekday).cloned().ok_or_else(|| CrosswordError::TemplateInvalid {
            reason: format!("no template configured for {weekday:?}"),
        })?;

        let words = self.dictionary.build_for_date(&self.history, &template, &date_iso)?;

        info!("Generating {date_iso} ({weekday:?}), {} usable words", words.len());
        let grid = solve_with_retries(&template, &words, &date_iso)?;

        let entries = extract_entries(&grid);
        let today_words: std::collections::HashSet<String> = entries
            .iter()
            .filter_map(|e| e.answer.clone())
            .collect();
        self.history.record(date, today_words);

        let clues: Vec<ClueRecord> = entries
            .iter()
            .map(|e| ClueRecord {
                date: date_iso.clone(),
                clue: None,
                direction: match e.direction {
                    crate::grid::Direction::Across => "across",
                    crate::grid::Direction::Down => "down",
                },
                row: e.start_row,
                col: e.start_col,
            })
            .collect();

        let record = PuzzleRecord { date: date_iso, board: grid.render() };
        Ok((record, clues))
    }

    /// Walks `start..=end` inclusive, generating each date and collecting
    /// a result per day. A day with no configured template logs a warning
    /// and is skipped (rather than aborting the whole range), matching the
    /// original's "Skipping {date} ({weekday}) - no template" behavior.
    pub fn generate_range(&mut self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, Result<PuzzleRecord, CrosswordError>)> {
        let mut results = Vec::new();
        let mut cursor = start;
        while cursor <= end {
            match self.generate_for_date(cursor) {
                Ok((record, _clues)) => results.push((cursor, Ok(record))),
                Err(CrosswordError::TemplateInvalid { reason }) => {
                    warn!("Skipping {cursor} ({:?}): {reason}", cursor.weekday());
                }
                Err(other) => results.push((cursor, Err(other))),
            }
            cursor = cursor.succ_opt().expect("date range within representable bounds");
        }
        results
    }
}
