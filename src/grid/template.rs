//! Template parsing: `(rows, cols, blocked)` plus a weekday-indexed file
//! format, e.g. `Monday: 5x5, [(0,0),(4,4)]` or `Monday, 5x5, []`.
//! Tolerates either a `:` or `,` separator after the day name, and keeps
//! the file loader next to the type it builds, the way
//! `CrosswordGridBuilder::from_file` does.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;

use chrono::Weekday;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::errors::CrosswordError;

/// `chrono::Weekday`'s own `FromStr` only accepts three-letter abbreviations
/// ("Mon"); the template format spells days out in full ("Monday"), so we
/// parse that ourselves.
fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

lazy_static! {
    static ref TEMPLATE_LINE: Regex =
        Regex::new(r"^([A-Za-z]+)[:,]\s*(\d+)x(\d+),\s*(\[.*\])$").unwrap();
    static ref BLOCKED_PAIR: Regex = Regex::new(r"\((\d+)\s*,\s*(\d+)\)").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    rows: usize,
    cols: usize,
    blocked: HashSet<(usize, usize)>,
}

impl Template {
    pub fn new(rows: usize, cols: usize, blocked: HashSet<(usize, usize)>) -> Result<Self, CrosswordError> {
        if rows == 0 || cols == 0 {
            return Err(CrosswordError::TemplateInvalid {
                reason: format!("non-positive size {rows}x{cols}"),
            });
        }
        for &(r, c) in &blocked {
            if r >= rows || c >= cols {
                return Err(CrosswordError::TemplateInvalid {
                    reason: format!("blocked cell ({r},{c}) outside {rows}x{cols} grid"),
                });
            }
        }
        Ok(Template { rows, cols, blocked })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn blocked(&self) -> &HashSet<(usize, usize)> {
        &self.blocked
    }

    pub fn max_word_len(&self) -> usize {
        self.rows.max(self.cols)
    }

    /// Parses one non-blank line of the template file format.
    pub fn parse_line(line: &str) -> Result<(Weekday, Template), CrosswordError> {
        let captures = TEMPLATE_LINE.captures(line).ok_or_else(|| CrosswordError::TemplateInvalid {
            reason: format!("unrecognised template line: {line:?}"),
        })?;

        let day_name = &captures[1];
        let weekday = parse_weekday(day_name).ok_or_else(|| CrosswordError::TemplateInvalid {
            reason: format!("unrecognised day name: {day_name:?}"),
        })?;
        let rows: usize = captures[2].parse().unwrap();
        let cols: usize = captures[3].parse().unwrap();

        let mut blocked = HashSet::new();
        for cap in BLOCKED_PAIR.captures_iter(&captures[4]) {
            let r: usize = cap[1].parse().unwrap();
            let c: usize = cap[2].parse().unwrap();
            blocked.insert((r, c));
        }

        let template = Template::new(rows, cols, blocked)?;
        Ok((weekday, template))
    }
}

/// Parses the whole template file: one line per weekday, blank lines
/// ignored. Not scoped to any particular set of weekdays — a file may
/// define as few or as many as it likes.
pub fn parse_templates_file(path: &str) -> Result<HashMap<Weekday, Template>, CrosswordError> {
    let contents = fs::read_to_string(path).map_err(|e| CrosswordError::TemplateInvalid {
        reason: format!("could not read template file {path}: {e}"),
    })?;
    parse_templates_str(&contents)
}

pub fn parse_templates_str(contents: &str) -> Result<HashMap<Weekday, Template>, CrosswordError> {
    let mut by_day = HashMap::new();
    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        debug!("Parsing template line: {line}");
        let (weekday, template) = Template::parse_line(line)?;
        if by_day.insert(weekday, template).is_some() {
            warn!("Duplicate template for {weekday:?}; keeping the later one");
        }
    }
    Ok(by_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_size() {
        assert!(Template::new(0, 5, HashSet::new()).is_err());
    }

    #[test]
    fn rejects_out_of_bounds_blocked_cell() {
        let mut blocked = HashSet::new();
        blocked.insert((5, 5));
        assert!(Template::new(3, 3, blocked).is_err());
    }

    #[test]
    fn parses_colon_form() {
        let (day, template) = Template::parse_line("Monday: 5x5, [(0,0),(4,4)]").unwrap();
        assert_eq!(day, Weekday::Mon);
        assert_eq!(template.rows(), 5);
        assert_eq!(template.cols(), 5);
        assert!(template.blocked().contains(&(0, 0)));
        assert!(template.blocked().contains(&(4, 4)));
    }

    #[test]
    fn parses_comma_form_with_empty_blocked() {
        let (day, template) = Template::parse_line("Monday, 5x5, []").unwrap();
        assert_eq!(day, Weekday::Mon);
        assert!(template.blocked().is_empty());
    }

    #[test]
    fn parses_multi_line_file_ignoring_blanks() {
        let contents = "Monday: 3x3, []\n\nTuesday, 4x4, [(0,0)]\n";
        let by_day = parse_templates_str(contents).unwrap();
        assert_eq!(by_day.len(), 2);
        assert_eq!(by_day[&Weekday::Mon].rows(), 3);
        assert_eq!(by_day[&Weekday::Tue].cols(), 4);
    }
}
