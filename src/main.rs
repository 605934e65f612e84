use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};

use daily_crossword::grid::template::parse_templates_file;
use daily_crossword::{dictionary, DictionaryBuilder, Generator, RollingHistory};

/// Thin demo entry point: loads the fixture template and word list, solves
/// a handful of consecutive dates, and prints each rendered board. No CLI
/// flags, no HTTP, no clue generation, no upload — those remain external
/// collaborators.
fn main() {
    daily_crossword::logging::init_logger(false);

    let templates: HashMap<Weekday, _> = parse_templates_file("tests/resources/templates.txt")
        .expect("failed to load templates fixture");
    let base_words = dictionary::load_word_list("tests/resources/words.txt")
        .expect("failed to load word list fixture");

    let dictionary_builder = DictionaryBuilder::new(base_words, Default::default());
    let history = RollingHistory::new(daily_crossword::history::DEFAULT_WINDOW_DAYS);
    let mut generator = Generator::new(dictionary_builder, history, templates);

    let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();

    for (date, result) in generator.generate_range(start, end) {
        match result {
            Ok(record) => {
                println!("{}", record.date);
                for row in &record.board {
                    let line: String = row.iter().map(|c| c.unwrap_or('#')).collect();
                    println!("{line}");
                }
                print!("{}", record.to_ndjson_line().expect("PuzzleRecord always serializes"));
                println!();
            }
            Err(e) => println!("{date}: failed to generate ({e})"),
        }
    }
}
