use crate::config::Config;
use crate::presentation;
use crate::scanner;
use crate::stats::Report;

pub fn run(config: &Config) {
    let report = scan(config);
    presentation::print_report(&report);
}

/// Run every statistic against the configured input. Each pass opens its own
/// handle; a failed pass is reported on stderr and leaves its field unset, and
/// the remaining passes still run.
pub fn scan(config: &Config) -> Report {
    let mut report = Report::default();

    match scanner::count_lines(&config.input) {
        Ok(n) => report.lines = Some(n),
        Err(e) => eprintln!("Error reading file: {e}"),
    }

    match scanner::count_words(&config.input) {
        Ok(n) => report.words = Some(n),
        Err(e) => eprintln!("Error processing file: {e}"),
    }

    match scanner::longest_word(&config.input) {
        Ok(w) => report.longest = w,
        Err(e) => eprintln!("Error processing file: {e}"),
    }

    report
}
