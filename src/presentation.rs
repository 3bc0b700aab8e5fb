use crate::stats::Report;
use std::io::{self, Write};

pub fn print_report(report: &Report) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Stdout write failures have nowhere useful to go
    let _ = write_report(&mut out, report);
}

/// Write one line per available statistic, in fixed order. The longest-word
/// line is omitted entirely when the file had no words, rather than printed
/// with a placeholder.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    if let Some(lines) = report.lines {
        writeln!(out, "Number of lines: {lines}")?;
    }
    if let Some(words) = report.words {
        writeln!(out, "Number of words: {words}")?;
    }
    if let Some(word) = &report.longest {
        writeln!(out, "Longest word: {word}")?;
    }
    Ok(())
}
