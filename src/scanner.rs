use crate::error::{Result, ScanError};
use crate::stats::CharStats;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| ScanError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

fn read_err(path: &Path, source: std::io::Error) -> ScanError {
    ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

/// Count the lines of the file at `path`.
///
/// A trailing line without a terminator still counts; an empty file has zero
/// lines. The file handle is released when the pass ends, on success or error.
pub fn count_lines(path: &Path) -> Result<usize> {
    let reader = open(path)?;
    let mut count = 0;
    for line in reader.lines() {
        line.map_err(|e| read_err(path, e))?;
        count += 1;
    }
    Ok(count)
}

/// Count the whitespace-delimited words of the file at `path`.
///
/// A word is a maximal run of non-whitespace characters within a line, so
/// consecutive delimiters collapse and leading/trailing whitespace yields no
/// empty tokens.
pub fn count_words(path: &Path) -> Result<usize> {
    let reader = open(path)?;
    let mut count = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| read_err(path, e))?;
        count += line.split_whitespace().count();
    }
    Ok(count)
}

/// Find the longest word of the file at `path`, or `None` if it has no words.
///
/// Length is measured in characters. Ties keep the word that occurs first in
/// file order, so the comparison is strictly greater-than during the scan.
pub fn longest_word(path: &Path) -> Result<Option<String>> {
    let reader = open(path)?;
    let mut longest: Option<String> = None;
    let mut max_len = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| read_err(path, e))?;
        for word in line.split_whitespace() {
            let len = word.chars().count();
            if len > max_len {
                max_len = len;
                longest = Some(word.to_string());
            }
        }
    }
    Ok(longest)
}

/// Count the characters and bytes of the file at `path`, newlines included.
pub fn count_chars(path: &Path) -> Result<CharStats> {
    let mut reader = open(path)?;
    let mut stats = CharStats::default();
    loop {
        let buf = reader.fill_buf().map_err(|e| read_err(path, e))?;
        if buf.is_empty() {
            break;
        }
        stats.chars += bytecount::num_chars(buf);
        stats.bytes += buf.len();
        let len = buf.len();
        reader.consume(len);
    }
    Ok(stats)
}
