// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::config::DEFAULT_INPUT;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    version = crate::VERSION,
    about = "行数/単語数/最長単語の集計ツール"
)]
pub struct Args {
    /// Input text file to scan
    #[arg(value_hint = ValueHint::FilePath, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}
