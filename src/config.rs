use std::path::PathBuf;

use crate::args::Args;

/// Input path used when no argument is given.
pub const DEFAULT_INPUT: &str = "resources/input.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { input: args.input }
    }
}
