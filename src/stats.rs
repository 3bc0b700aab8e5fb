/// Results of one run over the input file. A `None` field means that pass
/// failed or, for `longest`, that the file contained no word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub lines: Option<usize>,
    pub words: Option<usize>,
    pub longest: Option<String>,
}

/// Character and byte totals for a whole file, newlines included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharStats {
    pub chars: usize,
    pub bytes: usize,
}
