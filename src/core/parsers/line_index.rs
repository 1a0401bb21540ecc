/// Maps byte offsets in a source text to 1-indexed line numbers.
///
/// Stores the offset of every line end (each `\n`, plus the end of the text)
/// in ascending order, so a lookup is a binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_ends: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_ends: Vec<usize> = text.match_indices('\n').map(|(i, _)| i).collect();
        line_ends.push(text.len());
        Self { line_ends }
    }

    /// Line containing `offset`. An offset sitting on a `\n` belongs to the
    /// line that newline terminates.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_ends.partition_point(|&end| end < offset) + 1
    }

    pub fn line_count(&self) -> usize {
        self.line_ends.len()
    }
}
