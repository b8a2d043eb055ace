use std::ops::AddAssign;

use serde::Serialize;

/// Line, word and character counts of one text, in the manner of `wc`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl FileCounts {
    /// Lines are newline characters, words are whitespace-separated runs,
    /// chars are Unicode scalar values.
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.bytes().filter(|&b| b == b'\n').count(),
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }
}

impl AddAssign for FileCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.words += rhs.words;
        self.chars += rhs.chars;
    }
}
