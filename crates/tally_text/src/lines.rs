use serde::Serialize;

pub const DEFAULT_MAX_LINE_LEN: usize = 80;

const PREVIEW_CHARS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LongLine {
    /// 1-based.
    pub line: usize,
    pub len: usize,
    pub preview: String,
}

/// Lines of `text` with more than `max_len` characters, terminator excluded.
pub fn long_lines(text: &str, max_len: usize) -> Vec<LongLine> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let len = line.chars().count();
        if len > max_len {
            out.push(LongLine {
                line: idx + 1,
                len,
                preview: line.chars().take(PREVIEW_CHARS).collect(),
            });
        }
    }
    out
}
