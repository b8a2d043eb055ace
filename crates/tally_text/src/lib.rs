//! tally_text: word and line counting.
//!
//! Normalizes text to lowercase a-z words, counts them, and ranks the result.
//! Entry points: `top_words(text, n)`, `WordCounts`, `FileCounts::of` and
//! `long_lines`.
mod counts;
mod lines;
mod normalize;
mod wc;

pub use counts::{WordCounts, WordFreq, top_words};
pub use lines::{DEFAULT_MAX_LINE_LEN, LongLine, long_lines};
pub use normalize::{normalize, words};
pub use wc::FileCounts;
