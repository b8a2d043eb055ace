#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum DomainError {
    #[error("Empty sample: at least one value is required")]
    EmptySample,
    #[error("Value at index {index} is not a finite number")]
    NotFinite { index: usize },
    #[error("Line {line}: cannot parse {text:?} as a number")]
    InvalidNumber { line: usize, text: String },
}
