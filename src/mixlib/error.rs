use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MixError {
    #[error("line {line}: unable to parse {text:?} as an integer")]
    Parse { line: usize, text: String },
    #[error("need at least 2 values to mix, got {0}")]
    DegenerateInput(usize),
    #[error("no element with value 0")]
    MissingZero,
    #[error("{0} elements with value 0, expected exactly one")]
    AmbiguousZero(usize),
    #[error("{value} * {key} overflows")]
    Overflow { value: i64, key: i64 },
    #[error("checksum overflows")]
    ChecksumOverflow,
}
