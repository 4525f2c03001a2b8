use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("contact name is too long: its length exceeds {0} characters")]
    NameTooLong(usize),
    #[error("contact phone number is too long: its length exceeds {0} characters")]
    NumberTooLong(usize),
    #[error("invalid number format: expected digits 0-9, optionally prefixed by '+'")]
    InvalidNumber,
    #[error(
        "invalid search number: expected digits 0-9 (the first may be '+'), \
         at most {0} characters"
    )]
    InvalidQueryNumber(usize),
    #[error("invalid edit distance: expected a non-negative integer, got {0:?}")]
    InvalidDistance(String),
}
