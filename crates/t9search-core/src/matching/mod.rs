pub mod distance;
pub mod encode;
pub mod policy;
pub mod subsequence;

pub use distance::levenshtein;
pub use encode::{dialpad_digit, encode_name};
pub use policy::{matches, MatchMode};
pub use subsequence::is_subsequence;
