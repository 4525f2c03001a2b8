pub mod domain;
pub mod dto;
pub mod error;
pub mod evaluate;
pub mod matching;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use evaluate::{should_include, ContactEvaluator, MatchedOn};
pub use matching::*;
