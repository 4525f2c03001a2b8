use crate::domain::phone::{is_phone_number, normalize_plus_prefix, MAX_FIELD_LEN};
use crate::error::CoreError;
use crate::matching::MatchMode;

/// Two strings of at most `MAX_FIELD_LEN` characters never differ by more than 100 edits.
pub const MAX_DISTANCE_CAP: u32 = MAX_FIELD_LEN as u32 + 1;

const MAX_DISTANCE_DIGITS: usize = 3;

/// The searched number together with the mode it is matched in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    mode: MatchMode,
}

impl Query {
    pub fn new(raw: &str, mode: MatchMode) -> Result<Self, CoreError> {
        if raw.len() > MAX_FIELD_LEN || !is_phone_number(raw) {
            return Err(CoreError::InvalidQueryNumber(MAX_FIELD_LEN));
        }
        Ok(Self {
            raw: raw.to_string(),
            mode,
        })
    }

    /// No number and no switch: every contact is selected.
    pub fn match_all() -> Self {
        Self {
            raw: String::new(),
            mode: MatchMode::Exact,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn normalized(&self) -> String {
        normalize_plus_prefix(&self.raw)
    }
}

pub fn parse_max_distance(raw: &str) -> Result<u32, CoreError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidDistance(raw.to_string()));
    }
    if raw.len() > MAX_DISTANCE_DIGITS {
        return Ok(MAX_DISTANCE_CAP);
    }
    raw.parse::<u32>()
        .map_err(|_| CoreError::InvalidDistance(raw.to_string()))
}
