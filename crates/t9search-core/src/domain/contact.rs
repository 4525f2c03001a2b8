use crate::domain::phone::{is_phone_number, normalize_plus_prefix, MAX_FIELD_LEN};
use crate::error::CoreError;
use crate::matching::encode_name;

/// One name/number record from the contact stream.
///
/// Construction validates field lengths and the number grammar and lowercases
/// the name, so every matching operation downstream can stay total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    pub fn new(name: &str, number: &str) -> Result<Self, CoreError> {
        if name.len() > MAX_FIELD_LEN {
            return Err(CoreError::NameTooLong(MAX_FIELD_LEN));
        }
        if number.len() > MAX_FIELD_LEN {
            return Err(CoreError::NumberTooLong(MAX_FIELD_LEN));
        }
        if !is_phone_number(number) {
            return Err(CoreError::InvalidNumber);
        }

        Ok(Self {
            name: name.to_ascii_lowercase(),
            number: number.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn encoded_name(&self) -> String {
        encode_name(&self.name)
    }

    pub fn normalized_number(&self) -> String {
        normalize_plus_prefix(&self.number)
    }
}
