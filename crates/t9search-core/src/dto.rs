use crate::domain::Contact;
use crate::evaluate::MatchedOn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMatchDto {
    pub name: String,
    pub number: String,
    pub matched_on: MatchedOn,
}

impl ContactMatchDto {
    pub fn new(contact: &Contact, matched_on: MatchedOn) -> Self {
        Self {
            name: contact.name().to_string(),
            number: contact.number().to_string(),
            matched_on,
        }
    }
}
