use crate::domain::{Contact, Query};
use crate::matching::{matches, MatchMode};
use serde::{Deserialize, Serialize};

/// Which representation of a contact satisfied the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedOn {
    /// The number, with a leading `'+'` read as `'0'`.
    Number,
    /// The dialpad encoding of the name.
    Name,
}

/// Applies one query to a stream of contacts.
///
/// The query number is normalized once up front; each contact is then
/// checked by number first and by encoded name second. The raw name is
/// never compared directly.
#[derive(Debug, Clone)]
pub struct ContactEvaluator {
    mode: MatchMode,
    needle: String,
}

impl ContactEvaluator {
    pub fn new(query: &Query) -> Self {
        Self {
            mode: query.mode(),
            needle: query.normalized(),
        }
    }

    pub fn evaluate(&self, contact: &Contact) -> Option<MatchedOn> {
        if matches(self.mode, &contact.normalized_number(), &self.needle) {
            return Some(MatchedOn::Number);
        }
        if matches(self.mode, &contact.encoded_name(), &self.needle) {
            return Some(MatchedOn::Name);
        }
        None
    }

    pub fn should_include(&self, contact: &Contact) -> bool {
        self.evaluate(contact).is_some()
    }
}

pub fn should_include(contact: &Contact, query: &Query) -> bool {
    ContactEvaluator::new(query).should_include(contact)
}
