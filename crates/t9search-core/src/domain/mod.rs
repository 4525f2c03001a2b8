pub mod contact;
pub mod phone;
pub mod query;

pub use contact::Contact;
pub use phone::{is_phone_number, normalize_plus_prefix, MAX_FIELD_LEN};
pub use query::{parse_max_distance, Query, MAX_DISTANCE_CAP};
