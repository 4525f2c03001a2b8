/// Longest name, number or search number accepted, excluding the line terminator.
pub const MAX_FIELD_LEN: usize = 100;

/// Digits only, with an optional single leading `'+'`. The empty string passes.
pub fn is_phone_number(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    digits.bytes().all(|b| b.is_ascii_digit())
}

/// A leading `'+'` dials as `'0'`.
pub fn normalize_plus_prefix(value: &str) -> String {
    match value.strip_prefix('+') {
        Some(rest) => {
            let mut out = String::with_capacity(value.len());
            out.push('0');
            out.push_str(rest);
            out
        }
        None => value.to_string(),
    }
}
