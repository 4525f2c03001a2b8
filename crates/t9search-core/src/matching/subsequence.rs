/// True when the characters of `query` occur in `candidate` in order,
/// with any number of other characters between them.
pub fn is_subsequence(candidate: &str, query: &str) -> bool {
    let mut wanted = query.bytes().peekable();
    for b in candidate.bytes() {
        match wanted.peek() {
            None => return true,
            Some(&next) if next == b => {
                wanted.next();
            }
            Some(_) => {}
        }
    }
    wanted.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::is_subsequence;

    #[test]
    fn scattered_characters_match_in_order() {
        assert!(is_subsequence("jklmno", "jmo"));
        assert!(is_subsequence("0612345678", "0638"));
    }

    #[test]
    fn out_of_order_characters_do_not_match() {
        assert!(!is_subsequence("jklmno", "mjo"));
    }

    #[test]
    fn repeated_query_characters_need_repeated_candidates() {
        assert!(!is_subsequence("1234", "11"));
        assert!(is_subsequence("1214", "11"));
    }

    #[test]
    fn empty_query_always_matches() {
        assert!(is_subsequence("", ""));
        assert!(is_subsequence("123", ""));
    }

    #[test]
    fn equal_strings_match() {
        assert!(is_subsequence("5646", "5646"));
    }

    #[test]
    fn longer_query_never_matches() {
        assert!(!is_subsequence("12", "123"));
        assert!(!is_subsequence("", "1"));
    }
}
