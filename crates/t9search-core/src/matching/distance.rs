/// Levenshtein distance with unit cost for insertion, deletion and substitution.
///
/// Fills the full `(|a|+1) x (|b|+1)` table, flattened row-major. Inputs are
/// bounded by the record length limit, so the quadratic table stays small.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let cols = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * cols];

    for i in 0..=a.len() {
        table[i * cols] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let deletion = table[(i - 1) * cols + j] + 1;
            let insertion = table[i * cols + j - 1] + 1;
            let substitution = table[(i - 1) * cols + j - 1] + cost;
            table[i * cols + j] = deletion.min(insertion).min(substitution);
        }
    }

    table[a.len() * cols + b.len()]
}

#[cfg(test)]
mod tests {
    use super::levenshtein;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("0612345678", "0612345678"), 0);
    }

    #[test]
    fn distance_to_empty_is_length() {
        assert_eq!(levenshtein("12345", ""), 5);
        assert_eq!(levenshtein("", "123"), 3);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("12345", "345"), 2);
        assert_eq!(levenshtein("123", "133"), 1);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [("12345", "345"), ("5646", "56"), ("kitten", "sitting"), ("", "9")];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }
}
