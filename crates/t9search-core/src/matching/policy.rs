use crate::matching::distance::levenshtein;
use crate::matching::subsequence::is_subsequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Contiguous substring.
    Exact,
    /// Query characters in order, gaps allowed.
    Subsequence,
    /// Length-corrected Levenshtein distance within the threshold.
    EditDistance(u32),
}

/// Decides whether a single candidate representation matches the query.
pub fn matches(mode: MatchMode, candidate: &str, query: &str) -> bool {
    if query.is_empty() && mode == MatchMode::Exact {
        return true;
    }

    match mode {
        MatchMode::Exact => candidate.contains(query),
        MatchMode::Subsequence => is_subsequence(candidate, query),
        MatchMode::EditDistance(max_distance) => {
            adjusted_distance(candidate, query) <= i64::from(max_distance)
        }
    }
}

/// Raw distance minus the signed length surplus of the candidate. When the
/// candidate is shorter than the query the correction adds to the distance.
fn adjusted_distance(candidate: &str, query: &str) -> i64 {
    let distance = levenshtein(candidate, query) as i64;
    distance - (candidate.len() as i64 - query.len() as i64)
}
