use crate::data::candidates::{CandidateEntry, CandidateIndex};

/// Candidates whose name starts with `query`, ignoring case, in index order.
/// An empty query matches nothing.
pub fn filter<'a>(candidates: &'a CandidateIndex, query: &str) -> Vec<&'a CandidateEntry> {
    if query.is_empty() {
        return Vec::new();
    }
    let prefix = query.to_lowercase();
    candidates
        .iter()
        .filter(|entry| entry.name.to_lowercase().starts_with(&prefix))
        .collect()
}

pub fn filter_names(candidates: &CandidateIndex, query: &str) -> Vec<String> {
    filter(candidates, query)
        .into_iter()
        .map(|entry| entry.name.clone())
        .collect()
}
