//! "Has all of these specialties" resolution.
//!
//! The store returns every advocate/specialty association whose specialty
//! name matches at least one requested substring. This module keeps the
//! advocates for which each requested substring is matched by at least one
//! of their specialties: AND across requested substrings, while a single
//! substring may be satisfied by any of several specialties.

use std::collections::{BTreeMap, BTreeSet};

use super::{AdvocateId, ContainsPattern};

/// Association row whose specialty name matched a requested pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyMatch {
    pub advocate_id: AdvocateId,
    pub specialty_name: String,
}

impl SpecialtyMatch {
    /// Convenience constructor.
    pub fn new(advocate_id: AdvocateId, specialty_name: impl Into<String>) -> Self {
        Self {
            advocate_id,
            specialty_name: specialty_name.into(),
        }
    }
}

/// Keep advocates whose matched specialties satisfy every pattern.
///
/// Returns an empty set when `patterns` is empty; callers treat an empty
/// pattern list as "no specialty constraint" and skip resolution entirely.
///
/// # Examples
/// ```
/// use advocate_directory::domain::{
///     AdvocateId, ContainsPattern, SpecialtyMatch, resolve_specialty_ids,
/// };
///
/// let patterns = [
///     ContainsPattern::new("cardio").expect("pattern"),
///     ContainsPattern::new("onco").expect("pattern"),
/// ];
/// let matches = [
///     SpecialtyMatch::new(AdvocateId::new(1), "Cardiology"),
///     SpecialtyMatch::new(AdvocateId::new(2), "Cardiology"),
///     SpecialtyMatch::new(AdvocateId::new(2), "Oncology"),
/// ];
/// let ids = resolve_specialty_ids(&patterns, &matches);
/// assert_eq!(ids.into_iter().collect::<Vec<_>>(), [AdvocateId::new(2)]);
/// ```
pub fn resolve_specialty_ids(
    patterns: &[ContainsPattern],
    matches: &[SpecialtyMatch],
) -> BTreeSet<AdvocateId> {
    if patterns.is_empty() {
        return BTreeSet::new();
    }

    let mut satisfied: BTreeMap<AdvocateId, BTreeSet<usize>> = BTreeMap::new();
    for row in matches {
        let hits = patterns
            .iter()
            .enumerate()
            .filter(|(_, pattern)| pattern.matches(&row.specialty_name))
            .map(|(index, _)| index);
        satisfied.entry(row.advocate_id).or_default().extend(hits);
    }

    satisfied
        .into_iter()
        .filter(|(_, hits)| hits.len() == patterns.len())
        .map(|(id, _)| id)
        .collect()
}
