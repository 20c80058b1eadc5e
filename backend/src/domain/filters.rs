//! Translation of search parameters into advocate predicates.
//!
//! Everything here is pure. Absent or blank parameters mean "no constraint",
//! never "match nothing", and every active predicate is combined with AND.
//! Malformed experience values are dropped rather than rejected.

use std::collections::BTreeSet;

use pagination::{PageRequest, parse_leading_integer};

use super::{AdvocateId, AdvocateRecord};

/// Case-insensitive substring needle.
///
/// ## Invariants
/// - The needle is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainsPattern(String);

impl ContainsPattern {
    /// Build a pattern, returning `None` for blank input.
    ///
    /// # Examples
    /// ```
    /// use advocate_directory::domain::ContainsPattern;
    ///
    /// assert!(ContainsPattern::new("   ").is_none());
    /// let pattern = ContainsPattern::new(" aus ").expect("non-blank");
    /// assert!(pattern.matches("Austin"));
    /// ```
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    /// The trimmed needle as supplied by the client.
    pub fn needle(&self) -> &str {
        self.0.as_str()
    }

    /// SQL `ILIKE` pattern matching the needle anywhere in a value.
    ///
    /// `%`, `_` and `\` are escaped so user input is matched literally.
    ///
    /// # Examples
    /// ```
    /// use advocate_directory::domain::ContainsPattern;
    ///
    /// let pattern = ContainsPattern::new("50%_off").expect("non-blank");
    /// assert_eq!(pattern.to_like_pattern(), "%50\\%\\_off%");
    /// ```
    pub fn to_like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// Evaluate the pattern against `value` without a database.
    pub fn matches(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Text columns that free-text filters can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvocateField {
    FirstName,
    LastName,
    City,
    Degree,
}

impl AdvocateField {
    /// Fields covered by the basic free-text term.
    pub const BASIC_SEARCH: &'static [Self] =
        &[Self::FirstName, Self::LastName, Self::City, Self::Degree];
    /// Fields covered by the advanced name filter.
    pub const NAME: &'static [Self] = &[Self::FirstName, Self::LastName];
    /// Fields covered by the advanced location filter.
    pub const LOCATION: &'static [Self] = &[Self::City];

    /// Read the field from a record.
    pub fn value(self, record: &AdvocateRecord) -> &str {
        match self {
            Self::FirstName => &record.first_name,
            Self::LastName => &record.last_name,
            Self::City => &record.city,
            Self::Degree => &record.degree,
        }
    }
}

/// A single boolean condition over advocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvocatePredicate {
    /// At least one of `fields` contains `pattern`.
    MatchesAny {
        fields: Vec<AdvocateField>,
        pattern: ContainsPattern,
    },
    /// `years_of_experience >= minimum`.
    MinimumExperience(i32),
    /// The advocate id is one of the listed ids.
    IdIn(BTreeSet<AdvocateId>),
}

impl AdvocatePredicate {
    /// Evaluate the predicate against a record.
    pub fn matches(&self, record: &AdvocateRecord) -> bool {
        match self {
            Self::MatchesAny { fields, pattern } => fields
                .iter()
                .any(|field| pattern.matches(field.value(record))),
            Self::MinimumExperience(minimum) => record.years_of_experience >= *minimum,
            Self::IdIn(ids) => ids.contains(&record.id),
        }
    }
}

/// AND-combination of predicates. An empty filter matches every advocate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvocateFilter {
    predicates: Vec<AdvocatePredicate>,
}

impl AdvocateFilter {
    /// Add a predicate to the conjunction.
    pub fn push(&mut self, predicate: AdvocatePredicate) {
        self.predicates.push(predicate);
    }

    /// Builder-style variant of [`AdvocateFilter::push`].
    #[must_use]
    pub fn and(mut self, predicate: AdvocatePredicate) -> Self {
        self.push(predicate);
        self
    }

    /// Predicates in the order they were added.
    pub fn predicates(&self) -> &[AdvocatePredicate] {
        &self.predicates
    }

    /// Whether the filter constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate every predicate against a record.
    pub fn matches(&self, record: &AdvocateRecord) -> bool {
        self.predicates
            .iter()
            .all(|predicate| predicate.matches(record))
    }
}

/// Typed search inputs after boundary validation.
///
/// The basic term and the structured fields may be combined; the API ANDs
/// whatever is present even though the browser only ever sends one mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub basic_term: Option<ContainsPattern>,
    pub name: Option<ContainsPattern>,
    pub location: Option<ContainsPattern>,
    /// Required specialty substrings, deduplicated case-insensitively.
    pub specialties: Vec<ContainsPattern>,
    pub min_experience: Option<i32>,
}

impl SearchFilters {
    /// Whether any specialty constraint was requested.
    pub fn requires_specialties(&self) -> bool {
        !self.specialties.is_empty()
    }

    fn push_specialty(&mut self, raw: &str) {
        let Some(pattern) = ContainsPattern::new(raw) else {
            return;
        };
        let folded = pattern.needle().to_lowercase();
        if !self
            .specialties
            .iter()
            .any(|existing| existing.needle().to_lowercase() == folded)
        {
            self.specialties.push(pattern);
        }
    }
}

/// Parse an experience threshold leniently.
///
/// Leading digits are honoured (`"7yrs"` is 7); unparseable, negative or
/// out-of-range values impose no constraint.
///
/// # Examples
/// ```
/// use advocate_directory::domain::parse_min_experience;
///
/// assert_eq!(parse_min_experience("5"), Some(5));
/// assert_eq!(parse_min_experience("abc"), None);
/// ```
pub fn parse_min_experience(raw: &str) -> Option<i32> {
    parse_leading_integer(raw)
        .filter(|value| *value >= 0)
        .and_then(|value| i32::try_from(value).ok())
}

/// A search request: filters plus the page window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub filters: SearchFilters,
    pub page: PageRequest,
}

impl SearchRequest {
    /// Build a request from decoded query-string pairs.
    ///
    /// Single-valued keys keep their first occurrence; `specialty` may
    /// repeat. Unknown keys are ignored.
    ///
    /// # Examples
    /// ```
    /// use advocate_directory::domain::SearchRequest;
    ///
    /// let request = SearchRequest::from_query_pairs([
    ///     ("specialty", "Cardiology"),
    ///     ("specialty", "Oncology"),
    ///     ("experience", "abc"),
    ///     ("page", "2"),
    /// ]);
    /// assert_eq!(request.filters.specialties.len(), 2);
    /// assert_eq!(request.filters.min_experience, None);
    /// assert_eq!(request.page.page(), 2);
    /// ```
    pub fn from_query_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filters = SearchFilters::default();
        let mut page: Option<String> = None;
        let mut limit: Option<String> = None;
        let mut experience: Option<String> = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "page" => {
                    page.get_or_insert_with(|| value.to_owned());
                }
                "limit" => {
                    limit.get_or_insert_with(|| value.to_owned());
                }
                "search" => set_first(&mut filters.basic_term, value),
                "name" => set_first(&mut filters.name, value),
                "location" => set_first(&mut filters.location, value),
                "specialty" => filters.push_specialty(value),
                "experience" => {
                    experience.get_or_insert_with(|| value.to_owned());
                }
                _ => {}
            }
        }

        filters.min_experience = experience.as_deref().and_then(parse_min_experience);
        Self {
            filters,
            page: PageRequest::from_raw(page.as_deref(), limit.as_deref()),
        }
    }
}

fn set_first(slot: &mut Option<ContainsPattern>, raw: &str) {
    if slot.is_none() {
        *slot = ContainsPattern::new(raw);
    }
}

/// Translate filters into an AND-combined predicate set.
///
/// Specialty constraints are not included; they are resolved separately
/// into an id set by [`crate::domain::resolve_specialty_ids`].
pub fn build_predicates(filters: &SearchFilters) -> AdvocateFilter {
    let mut filter = AdvocateFilter::default();
    let text_filters = [
        (&filters.basic_term, AdvocateField::BASIC_SEARCH),
        (&filters.name, AdvocateField::NAME),
        (&filters.location, AdvocateField::LOCATION),
    ];
    for (pattern, fields) in text_filters {
        if let Some(pattern) = pattern {
            filter.push(AdvocatePredicate::MatchesAny {
                fields: fields.to_vec(),
                pattern: pattern.clone(),
            });
        }
    }
    if let Some(minimum) = filters.min_experience {
        filter.push(AdvocatePredicate::MinimumExperience(minimum));
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn austin() -> AdvocateRecord {
        AdvocateRecord {
            id: AdvocateId::new(1),
            first_name: "Maria".to_owned(),
            last_name: "Lopez".to_owned(),
            city: "Austin".to_owned(),
            degree: "MD".to_owned(),
            years_of_experience: 10,
            phone_number: 5_125_550_100,
            created_at: None,
            updated_at: None,
        }
    }

    fn filters(pairs: &[(&str, &str)]) -> SearchFilters {
        SearchRequest::from_query_pairs(pairs.iter().copied()).filters
    }

    #[rstest]
    fn empty_parameters_impose_no_constraint(austin: AdvocateRecord) {
        let filter = build_predicates(&filters(&[
            ("search", ""),
            ("name", "  "),
            ("location", ""),
            ("experience", ""),
        ]));
        assert!(filter.is_empty());
        assert!(filter.matches(&austin));
    }

    #[rstest]
    #[case("aus", true)]
    #[case("LOPEZ", true)]
    #[case("md", true)]
    #[case("boston", false)]
    #[case("10", false)]
    #[case("512", false)]
    fn basic_term_spans_name_city_and_degree(
        austin: AdvocateRecord,
        #[case] term: &str,
        #[case] expected: bool,
    ) {
        let filter = build_predicates(&filters(&[("search", term)]));
        assert_eq!(filter.matches(&austin), expected);
    }

    #[rstest]
    fn name_filter_ignores_city(austin: AdvocateRecord) {
        let filter = build_predicates(&filters(&[("name", "austin")]));
        assert!(!filter.matches(&austin));
        let filter = build_predicates(&filters(&[("name", "mar")]));
        assert!(filter.matches(&austin));
    }

    #[rstest]
    fn location_filter_targets_city_only(austin: AdvocateRecord) {
        let filter = build_predicates(&filters(&[("location", "lopez")]));
        assert!(!filter.matches(&austin));
    }

    #[rstest]
    #[case("10", true)]
    #[case("11", false)]
    #[case("5years", true)]
    #[case("abc", true)]
    #[case("-3", true)]
    fn experience_is_inclusive_and_lenient(
        austin: AdvocateRecord,
        #[case] raw: &str,
        #[case] expected: bool,
    ) {
        let filter = build_predicates(&filters(&[("experience", raw)]));
        assert_eq!(filter.matches(&austin), expected);
    }

    #[rstest]
    fn predicates_are_combined_with_and(austin: AdvocateRecord) {
        let filter = build_predicates(&filters(&[("location", "austin"), ("experience", "20")]));
        assert_eq!(filter.predicates().len(), 2);
        assert!(!filter.matches(&austin));
    }

    #[rstest]
    fn id_predicate_restricts_to_listed_ids(austin: AdvocateRecord) {
        let ids = BTreeSet::from([AdvocateId::new(2)]);
        let filter = AdvocateFilter::default().and(AdvocatePredicate::IdIn(ids));
        assert!(!filter.matches(&austin));
    }

    #[rstest]
    fn repeated_specialties_are_collected_and_deduplicated() {
        let parsed = filters(&[
            ("specialty", "Cardiology"),
            ("specialty", ""),
            ("specialty", "cardiology"),
            ("specialty", "Oncology"),
        ]);
        let needles: Vec<_> = parsed
            .specialties
            .iter()
            .map(ContainsPattern::needle)
            .collect();
        assert_eq!(needles, ["Cardiology", "Oncology"]);
        assert!(parsed.requires_specialties());
    }

    #[rstest]
    fn first_occurrence_wins_for_single_valued_keys() {
        let parsed = filters(&[("search", "first"), ("search", "second")]);
        assert_eq!(
            parsed.basic_term.as_ref().map(ContainsPattern::needle),
            Some("first")
        );
    }

    #[rstest]
    #[case("plain", "%plain%")]
    #[case("a_b", "%a\\_b%")]
    #[case("100%", "%100\\%%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn like_patterns_escape_wildcards(#[case] raw: &str, #[case] expected: &str) {
        let pattern = ContainsPattern::new(raw).expect("non-blank");
        assert_eq!(pattern.to_like_pattern(), expected);
    }
}
