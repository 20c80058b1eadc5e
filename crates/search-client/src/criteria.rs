//! Search criteria and their URL query-string form.

use pagination::parse_leading_integer;
use url::form_urlencoded;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    /// 25 rows.
    #[default]
    TwentyFive,
    /// 50 rows.
    Fifty,
    /// 75 rows.
    SeventyFive,
}

impl PageSize {
    /// Row count for this size.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::SeventyFive => 75,
        }
    }

    /// Size matching `value`, if it is one of the allowed sizes.
    ///
    /// # Examples
    /// ```
    /// use search_client::PageSize;
    ///
    /// assert_eq!(PageSize::from_u32(50), Some(PageSize::Fifty));
    /// assert_eq!(PageSize::from_u32(30), None);
    /// ```
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            25 => Some(Self::TwentyFive),
            50 => Some(Self::Fifty),
            75 => Some(Self::SeventyFive),
            _ => None,
        }
    }
}

/// How results are laid out. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// One card per advocate.
    #[default]
    Card,
    /// One table row per advocate.
    Table,
}

/// Structured filters submitted from the advanced search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvancedCriteria {
    /// Substring of the first or last name.
    pub name: String,
    /// Substring of the city.
    pub location: String,
    /// Specialty substrings; an advocate must match all of them.
    pub specialties: Vec<String>,
    /// Minimum years of experience. Zero means no minimum.
    pub min_experience: Option<u32>,
}

impl AdvancedCriteria {
    /// Whether submitting these criteria would filter anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.location.trim().is_empty()
            && self.specialties.iter().all(|s| s.trim().is_empty())
            && self.experience().is_none()
    }

    fn experience(&self) -> Option<u32> {
        self.min_experience.filter(|&years| years > 0)
    }

    fn append_to(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        if !self.name.trim().is_empty() {
            query.append_pair("name", &self.name);
        }
        if !self.location.trim().is_empty() {
            query.append_pair("location", &self.location);
        }
        for specialty in self.specialties.iter().filter(|s| !s.trim().is_empty()) {
            query.append_pair("specialty", specialty);
        }
        if let Some(years) = self.experience() {
            query.append_pair("experience", &years.to_string());
        }
    }
}

/// The two mutually exclusive search modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Free-text search across first name, last name, city and degree.
    Basic {
        /// Text typed into the search box.
        term: String,
    },
    /// Structured search.
    Advanced(AdvancedCriteria),
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::Basic {
            term: String::new(),
        }
    }
}

impl SearchCriteria {
    fn append_to(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        match self {
            Self::Basic { term } if !term.is_empty() => {
                query.append_pair("search", term);
            }
            Self::Basic { .. } => {}
            Self::Advanced(criteria) => criteria.append_to(query),
        }
    }
}

/// Everything the URL persists about a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlState {
    /// 1-based page.
    pub page: u32,
    /// Page size.
    pub limit: PageSize,
    /// Active search mode and its inputs.
    pub criteria: SearchCriteria,
}

impl Default for UrlState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageSize::default(),
            criteria: SearchCriteria::default(),
        }
    }
}

const ADVANCED_KEYS: [&str; 4] = ["name", "location", "specialty", "experience"];

impl UrlState {
    /// Browser query string, without the leading `?`.
    ///
    /// Defaults are omitted, so the initial state encodes as `""`.
    ///
    /// # Examples
    /// ```
    /// use search_client::{PageSize, SearchCriteria, UrlState};
    ///
    /// assert_eq!(UrlState::default().to_query(), "");
    ///
    /// let state = UrlState {
    ///     page: 3,
    ///     limit: PageSize::TwentyFive,
    ///     criteria: SearchCriteria::Basic { term: "dr smith".to_owned() },
    /// };
    /// assert_eq!(state.to_query(), "page=3&search=dr+smith");
    /// ```
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if self.page > 1 {
            query.append_pair("page", &self.page.to_string());
        }
        if self.limit != PageSize::default() {
            query.append_pair("limit", &self.limit.as_u32().to_string());
        }
        self.criteria.append_to(&mut query);
        query.finish()
    }

    /// Query string sent to the search endpoint.
    ///
    /// Unlike [`UrlState::to_query`], `page` and `limit` are always present.
    #[must_use]
    pub fn to_api_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &self.page.to_string());
        query.append_pair("limit", &self.limit.as_u32().to_string());
        self.criteria.append_to(&mut query);
        query.finish()
    }

    /// Re-derive state from a browser query string.
    ///
    /// A leading `?` is ignored. Any advanced key with a value selects
    /// advanced mode and discards `search`. Malformed or out-of-range
    /// `page` and `limit` values fall back to their defaults.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        let page = first("page")
            .and_then(parse_leading_integer)
            .and_then(|page| u32::try_from(page).ok())
            .filter(|&page| page >= 1)
            .unwrap_or(1);
        let limit = first("limit")
            .and_then(parse_leading_integer)
            .and_then(|limit| u32::try_from(limit).ok())
            .and_then(PageSize::from_u32)
            .unwrap_or_default();

        let advanced = pairs
            .iter()
            .any(|(key, value)| ADVANCED_KEYS.contains(&key.as_str()) && !value.is_empty());
        let criteria = if advanced {
            SearchCriteria::Advanced(AdvancedCriteria {
                name: first("name").unwrap_or_default().to_owned(),
                location: first("location").unwrap_or_default().to_owned(),
                specialties: pairs
                    .iter()
                    .filter(|(key, value)| key == "specialty" && !value.is_empty())
                    .map(|(_, value)| value.clone())
                    .collect(),
                min_experience: first("experience")
                    .and_then(parse_leading_integer)
                    .and_then(|years| u32::try_from(years).ok())
                    .filter(|&years| years > 0),
            })
        } else {
            SearchCriteria::Basic {
                term: first("search").unwrap_or_default().to_owned(),
            }
        };

        Self {
            page,
            limit,
            criteria,
        }
    }
}
