//! Wire types returned by the search endpoint.

use chrono::{DateTime, Utc};
use pagination::Paginated;
use serde::Deserialize;

/// Advocate as rendered by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of search results.
pub type SearchPage = Paginated<Advocate>;
