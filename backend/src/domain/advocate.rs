//! Advocate directory entries.
//!
//! An advocate's specialties are never stored on the advocate itself; they
//! are always derived from the advocate/specialty association, which is why
//! the store hands back [`AdvocateSpecialtyRow`]s that are folded into
//! [`Advocate`]s by [`crate::domain::shape_advocates`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned advocate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvocateId(i32);

impl AdvocateId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for AdvocateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Advocate attributes as persisted, without specialties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvocateRecord {
    pub id: AdvocateId,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Non-negative number of years in practice.
    pub years_of_experience: i32,
    /// Stored as a wide integer; some numbers exceed the 32-bit range.
    pub phone_number: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One row per advocate/specialty pair, or a single row with no specialty
/// for advocates without any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvocateSpecialtyRow {
    pub advocate: AdvocateRecord,
    pub specialty: Option<String>,
}

impl AdvocateSpecialtyRow {
    /// Pair an advocate with one of its specialties.
    #[must_use]
    pub fn with_specialty(advocate: AdvocateRecord, specialty: impl Into<String>) -> Self {
        Self {
            advocate,
            specialty: Some(specialty.into()),
        }
    }

    /// Row for an advocate with no specialties.
    #[must_use]
    pub const fn without_specialty(advocate: AdvocateRecord) -> Self {
        Self {
            advocate,
            specialty: None,
        }
    }
}

/// Advocate as returned to clients.
///
/// Serialised as
/// `{id, firstName, lastName, city, degree, yearsOfExperience, phoneNumber, specialties, createdAt?, updatedAt?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: AdvocateId,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub specialties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Advocate {
    /// Start an advocate with no specialties from its persisted record.
    #[must_use]
    pub fn from_record(record: AdvocateRecord) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            city: record.city,
            degree: record.degree,
            years_of_experience: record.years_of_experience,
            phone_number: record.phone_number,
            specialties: Vec::new(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Advocate attributes supplied when seeding the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    fn record() -> AdvocateRecord {
        AdvocateRecord {
            id: AdvocateId::new(7),
            first_name: "Ada".to_owned(),
            last_name: "Okafor".to_owned(),
            city: "Austin".to_owned(),
            degree: "MSW".to_owned(),
            years_of_experience: 10,
            phone_number: 5_551_234_567,
            created_at: None,
            updated_at: None,
        }
    }

    #[rstest]
    fn serialises_camel_case_and_omits_missing_timestamps() {
        let mut advocate = Advocate::from_record(record());
        advocate.specialties.push("Cardiology".to_owned());

        let value = serde_json::to_value(&advocate).expect("serialise advocate");
        assert_eq!(
            value,
            json!({
                "id": 7,
                "firstName": "Ada",
                "lastName": "Okafor",
                "city": "Austin",
                "degree": "MSW",
                "yearsOfExperience": 10,
                "phoneNumber": 5_551_234_567_i64,
                "specialties": ["Cardiology"]
            })
        );
    }

    #[rstest]
    fn serialises_timestamps_as_rfc3339() {
        let mut source = record();
        source.created_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single();
        let value = serde_json::to_value(Advocate::from_record(source)).expect("serialise");
        assert_eq!(value["createdAt"], json!("2024-01-02T03:04:05Z"));
        assert!(value.get("updatedAt").is_none());
    }
}
