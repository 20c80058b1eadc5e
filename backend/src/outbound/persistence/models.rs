//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; adapters convert them into
//! domain records before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{AdvocateId, AdvocateRecord, NewAdvocate};

use super::schema::{advocate_specialties, advocates, specialties};

/// Row read from `advocates`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = advocates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AdvocateRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AdvocateRow> for AdvocateRecord {
    fn from(row: AdvocateRow) -> Self {
        Self {
            id: AdvocateId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            city: row.city,
            degree: row.degree,
            years_of_experience: row.years_of_experience,
            phone_number: row.phone_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable advocate; timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = advocates)]
pub(crate) struct NewAdvocateRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl<'a> From<&'a NewAdvocate> for NewAdvocateRow<'a> {
    fn from(advocate: &'a NewAdvocate) -> Self {
        Self {
            first_name: &advocate.first_name,
            last_name: &advocate.last_name,
            city: &advocate.city,
            degree: &advocate.degree,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

/// Insertable specialty.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = specialties)]
pub(crate) struct NewSpecialtyRow<'a> {
    pub name: &'a str,
}

/// Insertable association row.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = advocate_specialties)]
pub(crate) struct NewAdvocateSpecialtyRow {
    pub advocate_id: i32,
    pub specialty_id: i32,
}
