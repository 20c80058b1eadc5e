//! PostgreSQL-backed `AdvocateRepository`.
//!
//! Domain predicates are translated into boxed Diesel expressions. Text
//! filters use `ILIKE` with escaped patterns; pagination is applied to
//! advocates before their specialties are joined so each page holds whole
//! advocates.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{AdvocateRepository, AdvocateRepositoryError};
use crate::domain::{
    AdvocateField, AdvocateFilter, AdvocateId, AdvocatePredicate, AdvocateRecord,
    AdvocateSpecialtyRow, ContainsPattern, SpecialtyMatch,
};

use super::diesel_helpers::{
    count_to_u64, map_basic_diesel_error, map_basic_pool_error, offset_to_i64,
};
use super::models::AdvocateRow;
use super::pool::{DbPool, PoolError};
use super::schema::{advocate_specialties, advocates, specialties};

type AdvocateCondition = Box<dyn BoxableExpression<advocates::table, Pg, SqlType = Bool>>;

/// Diesel implementation of the advocate read port.
#[derive(Clone)]
pub struct DieselAdvocateRepository {
    pool: DbPool,
}

impl DieselAdvocateRepository {
    /// Create a repository reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AdvocateRepositoryError {
    map_basic_pool_error(error, AdvocateRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AdvocateRepositoryError {
    map_basic_diesel_error(
        error,
        AdvocateRepositoryError::query,
        AdvocateRepositoryError::connection,
    )
}

fn field_condition(field: AdvocateField, like: String) -> AdvocateCondition {
    match field {
        AdvocateField::FirstName => Box::new(advocates::first_name.ilike(like)),
        AdvocateField::LastName => Box::new(advocates::last_name.ilike(like)),
        AdvocateField::City => Box::new(advocates::city.ilike(like)),
        AdvocateField::Degree => Box::new(advocates::degree.ilike(like)),
    }
}

fn predicate_condition(predicate: &AdvocatePredicate) -> Option<AdvocateCondition> {
    match predicate {
        AdvocatePredicate::MatchesAny { fields, pattern } => {
            let like = pattern.to_like_pattern();
            fields
                .iter()
                .map(|field| field_condition(*field, like.clone()))
                .reduce(|acc, next| Box::new(acc.or(next)))
        }
        AdvocatePredicate::MinimumExperience(minimum) => {
            Some(Box::new(advocates::years_of_experience.ge(*minimum)))
        }
        AdvocatePredicate::IdIn(ids) => {
            let ids: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();
            Some(Box::new(advocates::id.eq_any(ids)))
        }
    }
}

fn filtered(filter: &AdvocateFilter) -> advocates::BoxedQuery<'static, Pg> {
    filter
        .predicates()
        .iter()
        .filter_map(predicate_condition)
        .fold(advocates::table.into_boxed(), |query, condition| {
            query.filter(condition)
        })
}

/// Expand each advocate into one row per specialty, preserving advocate order.
fn join_rows(
    advocates: Vec<AdvocateRow>,
    links: Vec<(i32, String)>,
) -> Vec<AdvocateSpecialtyRow> {
    let mut by_advocate: HashMap<i32, Vec<String>> = HashMap::new();
    for (advocate_id, name) in links {
        by_advocate.entry(advocate_id).or_default().push(name);
    }

    let mut rows = Vec::with_capacity(advocates.len());
    for row in advocates {
        let names = by_advocate.remove(&row.id).unwrap_or_default();
        let record = AdvocateRecord::from(row);
        if names.is_empty() {
            rows.push(AdvocateSpecialtyRow::without_specialty(record));
            continue;
        }
        rows.extend(
            names
                .into_iter()
                .map(|name| AdvocateSpecialtyRow::with_specialty(record.clone(), name)),
        );
    }
    rows
}

#[async_trait]
impl AdvocateRepository for DieselAdvocateRepository {
    async fn specialty_matches(
        &self,
        patterns: &[ContainsPattern],
    ) -> Result<Vec<SpecialtyMatch>, AdvocateRepositoryError> {
        if patterns.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let query = patterns.iter().fold(
            advocate_specialties::table
                .inner_join(specialties::table)
                .select((advocate_specialties::advocate_id, specialties::name))
                .into_boxed(),
            |query, pattern| query.or_filter(specialties::name.ilike(pattern.to_like_pattern())),
        );
        let rows: Vec<(i32, String)> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(advocate_id, name)| SpecialtyMatch::new(AdvocateId::new(advocate_id), name))
            .collect())
    }

    async fn count_advocates(
        &self,
        filter: &AdvocateFilter,
    ) -> Result<u64, AdvocateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = filtered(filter)
            .select(count_star())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(count_to_u64(total))
    }

    async fn load_page(
        &self,
        filter: &AdvocateFilter,
        page: PageRequest,
    ) -> Result<Vec<AdvocateSpecialtyRow>, AdvocateRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let advocate_rows: Vec<AdvocateRow> = filtered(filter)
            .select(AdvocateRow::as_select())
            .order(advocates::id.asc())
            .limit(i64::from(page.limit()))
            .offset(offset_to_i64(page.offset()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if advocate_rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = advocate_rows.iter().map(|row| row.id).collect();
        let links: Vec<(i32, String)> = advocate_specialties::table
            .inner_join(specialties::table)
            .filter(advocate_specialties::advocate_id.eq_any(ids))
            .select((advocate_specialties::advocate_id, specialties::name))
            .order((advocate_specialties::advocate_id.asc(), specialties::name.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(join_rows(advocate_rows, links))
    }
}
