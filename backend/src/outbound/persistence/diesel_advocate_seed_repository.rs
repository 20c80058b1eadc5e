//! PostgreSQL-backed seeding adapter.
//!
//! The whole replacement runs in one transaction: existing associations,
//! advocates and specialties are deleted in that order, then the plan is
//! inserted. A failure at any step leaves the previous contents in place.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::SeedPlan;
use crate::domain::ports::{AdvocateSeedRepository, AdvocateSeedRepositoryError, SeedSummary};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewAdvocateRow, NewAdvocateSpecialtyRow, NewSpecialtyRow};
use super::pool::DbPool;
use super::schema::{advocate_specialties, advocates, specialties};

/// Diesel implementation of the seed port.
#[derive(Clone)]
pub struct DieselAdvocateSeedRepository {
    pool: DbPool,
}

impl DieselAdvocateSeedRepository {
    /// Create a seeding adapter writing through `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use advocate_directory::outbound::persistence::{
    ///     DbPool, DieselAdvocateSeedRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/advocates")).await?;
    /// let repository = DieselAdvocateSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> AdvocateSeedRepositoryError {
    map_basic_diesel_error(
        error,
        AdvocateSeedRepositoryError::query,
        AdvocateSeedRepositoryError::connection,
    )
}

#[async_trait]
impl AdvocateSeedRepository for DieselAdvocateSeedRepository {
    async fn replace_all(
        &self,
        plan: &SeedPlan,
    ) -> Result<SeedSummary, AdvocateSeedRepositoryError> {
        plan.validate()?;
        let specialty_rows: Vec<NewSpecialtyRow<'_>> = plan
            .specialties
            .iter()
            .map(|name| NewSpecialtyRow { name })
            .collect();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, AdvocateSeedRepositoryError::connection))?;

        conn.transaction(|conn| {
            async move {
                diesel::delete(advocate_specialties::table)
                    .execute(conn)
                    .await?;
                diesel::delete(advocates::table).execute(conn).await?;
                diesel::delete(specialties::table).execute(conn).await?;

                let specialty_ids: HashMap<String, i32> = if specialty_rows.is_empty() {
                    HashMap::new()
                } else {
                    diesel::insert_into(specialties::table)
                        .values(&specialty_rows)
                        .returning((specialties::name, specialties::id))
                        .get_results::<(String, i32)>(conn)
                        .await?
                        .into_iter()
                        .collect()
                };

                let mut links = Vec::new();
                for seed in &plan.advocates {
                    let advocate_id: i32 = diesel::insert_into(advocates::table)
                        .values(NewAdvocateRow::from(&seed.advocate))
                        .returning(advocates::id)
                        .get_result(conn)
                        .await?;
                    links.extend(
                        plan.specialty_names(seed)
                            .filter_map(|name| specialty_ids.get(name))
                            .map(|&specialty_id| NewAdvocateSpecialtyRow {
                                advocate_id,
                                specialty_id,
                            }),
                    );
                }

                if !links.is_empty() {
                    diesel::insert_into(advocate_specialties::table)
                        .values(&links)
                        .execute(conn)
                        .await?;
                }

                Ok(SeedSummary {
                    advocates: plan.advocates.len(),
                    specialties: specialty_ids.len(),
                    relationships: links.len(),
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
