//! PostgreSQL-backed `SpecialtyRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SpecialtyRepository, SpecialtyRepositoryError};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;
use super::schema::specialties;

/// Diesel implementation of the specialty catalogue port.
#[derive(Clone)]
pub struct DieselSpecialtyRepository {
    pool: DbPool,
}

impl DieselSpecialtyRepository {
    /// Create a repository reading through `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpecialtyRepository for DieselSpecialtyRepository {
    async fn list_specialty_names(&self) -> Result<Vec<String>, SpecialtyRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, SpecialtyRepositoryError::connection))?;

        specialties::table
            .select(specialties::name)
            .order(specialties::name.asc())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    SpecialtyRepositoryError::query,
                    SpecialtyRepositoryError::connection,
                )
            })
    }
}
