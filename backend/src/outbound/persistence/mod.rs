//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories are thin translators over `diesel-async` connections checked
//! out from a `bb8` pool. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) stay private to this module; every failure is mapped into
//! the port's error type.
//!
//! # Example
//!
//! ```ignore
//! use advocate_directory::outbound::persistence::{DbPool, DieselAdvocateRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/advocates")).await?;
//! let repository = DieselAdvocateRepository::new(pool);
//! ```

mod diesel_advocate_repository;
mod diesel_advocate_seed_repository;
pub(crate) mod diesel_helpers;
mod diesel_specialty_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_advocate_repository::DieselAdvocateRepository;
pub use diesel_advocate_seed_repository::DieselAdvocateSeedRepository;
pub use diesel_specialty_repository::DieselSpecialtyRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
