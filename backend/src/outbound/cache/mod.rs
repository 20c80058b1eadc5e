//! Cache adapters for the specialty catalogue.
//!
//! Only a process-local cache exists; a shared cache would implement the same
//! port.

mod in_memory_specialty_cache;

pub use in_memory_specialty_cache::InMemorySpecialtyCache;
