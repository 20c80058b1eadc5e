//! Process-local adapters used without a database.

mod in_memory_advocate_store;

pub use in_memory_advocate_store::InMemoryAdvocateStore;
