//! In-memory store adapter.
//!
//! Backs both repository ports with process-local collections. The test
//! suites run the full router over it; the server binary always uses
//! PostgreSQL.

mod store;

pub use store::InMemoryStore;
