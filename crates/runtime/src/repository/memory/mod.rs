//! In-memory persistence for tests and local runs.

mod state;

pub use state::InMemoryPersistence;
