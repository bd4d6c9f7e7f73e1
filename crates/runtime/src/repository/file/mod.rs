//! File-based persistence.

mod state;

pub use state::JsonFilePersistence;
