//! Runtime orchestration for the data-driven RPG rules.
//!
//! This crate owns the one mutable [`GameState`](lokarta_core::GameState) of
//! a session and everything that happens around the pure rules: key dispatch,
//! prompt deadlines, persistence and process configuration.
//!
//! Modules are organized by responsibility:
//! - [`router`] resolves input against the layered action set and dispatches it
//! - [`runtime`] hosts the per-frame [`Session`] loop and [`RuntimeConfig`]
//! - [`api`] exposes the report and error types front ends consume
//! - [`repository`] provides the save capability and its implementations
pub mod api;
pub mod repository;
pub mod router;
pub mod runtime;

pub use api::{Event, Outcome, Result, RouterError, SessionSignal, StepReport};
pub use repository::{
    InMemoryPersistence, JsonFilePersistence, Persistence, PersistenceError, SaveFile,
};
pub use router::CommandRouter;
pub use runtime::{RuntimeConfig, Session};
