//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the router and session can stay focused on dispatch.

pub mod errors;
pub mod report;

pub use errors::{Result, RouterError};
pub use report::{Event, Outcome, SessionSignal, StepReport};
