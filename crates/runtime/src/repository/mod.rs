//! Persistence layer for the saved player.
//!
//! Only the player survives between sessions; encounters, prompts and modes
//! are rebuilt on load. Static game content is handled by the content crate,
//! not here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{PersistenceError, Result};
pub use file::JsonFilePersistence;
pub use memory::InMemoryPersistence;
pub use traits::{Persistence, SaveFile};
