//! Storage layer for permission-daemon
//!
//! The profile store is the single synchronization boundary for profile
//! data. Handlers and the mutator reach the map only through it.

mod memory;
mod traits;

pub use memory::InMemoryProfileStore;
pub use traits::{ProfileStorage, StorageResult};
