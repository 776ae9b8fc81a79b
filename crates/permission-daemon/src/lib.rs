//! Permission daemon library
//!
//! This module provides the core components for the permission daemon:
//! - Profile store with a linearizable concurrency contract
//! - Periodic permission mutator
//! - REST API handlers
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod server;
pub mod storage;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, StorageError};
pub use scheduler::{MutatorState, PermissionMutator};
pub use server::Server;
pub use storage::{InMemoryProfileStore, ProfileStorage};
