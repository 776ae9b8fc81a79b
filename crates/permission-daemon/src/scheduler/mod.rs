//! Background scheduling
//!
//! The mutator periodically flips the `CanEdit` flag on every profile to
//! simulate permission changes made outside the service.

mod mutator;

pub use mutator::{MutatorState, PermissionMutator, DEFAULT_MUTATION_INTERVAL, MUTATED_PARAMETER};
