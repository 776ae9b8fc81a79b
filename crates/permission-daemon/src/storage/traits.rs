//! Storage trait definitions

use crate::error::StorageError;
use async_trait::async_trait;
use permission_types::{PermissionCheck, Profile};

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Linearizable profile storage.
///
/// Every method observes and produces a complete state: no caller sees part
/// of another caller's write. Returned profiles are owned copies.
#[async_trait]
pub trait ProfileStorage: Send + Sync {
    /// Replace the whole map with the fixed seed data
    async fn load_seed(&self);

    /// Point-in-time copy of every profile, ordered by name
    async fn list(&self) -> Vec<Profile>;

    /// Get a profile by exact name
    async fn get(&self, name: &str) -> StorageResult<Profile>;

    /// Insert a new profile; never overwrites
    async fn create(&self, profile: Profile) -> StorageResult<()>;

    /// Replace the parameter set of an existing profile.
    ///
    /// The stored profile keeps `name`; `profile.profile_name` is ignored.
    async fn update(&self, name: &str, profile: Profile) -> StorageResult<()>;

    /// Remove a profile
    async fn delete(&self, name: &str) -> StorageResult<()>;

    /// Check whether `name` holds the permission named by `action`
    async fn check_permission(&self, name: &str, action: &str) -> StorageResult<PermissionCheck>;

    /// Apply `toggle` to `parameter` on every profile that has it.
    ///
    /// Returns the number of profiles changed.
    async fn mutate_all(
        &self,
        parameter: &str,
        toggle: &(dyn for<'a> Fn(&'a str) -> String + Send + Sync),
    ) -> usize;

    /// Number of stored profiles
    async fn count(&self) -> usize;
}
