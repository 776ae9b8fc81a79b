//! In-memory storage implementation

use super::traits::*;
use crate::error::StorageError;
use async_trait::async_trait;
use permission_types::{seed_profiles, ActionError, PermissionAction, PermissionCheck, Profile, FLAG_TRUE};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory profile store.
///
/// One lock guards the whole map and is held for the full duration of each
/// operation, so readers run concurrently and writers are exclusive.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding the seed data
    pub fn seeded() -> Self {
        Self {
            profiles: RwLock::new(seed_map()),
        }
    }
}

fn seed_map() -> HashMap<String, Profile> {
    seed_profiles()
        .into_iter()
        .map(|p| (p.profile_name.clone(), p))
        .collect()
}

#[async_trait]
impl ProfileStorage for InMemoryProfileStore {
    async fn load_seed(&self) {
        let mut profiles = self.profiles.write().await;
        *profiles = seed_map();
        tracing::info!(count = profiles.len(), "Loaded seed profiles");
    }

    async fn list(&self) -> Vec<Profile> {
        let profiles = self.profiles.read().await;
        let mut all: Vec<Profile> = profiles.values().cloned().collect();
        all.sort_by(|a, b| a.profile_name.cmp(&b.profile_name));
        all
    }

    async fn get(&self, name: &str) -> StorageResult<Profile> {
        let profiles = self.profiles.read().await;
        profiles
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn create(&self, profile: Profile) -> StorageResult<()> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(&profile.profile_name) {
            return Err(StorageError::Conflict(profile.profile_name));
        }

        profiles.insert(profile.profile_name.clone(), profile);
        Ok(())
    }

    async fn update(&self, name: &str, profile: Profile) -> StorageResult<()> {
        let mut profiles = self.profiles.write().await;
        let existing = profiles
            .get_mut(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;

        if profile.profile_name != name {
            tracing::debug!(
                profile = %name,
                body_name = %profile.profile_name,
                "Ignoring mismatched profile name in update body"
            );
        }

        existing.parameters = profile.parameters;
        Ok(())
    }

    async fn delete(&self, name: &str) -> StorageResult<()> {
        let mut profiles = self.profiles.write().await;
        profiles
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn check_permission(&self, name: &str, action: &str) -> StorageResult<PermissionCheck> {
        let profiles = self.profiles.read().await;
        let profile = profiles
            .get(name)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))?;

        // Validation is case-insensitive, the parameter lookup is exact
        action.parse::<PermissionAction>()?;
        let action = action.trim();
        let value = profile
            .parameter(action)
            .ok_or_else(|| ActionError::NotConfigured {
                profile: name.to_string(),
                action: action.to_string(),
            })?;

        Ok(PermissionCheck::new(name, action, value == FLAG_TRUE))
    }

    async fn mutate_all(
        &self,
        parameter: &str,
        toggle: &(dyn for<'a> Fn(&'a str) -> String + Send + Sync),
    ) -> usize {
        let mut profiles = self.profiles.write().await;
        let mut changed = 0;

        for profile in profiles.values_mut() {
            if let Some(value) = profile.parameters.get_mut(parameter) {
                *value = toggle(value.as_str());
                changed += 1;
            }
        }

        changed
    }

    async fn count(&self) -> usize {
        self.profiles.read().await.len()
    }
}
