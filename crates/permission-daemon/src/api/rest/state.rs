//! Application state for API handlers

use crate::storage::ProfileStorage;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Profile store
    pub storage: Arc<dyn ProfileStorage>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(storage: Arc<dyn ProfileStorage>) -> Self {
        Self {
            storage,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryProfileStore;

    #[test]
    fn test_uptime_formatting() {
        let mut state = AppState::new(Arc::new(InMemoryProfileStore::new()));
        assert!(state.uptime().ends_with('s'));

        state.started_at = chrono::Utc::now() - chrono::Duration::seconds(3 * 3600 + 120);
        assert_eq!(state.uptime(), "3h 2m");

        state.started_at = chrono::Utc::now() - chrono::Duration::seconds(2 * 86400 + 5 * 3600);
        assert_eq!(state.uptime(), "2d 5h");
    }
}
