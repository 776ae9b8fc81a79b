//! Periodic permission mutator

use crate::storage::ProfileStorage;
use permission_types::toggle_flag;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Interval between mutation passes
pub const DEFAULT_MUTATION_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Parameter flipped on each pass
pub const MUTATED_PARAMETER: &str = "CanEdit";

/// Mutator lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutatorState {
    Idle,
    Running,
    Stopped,
}

/// Background actor flipping one parameter across all profiles
pub struct PermissionMutator {
    storage: Arc<dyn ProfileStorage>,
    interval: Duration,
    parameter: String,
    state: RwLock<MutatorState>,
}

impl PermissionMutator {
    /// Create a mutator with the default interval and parameter
    pub fn new(storage: Arc<dyn ProfileStorage>) -> Arc<Self> {
        Self::with_interval(storage, DEFAULT_MUTATION_INTERVAL)
    }

    /// Create a mutator with a custom interval
    pub fn with_interval(storage: Arc<dyn ProfileStorage>, interval: Duration) -> Arc<Self> {
        Arc::new(Self {
            storage,
            interval,
            parameter: MUTATED_PARAMETER.to_string(),
            state: RwLock::new(MutatorState::Idle),
        })
    }

    /// Current lifecycle state
    pub async fn state(&self) -> MutatorState {
        *self.state.read().await
    }

    /// Run one mutation pass, returning the number of profiles toggled
    pub async fn mutate_once(&self) -> usize {
        let changed = self.storage.mutate_all(&self.parameter, &toggle_flag).await;
        tracing::info!(
            parameter = %self.parameter,
            profiles = changed,
            "Toggled profile parameter"
        );
        changed
    }

    /// Spawn [`run`](Self::run) on the current runtime
    pub fn spawn(self: Arc<Self>, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(shutdown).await })
    }

    /// Mutate immediately, then once per interval until `shutdown` turns true.
    ///
    /// A shutdown signal interrupts the wait; no pass runs after it is seen.
    /// A dropped sender is treated as shutdown.
    pub async fn run(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        *self.state.write().await = MutatorState::Running;
        tracing::info!(interval_secs = self.interval.as_secs(), "Permission mutator started");

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.mutate_once().await;
                }
            }
        }

        *self.state.write().await = MutatorState::Stopped;
        tracing::info!("Permission mutator stopped");
    }
}
