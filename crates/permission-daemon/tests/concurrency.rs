//! Concurrent access to the profile store

use permission_daemon::{InMemoryProfileStore, ProfileStorage, StorageError};
use permission_types::{toggle_flag, Profile};
use std::sync::Arc;

const SWEPT: usize = 20;
const PASSES: usize = 50;
const WRITERS: usize = 8;
const PER_WRITER: usize = 25;

fn empty_store() -> Arc<InMemoryProfileStore> {
    Arc::new(InMemoryProfileStore::new())
}

async fn add_swept_profiles(store: &InMemoryProfileStore) {
    for i in 0..SWEPT {
        store
            .create(Profile::new(format!("Swept-{:02}", i)).with_parameter("CanEdit", "true"))
            .await
            .unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_never_observe_partial_sweep() {
    let store = empty_store();
    add_swept_profiles(&store).await;

    let sweeper = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..PASSES {
                store.mutate_all("CanEdit", &toggle_flag).await;
                tokio::task::yield_now().await;
            }
        })
    };

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..PER_WRITER {
                    let name = format!("Writer-{}-{}", w, i);
                    store
                        .create(Profile::new(&name).with_parameter("Step", "created"))
                        .await
                        .unwrap();
                    store
                        .update(&name, Profile::new(&name).with_parameter("Step", "updated"))
                        .await
                        .unwrap();
                    if i % 5 == 0 {
                        store.delete(&name).await.unwrap();
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let snapshot = store.list().await;
                    let flags: Vec<&str> = snapshot
                        .iter()
                        .filter(|p| p.profile_name.starts_with("Swept-"))
                        .filter_map(|p| p.parameter("CanEdit"))
                        .collect();

                    assert_eq!(flags.len(), SWEPT);
                    assert!(
                        flags.iter().all(|f| *f == flags[0]),
                        "observed a partially applied sweep: {:?}",
                        flags
                    );

                    for profile in snapshot.iter().filter(|p| p.profile_name.starts_with("Writer-")) {
                        assert_eq!(profile.parameters.len(), 1);
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    sweeper.await.unwrap();
    for handle in writers.into_iter().chain(readers) {
        handle.await.unwrap();
    }

    // Even number of passes brings every flag back
    for profile in store.list().await.iter().filter(|p| p.profile_name.starts_with("Swept-")) {
        assert_eq!(profile.parameter("CanEdit"), Some("true"));
    }

    // No write was lost
    let deleted_per_writer = (0..PER_WRITER).filter(|i| i % 5 == 0).count();
    let expected = SWEPT + WRITERS * (PER_WRITER - deleted_per_writer);
    assert_eq!(store.count().await, expected);

    for w in 0..WRITERS {
        let survivor = store.get(&format!("Writer-{}-1", w)).await.unwrap();
        assert_eq!(survivor.parameter("Step"), Some("updated"));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_creates_admit_exactly_one() {
    let store = empty_store();

    let attempts: Vec<_> = (0..16)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(Profile::new("Contended").with_parameter("Attempt", i.to_string()))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(()) => created += 1,
            Err(StorageError::Conflict(name)) => {
                assert_eq!(name, "Contended");
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(store.count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn updates_racing_a_sweep_leave_a_complete_state() {
    let store = empty_store();
    store.load_seed().await;

    let sweeper = {
        let store = store.clone();
        tokio::spawn(async move { store.mutate_all("CanEdit", &toggle_flag).await })
    };
    let updater = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update("Admin", Profile::new("Admin").with_parameter("CanEdit", "false"))
                .await
        })
    };

    sweeper.await.unwrap();
    updater.await.unwrap().unwrap();

    // Either order is valid; both produce exactly one CanEdit key
    let admin = store.get("Admin").await.unwrap();
    assert_eq!(admin.parameters.len(), 1);
    let value = admin.parameter("CanEdit").unwrap();
    assert!(value == "true" || value == "false");
}
