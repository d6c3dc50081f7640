//! Integration tests for the reservation store: the desk operations, the
//! change event stream, and the dashboard snapshot.

use chrono::NaiveDate;
use frontdesk_core::desk::{DeskAction, DeskEnvironment};
use frontdesk_core::environment::Clock;
use frontdesk_core::reservation::{
    ReservationDraft, ReservationPatch, ReservationSource, ReservationStatus,
};
use frontdesk_core::state::DeskState;
use frontdesk_runtime::{ReservationStore, StoreError, spawn_arrival_generator};
use frontdesk_testing::{ScriptedEntropy, SequentialIdSource, manual_ticker, test_clock};
use std::sync::Arc;
use std::time::Duration;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn test_env() -> DeskEnvironment {
    DeskEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdSource::new()),
        Arc::new(ScriptedEntropy::new([])),
    )
}

fn sample_draft() -> ReservationDraft {
    ReservationDraft {
        guest_name: "Test".to_string(),
        email: "t@e.com".to_string(),
        phone: "1".to_string(),
        room_number: "101".to_string(),
        room_type: "Standard".to_string(),
        check_in: date("2024-01-10"),
        check_out: date("2024-01-12"),
        status: ReservationStatus::Confirmed,
        source: ReservationSource::Direct,
        total_amount: 100_000,
        guests: 2,
        special_requests: None,
    }
}

#[tokio::test]
async fn create_returns_fully_populated_record() {
    let store = ReservationStore::new(DeskState::new(), test_env());

    let created = store.create(sample_draft()).await.unwrap();

    assert!(!created.id.as_str().is_empty());
    assert_eq!(created.created_at, test_clock().now());
    assert_eq!(created.guest_name, "Test");
    assert_eq!(created.room_number, "101");
    assert_eq!(created.guests, 2);

    let listed = store.list().await;
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn sequential_creates_have_distinct_ids() {
    let store = ReservationStore::new(DeskState::new(), test_env());

    let a = store.create(sample_draft()).await.unwrap();
    let b = store.create(sample_draft()).await.unwrap();
    let c = store.create(sample_draft()).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
}

#[tokio::test]
async fn update_changes_only_patched_fields() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    let created = store.create(sample_draft()).await.unwrap();

    store
        .update(
            created.id.clone(),
            ReservationPatch {
                status: Some(ReservationStatus::Cancelled),
                ..ReservationPatch::default()
            },
        )
        .await
        .unwrap();

    let after = store.list().await.remove(0);
    assert_eq!(after.status, ReservationStatus::Cancelled);
    assert_eq!(after.id, created.id);
    assert_eq!(after.created_at, created.created_at);
    assert_eq!(after.guest_name, created.guest_name);
    assert_eq!(after.total_amount, created.total_amount);
}

#[tokio::test]
async fn update_unknown_id_leaves_collection_unchanged() {
    let store = ReservationStore::new(DeskState::seeded(&test_clock()), test_env());
    let before = store.list().await;

    store
        .update(
            "nonexistent-id".into(),
            ReservationPatch {
                status: Some(ReservationStatus::Cancelled),
                ..ReservationPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(store.list().await, before);
}

#[tokio::test]
async fn delete_removes_exactly_one_and_repeats_are_noops() {
    let store = ReservationStore::new(DeskState::seeded(&test_clock()), test_env());

    store.delete("2".into()).await.unwrap();

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|r| r.id.as_str() != "2"));

    store.delete("2".into()).await.unwrap();
    assert_eq!(store.list().await.len(), 2);
}

#[tokio::test]
async fn seeded_delete_scenario_keeps_revenue_consistent() {
    let store = ReservationStore::new(DeskState::seeded(&test_clock()), test_env());

    store.delete("2".into()).await.unwrap();

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    let expected: u64 = listed.iter().map(|r| r.total_amount).sum();

    let stats = store.dashboard().await;
    assert_eq!(stats.total_revenue, expected);
    assert_eq!(stats.total_revenue, 250_000 + 450_000);
}

#[tokio::test]
async fn query_by_date_uses_half_open_interval() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    let created = store.create(sample_draft()).await.unwrap();

    for day in ["2024-01-10", "2024-01-11"] {
        let on = store.reservations_on(date(day)).await;
        assert_eq!(on.len(), 1, "expected occupancy on {day}");
        assert_eq!(on[0].id, created.id);
    }
    assert!(store.reservations_on(date("2024-01-12")).await.is_empty());
    assert!(store.reservations_on(date("2024-01-09")).await.is_empty());
}

#[tokio::test]
async fn occupant_lookup_matches_room_and_date() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    let created = store.create(sample_draft()).await.unwrap();

    let occupant = store.occupant_of("101", date("2024-01-10")).await.unwrap();
    assert_eq!(occupant.id, created.id);
    assert!(store.occupant_of("102", date("2024-01-10")).await.is_none());
    assert!(store.occupant_of("101", date("2024-01-12")).await.is_none());
}

#[tokio::test]
async fn revenue_includes_cancelled_reservations() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    let created = store.create(sample_draft()).await.unwrap();
    store.create(sample_draft()).await.unwrap();

    store
        .update(
            created.id,
            ReservationPatch {
                status: Some(ReservationStatus::Cancelled),
                ..ReservationPatch::default()
            },
        )
        .await
        .unwrap();

    let stats = store.dashboard().await;
    assert_eq!(stats.total_revenue, 200_000);
    assert_eq!(stats.active_guests, 1);
}

#[tokio::test]
async fn events_arrive_synchronously_in_mutation_order() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    let mut events = store.subscribe();

    let created = store.create(sample_draft()).await.unwrap();
    store
        .update(
            created.id.clone(),
            ReservationPatch {
                guests: Some(3),
                ..ReservationPatch::default()
            },
        )
        .await
        .unwrap();
    store.delete(created.id.clone()).await.unwrap();

    let first = events.recv().await.unwrap();
    assert!(
        matches!(&first, DeskAction::ReservationCreated { reservation } if reservation.id == created.id)
    );
    let second = events.recv().await.unwrap();
    assert!(
        matches!(&second, DeskAction::ReservationUpdated { reservation } if reservation.guests == 3)
    );
    let third = events.recv().await.unwrap();
    assert!(matches!(&third, DeskAction::ReservationDeleted { id } if *id == created.id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sources_publish_events_in_mutation_order() {
    // Two mutation sources at once: the generator task (entropy 0.0, so
    // every tick admits an arrival) and direct creates from this task.
    let environment = DeskEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdSource::new()),
        Arc::new(ScriptedEntropy::constant(0.0)),
    );
    let store = ReservationStore::with_event_capacity(DeskState::new(), environment, 64);
    let mut events = store.subscribe();

    let (driver, ticker) = manual_ticker();
    let generator = spawn_arrival_generator(store.clone(), ticker);

    for _ in 0..10 {
        driver.tick();
        store.create(sample_draft()).await.unwrap();
    }

    let mut event_ids = Vec::new();
    while event_ids.len() < 20 {
        let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .expect("timed out waiting for change events")
            .unwrap();
        let DeskAction::ReservationCreated { reservation } = event else {
            panic!("expected only created events, got {event:?}");
        };
        event_ids.push(reservation.id);
    }
    generator.stop();

    // Whatever interleaving the scheduler picked, the event stream must
    // replay the book's insertion order exactly.
    let listed_ids: Vec<_> = store.list().await.into_iter().map(|r| r.id).collect();
    assert_eq!(event_ids, listed_ids);
}

#[tokio::test]
async fn silent_noops_publish_nothing() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    let mut events = store.subscribe();

    store
        .update("missing".into(), ReservationPatch::default())
        .await
        .unwrap();
    store.delete("missing".into()).await.unwrap();

    // The next real mutation's event must be the first thing received.
    store.create(sample_draft()).await.unwrap();
    let first = events.recv().await.unwrap();
    assert!(matches!(first, DeskAction::ReservationCreated { .. }));
}

#[tokio::test]
async fn shutdown_rejects_further_actions() {
    let store = ReservationStore::new(DeskState::new(), test_env());
    store.create(sample_draft()).await.unwrap();

    store.shutdown();
    assert!(store.is_shutdown());

    let result = store.create(sample_draft()).await;
    assert_eq!(result.unwrap_err(), StoreError::ShutdownInProgress);

    // Reads still work after shutdown.
    assert_eq!(store.list().await.len(), 1);
}

#[tokio::test]
async fn dashboard_counts_todays_arrivals_with_environment_clock() {
    // Seed dates are relative to the frozen test clock: reservation "1"
    // checks in today.
    let store = ReservationStore::new(DeskState::seeded(&test_clock()), test_env());

    let stats = store.dashboard().await;
    assert_eq!(stats.todays_arrivals, 1);
    assert_eq!(stats.active_guests, 2);
    assert!((stats.occupancy_rate - 6.0).abs() < f64::EPSILON);
}
