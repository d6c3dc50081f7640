//! Frontdesk demo binary
//!
//! Runs the reservation desk headless for a few seconds: seeds the book,
//! subscribes to change events (the "new external reservation" alert the UI
//! would show), lets the arrival generator tick fast, then prints the
//! dashboard and this week's calendar row for each room.

use chrono::Days;
use frontdesk_core::desk::{DeskAction, DeskEnvironment};
use frontdesk_core::reservation::{ReservationPatch, ReservationStatus};
use frontdesk_core::rooms::ROOM_DIRECTORY;
use frontdesk_core::state::DeskState;
use frontdesk_runtime::generator::{IntervalTicker, spawn_arrival_generator};
use frontdesk_runtime::store::ReservationStore;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontdesk_demo=info,frontdesk_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Frontdesk: reservation desk demo ===\n");

    let environment = DeskEnvironment::system();
    let today = environment.clock.today();
    let store = ReservationStore::new(DeskState::seeded(environment.clock.as_ref()), environment);
    tracing::info!(%today, seeded = store.list().await.len(), "reservation desk ready");

    // Surface change events the way the admin UI would.
    let mut events = store.subscribe();
    let alerts = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                DeskAction::ReservationCreated { reservation } => {
                    println!(
                        ">>> Nueva reserva recibida: {} (hab. {}, {})",
                        reservation.guest_name, reservation.room_number, reservation.source
                    );
                },
                DeskAction::ReservationUpdated { reservation } => {
                    println!(">>> Reserva actualizada: {}", reservation.id);
                },
                DeskAction::ReservationDeleted { id } => {
                    println!(">>> Reserva eliminada: {id}");
                },
                _ => {},
            }
        }
    });

    // A manual desk action, then a burst of simulated external arrivals
    // (fast cadence so the demo does not take 30-second steps).
    store
        .update(
            "3".into(),
            ReservationPatch {
                status: Some(ReservationStatus::Confirmed),
                ..ReservationPatch::default()
            },
        )
        .await?;

    let generator =
        spawn_arrival_generator(store.clone(), IntervalTicker::new(Duration::from_millis(400)));
    tokio::time::sleep(Duration::from_secs(5)).await;
    generator.stop();

    // Dashboard
    let stats = store.dashboard().await;
    println!("\n--- Dashboard ---");
    println!("Reservas hoy:      {}", stats.todays_arrivals);
    println!("Huéspedes activos: {}", stats.active_guests);
    println!("Ingresos totales:  ${}", stats.total_revenue);
    println!("Ocupación:         {:.1}%", stats.occupancy_rate);

    // This week's occupancy grid
    println!("\n--- Calendario (semana) ---");
    for room in ROOM_DIRECTORY {
        let mut row = format!("Hab. {:>3} [{}]: ", room.number, room.room_type);
        for offset in 0..7 {
            let date = today + Days::new(offset);
            let cell = match store.occupant_of(room.number, date).await {
                Some(r) => r.status.as_str().chars().next().unwrap_or('?'),
                None => '.',
            };
            row.push(cell);
        }
        println!("{row}");
    }

    store.shutdown();
    alerts.abort();
    println!("\n=== Demo complete ===");
    Ok(())
}
