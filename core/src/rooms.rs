//! Static room directory.
//!
//! Rooms are reference data used by the calendar grid for grouping; nothing
//! in the desk mutates them. The directory is the fixed ten-room inventory
//! of the demo hotel.

/// A physical room of the hotel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    /// Room number label, e.g. "101"
    pub number: &'static str,
    /// Room type label
    pub room_type: &'static str,
    /// Maximum number of guests
    pub capacity: u32,
}

/// The fixed room inventory, in floor order
pub const ROOM_DIRECTORY: &[Room] = &[
    Room { number: "101", room_type: "Suite Deluxe", capacity: 2 },
    Room { number: "102", room_type: "Habitación Estándar", capacity: 2 },
    Room { number: "103", room_type: "Suite Junior", capacity: 3 },
    Room { number: "201", room_type: "Habitación Estándar", capacity: 2 },
    Room { number: "202", room_type: "Suite Deluxe", capacity: 2 },
    Room { number: "203", room_type: "Habitación Estándar", capacity: 1 },
    Room { number: "301", room_type: "Suite Presidencial", capacity: 4 },
    Room { number: "302", room_type: "Suite Deluxe", capacity: 2 },
    Room { number: "303", room_type: "Suite Junior", capacity: 3 },
    Room { number: "401", room_type: "Habitación Estándar", capacity: 2 },
];

/// Looks up a room by its number label
#[must_use]
pub fn find(number: &str) -> Option<&'static Room> {
    ROOM_DIRECTORY.iter().find(|room| room.number == number)
}
