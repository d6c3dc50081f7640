//! Reservation entity model.
//!
//! A [`Reservation`] links a guest, a room, a calendar date range, and a
//! monetary amount. Stays are half-open intervals: a reservation occupies
//! `[check_in, check_out)`, so the checkout day itself is free.
//!
//! The serde representation uses camelCase field names and lowercase enum
//! values, matching the JSON body an external channel would deliver to a
//! `POST /reservations/external` endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique, opaque identifier for a reservation.
///
/// Identifiers are unique within a store for its whole lifetime. Production
/// ids come from [`crate::environment::TimeBasedIdSource`]; tests typically
/// use small sequential ids ("1", "2", "3").
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Creates an id from any string-like value
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReservationId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ReservationId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a reservation.
///
/// The set is closed: no other value is valid, and parsing rejects anything
/// outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Booking is confirmed
    Confirmed,
    /// Awaiting confirmation
    Pending,
    /// Cancelled; the record is kept until explicitly deleted
    Cancelled,
}

impl ReservationStatus {
    /// Returns the lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status value
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown reservation status: {0:?}")]
pub struct ParseStatusError(String);

impl FromStr for ReservationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// Origin channel of a reservation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationSource {
    /// Booked at the desk or on the hotel's own site
    Direct,
    /// Booked through the OTA channel
    Booking,
    /// Delivered by the external arrivals feed
    External,
}

impl ReservationSource {
    /// Returns the lowercase wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Booking => "booking",
            Self::External => "external",
        }
    }
}

impl fmt::Display for ReservationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown source value
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown reservation source: {0:?}")]
pub struct ParseSourceError(String);

impl FromStr for ReservationSource {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "booking" => Ok(Self::Booking),
            "external" => Ok(Self::External),
            other => Err(ParseSourceError(other.to_owned())),
        }
    }
}

/// A booking record.
///
/// `created_at` is assigned exactly once, when the desk admits the record,
/// and is never mutated afterwards. `check_in < check_out` is expected of all
/// producers (forms, seeds, the arrival generator) but deliberately not
/// enforced here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Unique identifier
    pub id: ReservationId,
    /// Full guest name
    pub guest_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Room number label, e.g. "101"
    pub room_number: String,
    /// Room type label, e.g. "Suite Deluxe"
    pub room_type: String,
    /// First occupied night
    pub check_in: NaiveDate,
    /// Checkout day; not itself occupied
    pub check_out: NaiveDate,
    /// Lifecycle status
    pub status: ReservationStatus,
    /// Origin channel
    pub source: ReservationSource,
    /// Total price for the stay, in minor currency units
    pub total_amount: u64,
    /// Number of guests staying
    pub guests: u32,
    /// Optional free-text special requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// When the record was admitted; write-once
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether the stay contains `date` under the half-open rule
    /// `check_in <= date < check_out`
    #[must_use]
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Length of the stay in nights
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Input for creating a reservation: everything except the fields the desk
/// assigns itself (`id`, `created_at`).
///
/// This is also the wire shape of the conceptual
/// `POST /reservations/external` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    /// Full guest name
    pub guest_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Room number label
    pub room_number: String,
    /// Room type label
    pub room_type: String,
    /// First occupied night
    pub check_in: NaiveDate,
    /// Checkout day
    pub check_out: NaiveDate,
    /// Lifecycle status
    pub status: ReservationStatus,
    /// Origin channel
    pub source: ReservationSource,
    /// Total price for the stay
    pub total_amount: u64,
    /// Number of guests staying
    pub guests: u32,
    /// Optional free-text special requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl ReservationDraft {
    /// Completes the draft into a full record with the desk-assigned fields
    #[must_use]
    pub fn into_reservation(self, id: ReservationId, created_at: DateTime<Utc>) -> Reservation {
        Reservation {
            id,
            guest_name: self.guest_name,
            email: self.email,
            phone: self.phone,
            room_number: self.room_number,
            room_type: self.room_type,
            check_in: self.check_in,
            check_out: self.check_out,
            status: self.status,
            source: self.source,
            total_amount: self.total_amount,
            guests: self.guests,
            special_requests: self.special_requests,
            created_at,
        }
    }
}

/// Partial update for a reservation.
///
/// Only the fields present (`Some`) are merged into the record. `id` and
/// `created_at` are not representable here, so an update can never touch
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPatch {
    /// New guest name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    /// New contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New room number label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    /// New room type label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    /// New check-in date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    /// New checkout date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    /// New lifecycle status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    /// New origin channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ReservationSource>,
    /// New total price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<u64>,
    /// New guest count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    /// New special requests text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl ReservationPatch {
    /// Merges the present fields into `reservation`, leaving the rest alone
    pub fn apply_to(self, reservation: &mut Reservation) {
        if let Some(guest_name) = self.guest_name {
            reservation.guest_name = guest_name;
        }
        if let Some(email) = self.email {
            reservation.email = email;
        }
        if let Some(phone) = self.phone {
            reservation.phone = phone;
        }
        if let Some(room_number) = self.room_number {
            reservation.room_number = room_number;
        }
        if let Some(room_type) = self.room_type {
            reservation.room_type = room_type;
        }
        if let Some(check_in) = self.check_in {
            reservation.check_in = check_in;
        }
        if let Some(check_out) = self.check_out {
            reservation.check_out = check_out;
        }
        if let Some(status) = self.status {
            reservation.status = status;
        }
        if let Some(source) = self.source {
            reservation.source = source;
        }
        if let Some(total_amount) = self.total_amount {
            reservation.total_amount = total_amount;
        }
        if let Some(guests) = self.guests {
            reservation.guests = guests;
        }
        if let Some(special_requests) = self.special_requests {
            reservation.special_requests = Some(special_requests);
        }
    }
}
