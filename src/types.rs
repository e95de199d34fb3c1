//! Domain types for the hotel reservation desk.
//!
//! This module contains the value objects and entities shared by the codec,
//! the persistence store, the availability engine, and the booking lifecycle:
//! identifier newtypes, a cents-based `Money` type, the closed-interval
//! `StayRange`, and the `Room`/`Booking` entities with their status machine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier for a room (e.g. "R101").
///
/// Unique across the catalog for the lifetime of a session and used as a
/// foreign key by bookings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a `RoomId` from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a booking, generated at creation and never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Creates a new random `BookingId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a `BookingId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses the hyphenated UUID form, returning `None` for anything else
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Uuid::parse_str(text).ok().map(Self)
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from whole currency units, saturating on overflow
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity, saturating on overflow
    #[must_use]
    pub const fn saturating_multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Locale-independent decimal form used by the persisted record format,
    /// always with two fraction digits (`"2500.00"`)
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    /// Parses the locale-independent decimal form.
    ///
    /// Accepts a plain digit run with an optional `.` and up to two fraction
    /// digits (`"2500"`, `"2500.5"`, `"2500.00"`). Signs, grouping separators
    /// and longer fractions are rejected, so a negative price can never enter
    /// the catalog.
    #[must_use]
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        if whole.is_empty() || fraction.len() > 2 {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let units: u64 = whole.parse().ok()?;
        let fraction_cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };
        units.checked_mul(100)?.checked_add(fraction_cents).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ============================================================================
// Stay Range (closed interval of occupied nights)
// ============================================================================

/// The nights a booking occupies, as a closed interval of dates.
///
/// Both bounds are occupied nights: `last_night` is the night *before* the
/// guest-facing checkout date. Keeping the two representations distinct is
/// what makes boundary-adjacent stays (one guest checks out the morning
/// another checks in) non-overlapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    first_night: NaiveDate,
    last_night: NaiveDate,
}

impl StayRange {
    /// Creates a range directly from stored inclusive bounds
    #[must_use]
    pub const fn new(first_night: NaiveDate, last_night: NaiveDate) -> Self {
        Self {
            first_night,
            last_night,
        }
    }

    /// Builds the stored range from the guest-facing check-in/checkout pair.
    ///
    /// Returns `None` unless `checkout` is strictly after `check_in`.
    #[must_use]
    pub fn from_checkout(check_in: NaiveDate, checkout: NaiveDate) -> Option<Self> {
        if checkout <= check_in {
            return None;
        }
        let last_night = checkout.pred_opt()?;
        Some(Self {
            first_night: check_in,
            last_night,
        })
    }

    /// First occupied night (the check-in date)
    #[must_use]
    pub const fn first_night(&self) -> NaiveDate {
        self.first_night
    }

    /// Last occupied night (one day before checkout)
    #[must_use]
    pub const fn last_night(&self) -> NaiveDate {
        self.last_night
    }

    /// Guest-facing checkout date, one day after the last occupied night
    #[must_use]
    pub fn checkout(&self) -> NaiveDate {
        self.last_night.succ_opt().unwrap_or(NaiveDate::MAX)
    }

    /// Closed-interval overlap test: two ranges overlap unless one ends
    /// before the other starts
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.last_night < other.first_night || self.first_night > other.last_night)
    }
}

impl fmt::Display for StayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.first_night, self.last_night)
    }
}

// ============================================================================
// Domain Entities
// ============================================================================

/// A room in the catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier
    pub id: RoomId,
    /// Free-form category label (e.g. "Standard", "Deluxe", "Suite")
    pub category: String,
    /// Nightly rate
    pub price_per_night: Money,
}

impl Room {
    /// Creates a new `Room`
    #[must_use]
    pub const fn new(id: RoomId, category: String, price_per_night: Money) -> Self {
        Self {
            id,
            category,
            price_per_night,
        }
    }
}

/// A reservation of one room for a range of nights.
///
/// The total price is computed once at creation and never recomputed, so
/// later catalog price changes cannot retroactively reprice a stay. Bookings
/// are never deleted; cancellation is a status transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier
    pub id: BookingId,
    /// Room this booking occupies
    pub room_id: RoomId,
    /// Guest name
    pub guest_name: String,
    /// Guest phone number
    pub guest_phone: String,
    /// Occupied nights (inclusive bounds)
    pub stay: StayRange,
    /// Total price, fixed at creation
    pub total_price: Money,
    /// Current lifecycle status
    pub status: BookingStatus,
}

impl Booking {
    /// Creates a new booking with a fresh id, awaiting payment
    #[must_use]
    pub fn new(
        room_id: RoomId,
        guest_name: String,
        guest_phone: String,
        stay: StayRange,
        total_price: Money,
    ) -> Self {
        Self {
            id: BookingId::new(),
            room_id,
            guest_name,
            guest_phone,
            stay,
            total_price,
            status: BookingStatus::PendingPayment,
        }
    }
}

/// Booking lifecycle status.
///
/// `PendingPayment` is the transient initial state; the payment outcome moves
/// a booking to `Booked` or `PaymentFailed`, and an explicit cancellation
/// moves it to `Cancelled`. `Cancelled` and `PaymentFailed` bookings stay in
/// the log as audit records but never block a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    /// Created, payment not yet attempted
    PendingPayment,
    /// Payment succeeded
    Booked,
    /// Payment declined
    PaymentFailed,
    /// Explicitly cancelled
    Cancelled,
}

impl BookingStatus {
    /// The exact token used in the persisted record format
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPayment => "PENDING_PAYMENT",
            Self::Booked => "BOOKED",
            Self::PaymentFailed => "PAYMENT_FAILED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a persisted token, rejecting anything outside the closed set
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "PENDING_PAYMENT" => Some(Self::PendingPayment),
            "BOOKED" => Some(Self::Booked),
            "PAYMENT_FAILED" => Some(Self::PaymentFailed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether a booking in this status occupies its room for its date range
    #[must_use]
    pub const fn blocks_availability(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::PaymentFailed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn money_decimal_round_trip() {
        let price = Money::from_cents(250_050);
        assert_eq!(price.to_decimal_string(), "2500.50");
        assert_eq!(Money::parse_decimal("2500.50"), Some(price));
    }

    #[test]
    fn money_parses_integer_and_short_fraction() {
        assert_eq!(Money::parse_decimal("1500"), Some(Money::from_units(1500)));
        assert_eq!(Money::parse_decimal("1500.5"), Some(Money::from_cents(150_050)));
        assert_eq!(Money::parse_decimal("0.05"), Some(Money::from_cents(5)));
    }

    #[test]
    fn money_rejects_signs_and_long_fractions() {
        assert_eq!(Money::parse_decimal("-5"), None);
        assert_eq!(Money::parse_decimal("+5"), None);
        assert_eq!(Money::parse_decimal("1.234"), None);
        assert_eq!(Money::parse_decimal("1,5"), None);
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("."), None);
    }

    #[test]
    fn stay_range_from_checkout_drops_the_checkout_night() {
        let stay = StayRange::from_checkout(date(2025, 3, 1), date(2025, 3, 4)).unwrap();
        assert_eq!(stay.first_night(), date(2025, 3, 1));
        assert_eq!(stay.last_night(), date(2025, 3, 3));
        assert_eq!(stay.checkout(), date(2025, 3, 4));
    }

    #[test]
    fn stay_range_rejects_same_day_and_inverted_checkout() {
        assert!(StayRange::from_checkout(date(2025, 3, 1), date(2025, 3, 1)).is_none());
        assert!(StayRange::from_checkout(date(2025, 3, 4), date(2025, 3, 1)).is_none());
    }

    #[test]
    fn status_tokens_are_a_closed_set() {
        for status in [
            BookingStatus::PendingPayment,
            BookingStatus::Booked,
            BookingStatus::PaymentFailed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("booked"), None);
        assert_eq!(BookingStatus::parse("REFUNDED"), None);
    }

    #[test]
    fn only_cancelled_and_failed_release_the_room() {
        assert!(BookingStatus::PendingPayment.blocks_availability());
        assert!(BookingStatus::Booked.blocks_availability());
        assert!(!BookingStatus::PaymentFailed.blocks_availability());
        assert!(!BookingStatus::Cancelled.blocks_availability());
    }
}
