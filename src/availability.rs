//! Availability engine: which rooms are free for a stay, and what it costs.
//!
//! A room is available for a stay unless some booking for it that still
//! blocks availability (neither cancelled nor failed) overlaps the closed
//! night range. Boundary-adjacent stays never conflict: the stored range ends
//! on the last occupied night, so one guest's checkout morning is another
//! guest's check-in day.

use crate::types::{Booking, Money, Room, StayRange};
use chrono::NaiveDate;

/// Sentinel category filter matching every room (case-insensitive).
/// An empty filter behaves the same way.
pub const ALL_CATEGORIES: &str = "ALL";

fn category_matches(room_category: &str, filter: &str) -> bool {
    filter.is_empty()
        || filter.eq_ignore_ascii_case(ALL_CATEGORIES)
        || room_category.eq_ignore_ascii_case(filter)
}

/// Returns the rooms matching the category filter with no blocking booking
/// overlapping the stay, in catalog order.
#[must_use]
pub fn find_available<'a>(
    rooms: &'a [Room],
    bookings: &[Booking],
    category: &str,
    stay: &StayRange,
) -> Vec<&'a Room> {
    rooms
        .iter()
        .filter(|room| category_matches(&room.category, category))
        .filter(|room| {
            !bookings.iter().any(|booking| {
                booking.room_id == room.id
                    && booking.status.blocks_availability()
                    && booking.stay.overlaps(stay)
            })
        })
        .collect()
}

/// Number of nights between check-in and the guest-facing checkout date,
/// clamped to at least one night for same-day or inverted input.
#[must_use]
pub fn nights(check_in: NaiveDate, checkout: NaiveDate) -> u32 {
    let nights = (checkout - check_in).num_days();
    u32::try_from(nights).ok().filter(|n| *n > 0).unwrap_or(1)
}

/// Total price for a stay: nights times the nightly rate.
///
/// Takes the guest-facing checkout date (exclusive of the last night), not
/// the stored inclusive end date.
#[must_use]
pub fn quote(room: &Room, check_in: NaiveDate, checkout: NaiveDate) -> Money {
    room.price_per_night.saturating_multiply(nights(check_in, checkout))
}
