//! Record codec round-trip tests.
//!
//! The persisted format must be a bijection for legitimate input, including
//! fields containing the comma delimiter.
//!
//! Run with: `cargo test --test codec_roundtrip_test`

#![allow(clippy::unwrap_used)]

use chrono::{Duration, NaiveDate};
use frontdesk::codec::{decode_booking, decode_room, encode_booking, encode_room};
use frontdesk::types::{Booking, BookingId, BookingStatus, Money, Room, RoomId, StayRange};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn room_with_delimiters_in_every_text_field_round_trips() {
    let room = Room::new(
        RoomId::new("R,101"),
        "Standard, garden side".to_string(),
        Money::from_units(1500),
    );
    let decoded = decode_room(&encode_room(&room)).unwrap();
    assert_eq!(decoded, room);
}

#[test]
fn booking_with_delimiters_in_every_text_field_round_trips() {
    let booking = Booking {
        id: BookingId::new(),
        room_id: RoomId::new("R,201"),
        guest_name: "Kumar, Anil, Jr.".to_string(),
        guest_phone: "+91,98,76".to_string(),
        stay: StayRange::new(date(2025, 1, 1), date(2025, 1, 5)),
        total_price: Money::from_cents(1_250_050),
        status: BookingStatus::Cancelled,
    };
    let decoded = decode_booking(&encode_booking(&booking)).unwrap();
    assert_eq!(decoded, booking);
}

#[test]
fn malformed_lines_never_decode() {
    for line in [
        "",
        "R101",
        "R101,Standard",
        "R101,Standard,12.345",
        "R101,Standard,12x",
    ] {
        assert!(decode_room(line).is_err(), "room line should fail: {line:?}");
    }
    let id = BookingId::new();
    for line in [
        String::new(),
        format!("{id},R101,Guest,Phone,2025-01-01,2025-01-04,4500.00"),
        format!("{id},R101,Guest,Phone,2025-01-99,2025-01-04,4500.00,BOOKED"),
        format!("{id},R101,Guest,Phone,2025-01-01,2025-01-04,4500.00,HELD"),
        "not-a-uuid,R101,Guest,Phone,2025-01-01,2025-01-04,4500.00,BOOKED".to_string(),
    ] {
        assert!(decode_booking(&line).is_err(), "booking line should fail: {line:?}");
    }
}

// The alphabet includes the delimiter but cannot form the escape token
// (no '&' or '#'), which is the documented boundary of legitimate input.
const FREE_TEXT: &str = "[A-Za-z0-9 ,.'+-]{0,40}";

prop_compose! {
    fn arb_status()(index in 0usize..4) -> BookingStatus {
        [
            BookingStatus::PendingPayment,
            BookingStatus::Booked,
            BookingStatus::PaymentFailed,
            BookingStatus::Cancelled,
        ][index]
    }
}

proptest! {
    #[test]
    fn any_room_round_trips(
        id in FREE_TEXT,
        category in FREE_TEXT,
        cents in 0u64..100_000_000,
    ) {
        let room = Room::new(RoomId::new(id), category, Money::from_cents(cents));
        let decoded = decode_room(&encode_room(&room)).unwrap();
        prop_assert_eq!(decoded, room);
    }

    #[test]
    fn any_booking_round_trips(
        room_id in FREE_TEXT,
        guest_name in FREE_TEXT,
        guest_phone in FREE_TEXT,
        cents in 0u64..100_000_000,
        start_offset in 0i64..3650,
        stay_nights in 0i64..30,
        status in arb_status(),
    ) {
        let first_night = date(2024, 1, 1) + Duration::days(start_offset);
        let booking = Booking {
            id: BookingId::new(),
            room_id: RoomId::new(room_id),
            guest_name,
            guest_phone,
            stay: StayRange::new(first_night, first_night + Duration::days(stay_nights)),
            total_price: Money::from_cents(cents),
            status,
        };
        let decoded = decode_booking(&encode_booking(&booking)).unwrap();
        prop_assert_eq!(decoded, booking);
    }
}
