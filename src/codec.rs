//! Line codec for the persisted record format.
//!
//! One record per line, comma-delimited. Free-text fields pass through a
//! five-character escape token for literal commas; dates are `YYYY-MM-DD` and
//! prices use the locale-independent decimal form from [`Money`]. Decoding is
//! strict: a short line or any field that fails to parse yields a
//! [`DeskError::MalformedRecord`] for the caller to skip, never a panic.
//!
//! The escape token is not reversible for inputs that themselves contain the
//! literal token text; that input is considered illegitimate (see DESIGN.md).

use crate::error::{DeskError, Result};
use crate::types::{Booking, BookingId, BookingStatus, Money, Room, RoomId, StayRange};
use chrono::NaiveDate;

const DELIMITER: char = ',';
const ESCAPE_TOKEN: &str = "&#44;";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field count of a room line: `id,category,pricePerNight`
const ROOM_FIELDS: usize = 3;
/// Field count of a booking line:
/// `bookingId,roomId,guestName,guestPhone,start,end,total,status`
const BOOKING_FIELDS: usize = 8;

fn escape(field: &str) -> String {
    field.replace(DELIMITER, ESCAPE_TOKEN)
}

fn unescape(field: &str) -> String {
    field.replace(ESCAPE_TOKEN, ",")
}

fn parse_date(field: &str, name: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field, DATE_FORMAT)
        .map_err(|_| DeskError::malformed(format!("{name} is not a YYYY-MM-DD date: {field:?}")))
}

fn parse_money(field: &str, name: &str) -> Result<Money> {
    Money::parse_decimal(field)
        .ok_or_else(|| DeskError::malformed(format!("{name} is not a decimal amount: {field:?}")))
}

/// Encodes a room as a single line of the rooms file
#[must_use]
pub fn encode_room(room: &Room) -> String {
    [
        escape(room.id.as_str()),
        escape(&room.category),
        room.price_per_night.to_decimal_string(),
    ]
    .join(",")
}

/// Decodes one line of the rooms file.
///
/// # Errors
///
/// Returns [`DeskError::MalformedRecord`] if the line has fewer than three
/// fields or the price fails to parse.
pub fn decode_room(line: &str) -> Result<Room> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < ROOM_FIELDS {
        return Err(DeskError::malformed(format!(
            "room line has {} of {ROOM_FIELDS} fields",
            fields.len()
        )));
    }
    Ok(Room {
        id: RoomId::new(unescape(fields[0])),
        category: unescape(fields[1]),
        price_per_night: parse_money(fields[2], "nightly price")?,
    })
}

/// Encodes a booking as a single line of the bookings file.
///
/// The stored end date is the last occupied night, one day before the
/// guest-facing checkout date.
#[must_use]
pub fn encode_booking(booking: &Booking) -> String {
    [
        escape(&booking.id.to_string()),
        escape(booking.room_id.as_str()),
        escape(&booking.guest_name),
        escape(&booking.guest_phone),
        booking.stay.first_night().format(DATE_FORMAT).to_string(),
        booking.stay.last_night().format(DATE_FORMAT).to_string(),
        booking.total_price.to_decimal_string(),
        escape(booking.status.as_str()),
    ]
    .join(",")
}

/// Decodes one line of the bookings file.
///
/// Splitting preserves empty trailing fields, so a booking with an empty
/// phone number survives the round trip.
///
/// # Errors
///
/// Returns [`DeskError::MalformedRecord`] if the line has fewer than eight
/// fields, the id is not a UUID, a date or amount fails to parse, or the
/// status token is outside the closed set.
pub fn decode_booking(line: &str) -> Result<Booking> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < BOOKING_FIELDS {
        return Err(DeskError::malformed(format!(
            "booking line has {} of {BOOKING_FIELDS} fields",
            fields.len()
        )));
    }
    let id = BookingId::parse(&unescape(fields[0]))
        .ok_or_else(|| DeskError::malformed(format!("booking id is not a UUID: {:?}", fields[0])))?;
    let status_token = unescape(fields[7]);
    let status = BookingStatus::parse(&status_token)
        .ok_or_else(|| DeskError::malformed(format!("unknown status: {status_token:?}")))?;
    Ok(Booking {
        id,
        room_id: RoomId::new(unescape(fields[1])),
        guest_name: unescape(fields[2]),
        guest_phone: unescape(fields[3]),
        stay: StayRange::new(
            parse_date(fields[4], "start date")?,
            parse_date(fields[5], "end date")?,
        ),
        total_price: parse_money(fields[6], "total price")?,
        status,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn room_line_matches_the_persisted_format() {
        let room = Room::new(RoomId::new("R101"), "Standard".to_string(), Money::from_units(1500));
        assert_eq!(encode_room(&room), "R101,Standard,1500.00");
        assert_eq!(decode_room("R101,Standard,1500.00").unwrap(), room);
    }

    #[test]
    fn commas_in_free_text_are_escaped() {
        let room = Room::new(
            RoomId::new("R9"),
            "Suite, sea view".to_string(),
            Money::from_units(4000),
        );
        let line = encode_room(&room);
        assert_eq!(line, "R9,Suite&#44; sea view,4000.00");
        assert_eq!(decode_room(&line).unwrap(), room);
    }

    #[test]
    fn booking_round_trips_with_commas_in_every_text_field() {
        let booking = Booking {
            id: BookingId::new(),
            room_id: RoomId::new("R,1"),
            guest_name: "Rao, Priya".to_string(),
            guest_phone: "+91, 98765".to_string(),
            stay: StayRange::new(date(2025, 1, 1), date(2025, 1, 4)),
            total_price: Money::from_units(6000),
            status: BookingStatus::Booked,
        };
        let line = encode_booking(&booking);
        assert_eq!(decode_booking(&line).unwrap(), booking);
    }

    #[test]
    fn empty_trailing_fields_are_preserved() {
        let booking = Booking {
            id: BookingId::new(),
            room_id: RoomId::new("R101"),
            guest_name: String::new(),
            guest_phone: String::new(),
            stay: StayRange::new(date(2025, 1, 1), date(2025, 1, 1)),
            total_price: Money::from_units(1500),
            status: BookingStatus::Booked,
        };
        let line = encode_booking(&booking);
        let decoded = decode_booking(&line).unwrap();
        assert_eq!(decoded.guest_name, "");
        assert_eq!(decoded.guest_phone, "");
    }

    #[test]
    fn short_lines_are_malformed() {
        assert!(decode_room("R101,Standard").is_err());
        assert!(decode_booking("a,b,c").is_err());
        assert!(decode_booking("").is_err());
    }

    #[test]
    fn bad_numeric_and_date_fields_are_malformed() {
        assert!(decode_room("R101,Standard,abc").is_err());
        assert!(decode_room("R101,Standard,-1500").is_err());
        let id = BookingId::new();
        assert!(decode_booking(&format!("{id},R101,G,P,2025-13-01,2025-01-04,1500.00,BOOKED")).is_err());
        assert!(decode_booking(&format!("{id},R101,G,P,2025-01-01,2025-01-04,oops,BOOKED")).is_err());
    }

    #[test]
    fn unknown_status_and_non_uuid_id_are_malformed() {
        let id = BookingId::new();
        assert!(decode_booking(&format!("{id},R101,G,P,2025-01-01,2025-01-04,1500.00,REFUNDED")).is_err());
        assert!(decode_booking("not-a-uuid,R101,G,P,2025-01-01,2025-01-04,1500.00,BOOKED").is_err());
    }
}
