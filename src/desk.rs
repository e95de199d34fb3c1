//! Booking lifecycle manager and session context.
//!
//! [`FrontDesk`] is the explicit session context: it owns the room catalog,
//! the booking log, the store, and the payment collaborator, and every
//! operation goes through it. No globals, no singletons. The catalog is
//! loaded once and immutable for the session; the booking log grows by
//! appending and mutates only through status transitions, with the full log
//! rewritten to storage after every mutation.

use crate::availability;
use crate::error::{DeskError, Result};
use crate::payment::PaymentGateway;
use crate::store::FlatFileStore;
use crate::types::{Booking, BookingId, BookingStatus, Money, Room, RoomId, StayRange};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Outcome of a cancellation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The booking was transitioned to `CANCELLED` and persisted
    Cancelled,
    /// The booking was already cancelled; nothing changed
    AlreadyCancelled,
}

/// Session context for one operator: catalog, log, store, and gateway.
pub struct FrontDesk {
    store: FlatFileStore,
    gateway: Box<dyn PaymentGateway>,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl FrontDesk {
    /// Opens a session, loading the catalog and booking log from the store.
    ///
    /// Loading never fails upward: a missing rooms file seeds the default
    /// catalog and a missing bookings file starts an empty log.
    #[must_use]
    pub fn open(store: FlatFileStore, gateway: Box<dyn PaymentGateway>) -> Self {
        let rooms = store.load_rooms();
        let bookings = store.load_bookings();
        info!(rooms = rooms.len(), bookings = bookings.len(), "front desk opened");
        Self {
            store,
            gateway,
            rooms,
            bookings,
        }
    }

    /// The room catalog, in load order
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The full booking log, in creation order, cancelled and failed included
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Looks up a room by id
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Rooms matching the category filter with no blocking booking over the
    /// requested stay.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidRange`] unless `checkout` is strictly
    /// after `check_in`.
    pub fn search(
        &self,
        category: &str,
        check_in: NaiveDate,
        checkout: NaiveDate,
    ) -> Result<Vec<&Room>> {
        let stay = stay_for(check_in, checkout)?;
        Ok(availability::find_available(
            &self.rooms,
            &self.bookings,
            category,
            &stay,
        ))
    }

    /// Total price for a stay in the given room, from the guest-facing dates
    #[must_use]
    pub fn quote(&self, room: &Room, check_in: NaiveDate, checkout: NaiveDate) -> Money {
        availability::quote(room, check_in, checkout)
    }

    /// Creates a booking: price, payment, status, persist.
    ///
    /// The payment collaborator is invoked exactly once; on approval the
    /// booking is `BOOKED`, on decline `PAYMENT_FAILED`. Either way the
    /// booking is appended to the log and the log is rewritten, so a failed
    /// attempt leaves an audit record. A save failure is reported and the
    /// in-memory log stays authoritative for the session.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidRange`] unless `checkout` is strictly
    /// after `check_in`, or [`DeskError::RoomNotFound`] if the room id is
    /// not in the catalog.
    pub fn create_booking(
        &mut self,
        room_id: &RoomId,
        guest_name: &str,
        guest_phone: &str,
        check_in: NaiveDate,
        checkout: NaiveDate,
    ) -> Result<Booking> {
        let stay = stay_for(check_in, checkout)?;
        let room = self
            .room(room_id)
            .ok_or_else(|| DeskError::RoomNotFound(room_id.clone()))?;
        let total = availability::quote(room, check_in, checkout);
        let mut booking = Booking::new(
            room.id.clone(),
            guest_name.to_string(),
            guest_phone.to_string(),
            stay,
            total,
        );
        let paid = self.gateway.process_payment(total);
        booking.status = if paid {
            BookingStatus::Booked
        } else {
            BookingStatus::PaymentFailed
        };
        info!(
            booking = %booking.id,
            room = %booking.room_id,
            total = %total,
            status = %booking.status,
            "booking recorded"
        );
        let recorded = booking.clone();
        self.bookings.push(booking);
        self.persist_bookings();
        Ok(recorded)
    }

    /// Cancels a booking by id.
    ///
    /// An already-cancelled booking is a no-op; any other status, including
    /// `PAYMENT_FAILED`, transitions to `CANCELLED` and is persisted. The
    /// booking stays in the log as an audit record.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::BookingNotFound`] if no booking has that id.
    pub fn cancel(&mut self, id: &BookingId) -> Result<CancelOutcome> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|booking| &booking.id == id)
            .ok_or(DeskError::BookingNotFound(*id))?;
        if booking.status == BookingStatus::Cancelled {
            return Ok(CancelOutcome::AlreadyCancelled);
        }
        booking.status = BookingStatus::Cancelled;
        info!(booking = %id, "booking cancelled");
        self.persist_bookings();
        Ok(CancelOutcome::Cancelled)
    }

    /// First booking with the given id, if any
    #[must_use]
    pub fn find_by_id(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|booking| &booking.id == id)
    }

    /// Bookings whose guest name contains the text, case-insensitively, in
    /// creation order
    #[must_use]
    pub fn find_by_guest(&self, text: &str) -> Vec<&Booking> {
        let needle = text.to_lowercase();
        self.bookings
            .iter()
            .filter(|booking| booking.guest_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Explicitly rewrites the booking log (save-and-exit).
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Io`] if the bookings file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.store.save_bookings(&self.bookings)
    }

    fn persist_bookings(&self) {
        if let Err(error) = self.store.save_bookings(&self.bookings) {
            warn!(%error, "failed to persist booking log, in-memory state remains authoritative");
        }
    }
}

fn stay_for(check_in: NaiveDate, checkout: NaiveDate) -> Result<StayRange> {
    StayRange::from_checkout(check_in, checkout).ok_or(DeskError::InvalidRange { check_in, checkout })
}
