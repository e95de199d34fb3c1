//! Hotel room inventory and reservation desk.
//!
//! A single-operator booking system persisted to two flat text files between
//! runs: list rooms, find rooms free in a date range, create bookings with a
//! simulated payment step, cancel bookings, and query booking history.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────┐
//! │       Interactive Shell       │  menu, prompts, formatting
//! └───────────────┬───────────────┘
//!                 │
//! ┌───────────────▼───────────────┐     ┌─────────────────┐
//! │   FrontDesk (session context) │────▶│ PaymentGateway  │
//! │   create / cancel / lookup    │     │   (simulated)   │
//! └───────┬───────────────┬───────┘     └─────────────────┘
//!         │               │
//! ┌───────▼──────┐ ┌──────▼────────┐
//! │ Availability │ │ FlatFileStore │
//! │    Engine    │ │  load / save  │
//! └──────────────┘ └──────┬────────┘
//!                         │
//!                  ┌──────▼────────┐
//!                  │  Record Codec │  one escaped line per record
//!                  └───────────────┘
//! ```
//!
//! # Key behaviors
//!
//! - **Closed-interval availability**: a booking stores its last occupied
//!   night, one day before checkout, so back-to-back stays never conflict.
//! - **Fixed pricing**: the total is nights × nightly rate, computed once at
//!   creation and never recomputed.
//! - **Audit-keeping lifecycle**: payment failures and cancellations are
//!   status transitions, never deletions.
//! - **Graceful loading**: malformed persisted lines are skipped, a missing
//!   catalog is seeded with defaults, and I/O trouble falls back to safe
//!   in-memory state.
//!
//! Single-threaded and synchronous by design: one operator, sequential
//! operations. Exposing this core as a service would require a mutex around
//! the session context before allowing concurrent callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod availability;
pub mod codec;
pub mod config;
pub mod desk;
pub mod error;
pub mod payment;
pub mod store;
pub mod types;

pub use config::Config;
pub use desk::{CancelOutcome, FrontDesk};
pub use error::{DeskError, Result};
pub use payment::PaymentGateway;
pub use store::FlatFileStore;
pub use types::{Booking, BookingId, BookingStatus, Money, Room, RoomId, StayRange};
