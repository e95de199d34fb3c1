//! Flat-file persistence for the room catalog and the booking log.
//!
//! Two independent text files, one record per line (see [`crate::codec`]).
//! Loading degrades gracefully: a missing rooms file seeds the default
//! catalog, a missing bookings file is an empty log, malformed lines are
//! skipped with a warning, and an unreadable file falls back to the safe
//! default for that file. Saving is a whole-file rewrite with no atomic
//! rename; a crash mid-write can corrupt the destination, which is an
//! accepted limitation of this system.

use crate::codec;
use crate::error::{DeskError, Result};
use crate::types::{Booking, Money, Room, RoomId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Store backed by two flat text files.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    rooms_path: PathBuf,
    bookings_path: PathBuf,
}

impl FlatFileStore {
    /// Creates a store over the given rooms and bookings file paths
    pub fn new(rooms_path: impl Into<PathBuf>, bookings_path: impl Into<PathBuf>) -> Self {
        Self {
            rooms_path: rooms_path.into(),
            bookings_path: bookings_path.into(),
        }
    }

    /// Path of the rooms file
    #[must_use]
    pub fn rooms_path(&self) -> &Path {
        &self.rooms_path
    }

    /// Path of the bookings file
    #[must_use]
    pub fn bookings_path(&self) -> &Path {
        &self.bookings_path
    }

    /// Loads the room catalog.
    ///
    /// A missing file seeds the nine default rooms and immediately persists
    /// them; an unreadable file falls back to the defaults. Either way the
    /// session starts with a usable catalog, so this never fails upward.
    #[must_use]
    pub fn load_rooms(&self) -> Vec<Room> {
        if !self.rooms_path.exists() {
            info!(path = %self.rooms_path.display(), "rooms file missing, seeding default catalog");
            let rooms = default_rooms();
            if let Err(error) = self.save_rooms(&rooms) {
                warn!(%error, "failed to persist seeded catalog");
            }
            return rooms;
        }
        match fs::read_to_string(&self.rooms_path) {
            Ok(contents) => {
                let rooms = decode_lines(&contents, codec::decode_room, "room");
                info!(count = rooms.len(), "room catalog loaded");
                rooms
            }
            Err(error) => {
                warn!(path = %self.rooms_path.display(), %error, "failed to read rooms file, using default catalog");
                default_rooms()
            }
        }
    }

    /// Loads the booking log.
    ///
    /// A missing file is an empty log (no bookings exist yet); an unreadable
    /// file is reported and yields an empty log.
    #[must_use]
    pub fn load_bookings(&self) -> Vec<Booking> {
        if !self.bookings_path.exists() {
            debug!(path = %self.bookings_path.display(), "no bookings file yet, starting fresh");
            return Vec::new();
        }
        match fs::read_to_string(&self.bookings_path) {
            Ok(contents) => {
                let bookings = decode_lines(&contents, codec::decode_booking, "booking");
                info!(count = bookings.len(), "booking log loaded");
                bookings
            }
            Err(error) => {
                warn!(path = %self.bookings_path.display(), %error, "failed to read bookings file, starting with an empty log");
                Vec::new()
            }
        }
    }

    /// Rewrites the rooms file with the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Io`] if the file cannot be written; the in-memory
    /// catalog remains authoritative for the session.
    pub fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        let contents = render_lines(rooms, codec::encode_room);
        write_whole_file(&self.rooms_path, &contents)
    }

    /// Rewrites the bookings file with the full log.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Io`] if the file cannot be written; the in-memory
    /// log remains authoritative for the session.
    pub fn save_bookings(&self, bookings: &[Booking]) -> Result<()> {
        let contents = render_lines(bookings, codec::encode_booking);
        write_whole_file(&self.bookings_path, &contents)
    }
}

fn decode_lines<T>(contents: &str, decode: impl Fn(&str) -> Result<T>, kind: &str) -> Vec<T> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match decode(line) {
            Ok(record) => records.push(record),
            Err(error) => {
                skipped += 1;
                warn!(line = index + 1, %error, "skipping malformed {kind} record");
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "{kind} file loaded with malformed lines skipped");
    }
    records
}

fn render_lines<T>(records: &[T], encode: impl Fn(&T) -> String) -> String {
    let mut contents = String::new();
    for record in records {
        contents.push_str(&encode(record));
        contents.push('\n');
    }
    contents
}

fn write_whole_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| DeskError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// The catalog seeded on first run: three rooms in each of the three
/// default categories.
#[must_use]
pub fn default_rooms() -> Vec<Room> {
    [
        ("R101", "Standard", 1500),
        ("R102", "Standard", 1500),
        ("R103", "Standard", 1500),
        ("R201", "Deluxe", 2500),
        ("R202", "Deluxe", 2500),
        ("R203", "Deluxe", 2600),
        ("R301", "Suite", 4000),
        ("R302", "Suite", 4200),
        ("R303", "Suite", 4500),
    ]
    .into_iter()
    .map(|(id, category, rate)| {
        Room::new(RoomId::new(id), category.to_string(), Money::from_units(rate))
    })
    .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_nine_rooms_in_three_categories() {
        let rooms = default_rooms();
        assert_eq!(rooms.len(), 9);
        for category in ["Standard", "Deluxe", "Suite"] {
            assert_eq!(rooms.iter().filter(|r| r.category == category).count(), 3);
        }
    }

    #[test]
    fn default_catalog_ids_are_unique() {
        let rooms = default_rooms();
        for (i, room) in rooms.iter().enumerate() {
            assert!(rooms[i + 1..].iter().all(|other| other.id != room.id));
        }
    }
}
