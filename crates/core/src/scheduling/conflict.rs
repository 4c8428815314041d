//! Reservation conflict detection
//!
//! Runs only after interval validation succeeds; overlap checks against an
//! invalid interval are meaningless.

use praxis_domain::{Interval, Reservation, Room};

/// True when `interval` overlaps an existing reservation of the same room
///
/// Rooms match by their unique name. Overlap is half-open, so reservations
/// that merely touch endpoints coexist.
pub fn has_conflict(room: &Room, interval: &Interval, reservations: &[Reservation]) -> bool {
    reservations
        .iter()
        .any(|reservation| {
            reservation.room.name == room.name && reservation.interval.overlaps(interval)
        })
}
