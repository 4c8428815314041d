//! Room eligibility rules
//!
//! Surgeons book surgery-capable rooms; every other specialty (and the
//! nothing-selected state) books dermatology-capable rooms. The queries are
//! pure: resetting the UI's room selection after a doctor change is an
//! explicit caller action fed by [`default_selection`], never a side effect
//! of reading the eligible list.

use praxis_domain::{Doctor, Room};

/// Rooms the given doctor may book
pub fn eligible_rooms(doctor: Option<&Doctor>, rooms: &[Room]) -> Vec<Room> {
    let surgical = doctor.is_some_and(|doctor| doctor.specialty.is_surgical());

    rooms
        .iter()
        .filter(|room| {
            if surgical {
                room.room_type.supports_surgery()
            } else {
                room.room_type.supports_dermatology()
            }
        })
        .cloned()
        .collect()
}

/// The room a changed doctor selection should reset to
///
/// First room of the newly eligible set, or none if the set is empty.
pub fn default_selection(doctor: Option<&Doctor>, rooms: &[Room]) -> Option<Room> {
    eligible_rooms(doctor, rooms).into_iter().next()
}
