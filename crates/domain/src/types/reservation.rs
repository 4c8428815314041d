//! Reservations and their time intervals

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::doctor::Doctor;
use super::room::Room;

/// A time-boxed slice of a single calendar day
///
/// Invariant: `start < end`. The reservation validator is the only producer
/// of intervals, and its minimum-duration rule guarantees the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Create a new interval
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Half-open overlap test; touching endpoints do not overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Interval length in whole minutes
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Interval length in whole hours, truncated
    pub fn whole_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

/// A room booked by a doctor for an interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub doctor: Doctor,
    pub room: Room,
    /// Date exactly as typed into the booking form (`DD/MM/YYYY`)
    pub date: String,
    pub interval: Interval,
    /// Price computed at booking time from the then-current price table
    pub total_price: f64,
}

impl Reservation {
    /// Whether the reservation has already started (a realized allocation)
    pub fn is_allocation(&self, now: NaiveDateTime) -> bool {
        self.interval.start < now
    }

    /// Whether the reservation is still upcoming (active, cancellable)
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.interval.start > now
    }
}
