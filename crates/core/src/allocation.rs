//! Allocation filtering
//!
//! Allocations are reservations whose start has already passed. The filter
//! takes the raw `DD/MM/YYYY` range inputs, validates them the same way the
//! booking form validates its date, and recomputes the result on every call.

use chrono::{NaiveDateTime, NaiveTime};
use praxis_domain::utils::datetime::parse_date;
use praxis_domain::utils::form::non_empty;
use praxis_domain::{Reservation, Result, ScheduleError};

/// Past reservations whose interval falls strictly inside the given range
///
/// Range bounds are dates interpreted at midnight. The range end must not be
/// in the future and must not precede the range start. Source order is
/// preserved; no caching, identical inputs always reproduce the result.
pub fn filter_allocations(
    reservations: &[Reservation],
    range_start: Option<&str>,
    range_end: Option<&str>,
    now: NaiveDateTime,
) -> Result<Vec<Reservation>> {
    let (Some(start), Some(end)) = (non_empty(range_start), non_empty(range_end)) else {
        return Err(ScheduleError::MissingFields);
    };

    let range_start = parse_date(start)?.and_time(NaiveTime::MIN);
    let range_end = parse_date(end)?.and_time(NaiveTime::MIN);

    if range_end > now {
        return Err(ScheduleError::FutureEndDate);
    }

    if range_end < range_start {
        return Err(ScheduleError::InvertedInterval);
    }

    Ok(reservations
        .iter()
        .filter(|reservation| {
            reservation.is_allocation(now)
                && reservation.interval.start > range_start
                && reservation.interval.end < range_end
        })
        .cloned()
        .collect())
}
