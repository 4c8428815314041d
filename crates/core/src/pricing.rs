//! The pricing engine
//!
//! Unit prices are configured per hour; bookings bill per minute. High-risk
//! rooms starting before 10:00 get a 10% discount. Results are never
//! rounded; display formatting belongs to the UI shell.

use chrono::{NaiveDateTime, Timelike};
use praxis_domain::constants::{DISCOUNT_CUTOFF_HOUR, EARLY_HIGH_RISK_DISCOUNT, MINUTES_PER_HOUR};
use praxis_domain::{Interval, PriceKind, PriceTable, Result, Room, RoomType, ScheduleError};

/// Price of occupying a room of `room_type` for `interval`
///
/// Fails with [`ScheduleError::UnknownRoomType`] when the price table has no
/// entry for the type — a configuration defect the caller must fix in setup.
pub fn price(room_type: RoomType, interval: &Interval, prices: &PriceTable) -> Result<f64> {
    let unit_price = prices
        .unit_price(room_type)
        .ok_or(ScheduleError::UnknownRoomType { room_type })?;

    let discount = if room_type == RoomType::HighRisk
        && interval.start.hour() < DISCOUNT_CUTOFF_HOUR
    {
        EARLY_HIGH_RISK_DISCOUNT
    } else {
        0.0
    };

    let price_per_minute = unit_price / MINUTES_PER_HOUR;
    Ok(price_per_minute * interval.minutes() as f64 * (1.0 - discount))
}

/// Budget shown for a reservation row
///
/// Cost accrues only once the reservation is realized: a start still in the
/// future at call time yields [`PriceKind::NotYetApplicable`].
pub fn budget(
    room: &Room,
    interval: &Interval,
    prices: &PriceTable,
    now: NaiveDateTime,
) -> Result<PriceKind> {
    if interval.start > now {
        return Ok(PriceKind::NotYetApplicable);
    }

    price(room.room_type, interval, prices).map(PriceKind::Computed)
}
