//! The booking pipeline: parse, validate, detect conflicts, price
//!
//! Validation is first-failure-wins, in the fixed order the form enforces:
//! missing fields, unparseable dates, past entry, inverted interval,
//! business hours, minimum duration. Conflict detection and pricing only run
//! once the interval is known valid.

use chrono::{NaiveDateTime, Timelike};
use praxis_domain::constants::{
    CLOSING_HOUR, MIN_HIGH_RISK_RESERVATION_HOURS, MIN_RESERVATION_HOURS, OPENING_HOUR,
};
use praxis_domain::utils::datetime::{combine, parse_date, parse_time};
use praxis_domain::utils::form::non_empty;
use praxis_domain::{
    Doctor, Interval, PriceTable, Reservation, Result, Room, RoomType, ScheduleError,
};

use super::conflict::has_conflict;
use crate::pricing;

/// Raw state of the booking form at submission time
///
/// Doctor and room are the current dropdown selections (already resolved to
/// records, or `None` when nothing is selectable); the date and time fields
/// arrive exactly as typed.
#[derive(Debug, Clone, Copy)]
pub struct ReservationRequest<'a> {
    pub doctor: Option<&'a Doctor>,
    pub room: Option<&'a Room>,
    pub date: Option<&'a str>,
    pub enter_time: Option<&'a str>,
    pub exit_time: Option<&'a str>,
}

/// Validate a booking request into its interval
///
/// Pure apart from the explicit `now`; rendering the error is the caller's
/// concern.
pub fn validate_reservation(
    request: &ReservationRequest<'_>,
    now: NaiveDateTime,
) -> Result<Interval> {
    let (Some(_doctor), Some(room), Some(date), Some(enter_time), Some(exit_time)) = (
        request.doctor,
        request.room,
        non_empty(request.date),
        non_empty(request.enter_time),
        non_empty(request.exit_time),
    ) else {
        return Err(ScheduleError::MissingFields);
    };

    let date = parse_date(date)?;
    let enter = combine(date, parse_time(enter_time)?);
    let exit = combine(date, parse_time(exit_time)?);

    if enter <= now {
        return Err(ScheduleError::PastDate);
    }

    if exit < enter {
        return Err(ScheduleError::InvertedInterval);
    }

    // Exit exactly at closing time is allowed; a single minute past is not.
    let past_closing =
        exit.hour() > CLOSING_HOUR || (exit.hour() == CLOSING_HOUR && exit.minute() > 0);
    if enter.hour() < OPENING_HOUR || past_closing {
        return Err(ScheduleError::OutsideBusinessHours);
    }

    let minimum = if room.room_type == RoomType::HighRisk {
        MIN_HIGH_RISK_RESERVATION_HOURS
    } else {
        MIN_RESERVATION_HOURS
    };
    if (exit - enter).num_hours() < minimum {
        return Err(ScheduleError::BelowMinimumDuration { room_type: room.room_type });
    }

    Ok(Interval::new(enter, exit))
}

/// Run the full booking pipeline and produce the reservation to append
pub fn book(
    request: &ReservationRequest<'_>,
    reservations: &[Reservation],
    prices: &PriceTable,
    now: NaiveDateTime,
) -> Result<Reservation> {
    let interval = validate_reservation(request, now)?;

    // Presence was established by the validator
    let (Some(doctor), Some(room), Some(date)) = (request.doctor, request.room, request.date)
    else {
        return Err(ScheduleError::MissingFields);
    };

    if has_conflict(room, &interval, reservations) {
        return Err(ScheduleError::RoomAlreadyBooked { room: room.name.clone() });
    }

    let total_price = pricing::price(room.room_type, &interval, prices)?;

    Ok(Reservation {
        doctor: doctor.clone(),
        room: room.clone(),
        date: date.trim().to_string(),
        interval,
        total_price,
    })
}
