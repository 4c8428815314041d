//! Booking screen commands

use std::time::Instant;

use praxis_core::{book, eligibility, pricing, ReservationRequest};
use praxis_domain::utils::datetime::format_time;
use praxis_domain::{PriceKind, Reservation, Result, Room};
use serde::Serialize;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Raw state of the booking form
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationForm<'a> {
    pub doctor: Option<&'a str>,
    pub room: Option<&'a str>,
    pub date: Option<&'a str>,
    pub enter_time: Option<&'a str>,
    pub exit_time: Option<&'a str>,
}

/// One row of the reservations table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationRow {
    pub room: String,
    pub doctor: String,
    pub date: String,
    pub enter_time: String,
    pub exit_time: String,
    /// Budget for the row; still-future reservations have no cost yet
    pub budget: PriceKind,
}

/// Rooms the currently selected doctor may book
pub fn available_rooms(ctx: &AppContext, doctor_name: Option<&str>) -> Vec<Room> {
    let doctor = doctor_name.and_then(|name| ctx.store.doctor_by_name(name));
    eligibility::eligible_rooms(doctor, ctx.store.rooms())
}

/// The room the form resets to after a doctor selection change
pub fn default_room(ctx: &AppContext, doctor_name: Option<&str>) -> Option<Room> {
    let doctor = doctor_name.and_then(|name| ctx.store.doctor_by_name(name));
    eligibility::default_selection(doctor, ctx.store.rooms())
}

/// Submit the booking form
///
/// Runs the full pipeline (validation, conflict detection, pricing) and
/// appends the reservation on success. A failed submission changes nothing;
/// the form keeps its input and the caller renders the returned error.
pub fn add_reservation(ctx: &mut AppContext, form: &ReservationForm<'_>) -> Result<Reservation> {
    let start = Instant::now();
    let now = ctx.clock.now();

    let request = ReservationRequest {
        doctor: form.doctor.and_then(|name| ctx.store.doctor_by_name(name)),
        room: form.room.and_then(|name| ctx.store.room_by_name(name)),
        date: form.date,
        enter_time: form.enter_time,
        exit_time: form.exit_time,
    };

    let result = book(&request, ctx.store.reservations(), ctx.store.prices(), now);
    log_command_execution("reservations::add_reservation", start.elapsed(), result.is_ok());

    let reservation = result?;
    ctx.store.add_reservation(reservation.clone());

    info!(
        room = %reservation.room.name,
        date = %reservation.date,
        total_price = reservation.total_price,
        "reservation booked"
    );
    Ok(reservation)
}

/// Upcoming reservations as table rows, in booking order
///
/// Budgets are recomputed against the current price table on every call,
/// not cached.
pub fn upcoming_reservations(ctx: &AppContext) -> Result<Vec<ReservationRow>> {
    let now = ctx.clock.now();

    ctx.store
        .reservations()
        .iter()
        .filter(|reservation| reservation.is_upcoming(now))
        .map(|reservation| {
            let budget =
                pricing::budget(&reservation.room, &reservation.interval, ctx.store.prices(), now)?;
            Ok(ReservationRow {
                room: reservation.room.name.clone(),
                doctor: reservation.doctor.name.clone(),
                date: reservation.date.clone(),
                enter_time: format_time(reservation.interval.start),
                exit_time: format_time(reservation.interval.end),
                budget,
            })
        })
        .collect()
}

/// Cancel the `index`-th row of the upcoming reservations table
pub fn cancel_reservation(ctx: &mut AppContext, index: usize) -> bool {
    let now = ctx.clock.now();
    let cancelled = ctx.store.cancel_reservation(index, now);

    if cancelled {
        info!(index, "reservation cancelled");
    }
    cancelled
}
