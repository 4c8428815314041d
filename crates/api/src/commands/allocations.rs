//! Allocation screen commands

use std::time::Instant;

use praxis_core::allocation;
use praxis_domain::utils::datetime::format_time;
use praxis_domain::Result;
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// One row of the allocations table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationRow {
    pub room: String,
    pub doctor: String,
    pub date: String,
    pub enter_time: String,
    pub exit_time: String,
    /// Realized cost, fixed at booking time
    pub cost: f64,
}

/// Filter past allocations by a `DD/MM/YYYY` date range
pub fn filter_allocations(
    ctx: &AppContext,
    range_start: Option<&str>,
    range_end: Option<&str>,
) -> Result<Vec<AllocationRow>> {
    let start = Instant::now();
    let now = ctx.clock.now();

    let result =
        allocation::filter_allocations(ctx.store.reservations(), range_start, range_end, now);
    log_command_execution("allocations::filter_allocations", start.elapsed(), result.is_ok());

    Ok(result?
        .into_iter()
        .map(|reservation| AllocationRow {
            room: reservation.room.name,
            doctor: reservation.doctor.name,
            date: reservation.date,
            enter_time: format_time(reservation.interval.start),
            exit_time: format_time(reservation.interval.end),
            cost: reservation.total_price,
        })
        .collect())
}
