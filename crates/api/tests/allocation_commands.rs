//! Integration tests for the allocation screen commands

mod support;

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use praxis_api::{add_reservation, filter_allocations, AppContext, ReservationForm};
use praxis_core::FixedClock;
use praxis_domain::ScheduleError;
use support::seeded_context;

/// Book a reservation dated before the fixture "now" by running the booking
/// command under an earlier clock, the way it was actually created
fn book_in_the_past(
    ctx: &mut AppContext,
    doctor: &str,
    room: &str,
    date: &str,
    enter: &str,
    exit: &str,
) -> Result<()> {
    let earlier = NaiveDate::from_ymd_opt(2021, 4, 1)
        .expect("valid date")
        .and_hms_opt(9, 0, 0)
        .expect("valid time");
    let booking_clock: Arc<FixedClock> = Arc::new(FixedClock::new(earlier));

    let original = Arc::clone(&ctx.clock);
    ctx.clock = booking_clock;
    let form = ReservationForm {
        doctor: Some(doctor),
        room: Some(room),
        date: Some(date),
        enter_time: Some(enter),
        exit_time: Some(exit),
    };
    add_reservation(ctx, &form)?;
    ctx.clock = original;

    Ok(())
}

#[test]
fn realized_reservations_are_listed_with_their_cost() -> Result<()> {
    let mut ctx = seeded_context();
    book_in_the_past(&mut ctx, "Ana", "Sala 1", "20/04/2021", "08:00", "10:00")?;

    // Still upcoming at the fixture "now": must not appear
    let form = ReservationForm {
        doctor: Some("Carlos"),
        room: Some("Sala 2"),
        date: Some("20/05/2021"),
        enter_time: Some("13:00"),
        exit_time: Some("15:00"),
    };
    add_reservation(&mut ctx, &form)?;

    let rows = filter_allocations(&ctx, Some("10/04/2021"), Some("01/05/2021"))?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].room, "Sala 1");
    assert_eq!(rows[0].doctor, "Ana");
    assert_eq!(rows[0].date, "20/04/2021");
    assert_eq!(rows[0].enter_time, "08:00");
    assert_eq!(rows[0].exit_time, "10:00");
    // 2 hours at the initial 400/h rate for a small room
    assert_eq!(rows[0].cost, 800.0);

    Ok(())
}

#[test]
fn filtering_twice_returns_identical_rows() -> Result<()> {
    let mut ctx = seeded_context();
    book_in_the_past(&mut ctx, "Ana", "Sala 1", "20/04/2021", "08:00", "10:00")?;

    let first = filter_allocations(&ctx, Some("01/04/2021"), Some("01/05/2021"))?;
    let second = filter_allocations(&ctx, Some("01/04/2021"), Some("01/05/2021"))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn range_validation_mirrors_the_booking_form() {
    let ctx = seeded_context();

    assert_eq!(
        filter_allocations(&ctx, None, Some("01/05/2021")),
        Err(ScheduleError::MissingFields)
    );
    assert_eq!(
        filter_allocations(&ctx, Some("31/02/2021"), Some("01/05/2021")),
        Err(ScheduleError::InvalidDate)
    );
    // The range end must already have passed
    assert_eq!(
        filter_allocations(&ctx, Some("01/04/2021"), Some("01/06/2021")),
        Err(ScheduleError::FutureEndDate)
    );
    assert_eq!(
        filter_allocations(&ctx, Some("01/05/2021"), Some("01/04/2021")),
        Err(ScheduleError::InvertedInterval)
    );
}
