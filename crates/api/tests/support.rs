//! Shared fixtures for command integration tests

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use praxis_api::AppContext;
use praxis_core::FixedClock;

/// The instant every test clock is pinned to
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 5, 10)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

/// Context with a pinned clock and an empty store
pub fn empty_context() -> AppContext {
    AppContext::with_clock(Arc::new(FixedClock::new(test_now())))
}

/// Context seeded with the standard doctors and rooms fixtures
pub fn seeded_context() -> AppContext {
    let mut ctx = empty_context();

    praxis_api::add_doctor(&mut ctx, Some("Carlos"), Some("12345"), Some("Cirurgião geral"))
        .expect("fixture doctor should register");
    praxis_api::add_doctor(&mut ctx, Some("João"), Some("67890"), Some("Cirurgião plástico"))
        .expect("fixture doctor should register");
    praxis_api::add_doctor(&mut ctx, Some("Ana"), Some("54321"), Some("Dermatologista"))
        .expect("fixture doctor should register");

    praxis_api::add_room(&mut ctx, Some("Sala 1"), Some("Pequena"))
        .expect("fixture room should register");
    praxis_api::add_room(&mut ctx, Some("Sala 2"), Some("Grande"))
        .expect("fixture room should register");
    praxis_api::add_room(&mut ctx, Some("Sala 3"), Some("Alto risco"))
        .expect("fixture room should register");

    ctx
}
