//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Business hours (reservations run from 06:00 to 22:00)
pub const OPENING_HOUR: u32 = 6;
pub const CLOSING_HOUR: u32 = 22;

// Minimum reservation length, in whole hours
pub const MIN_RESERVATION_HOURS: i64 = 2;
pub const MIN_HIGH_RISK_RESERVATION_HOURS: i64 = 3;

// High-risk rooms booked before this hour get a discount
pub const DISCOUNT_CUTOFF_HOUR: u32 = 10;
pub const EARLY_HIGH_RISK_DISCOUNT: f64 = 0.1;

// Unit prices are per hour; bookings are billed per minute
pub const MINUTES_PER_HOUR: f64 = 60.0;

// Form input formats
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%H:%M";

// Initial price table (currency units per booking hour)
pub const DEFAULT_SMALL_ROOM_PRICE: f64 = 400.0;
pub const DEFAULT_LARGE_ROOM_PRICE: f64 = 650.0;
pub const DEFAULT_HIGH_RISK_ROOM_PRICE: f64 = 1200.0;
