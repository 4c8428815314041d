//! Form-facing commands
//!
//! One module per screen of the original single-page UI.

pub mod allocations;
pub mod doctors;
pub mod prices;
pub mod reservations;
pub mod rooms;

pub use allocations::{filter_allocations, AllocationRow};
pub use doctors::{add_doctor, doctors};
pub use prices::{prices, update_prices};
pub use reservations::{
    add_reservation, available_rooms, cancel_reservation, default_room, upcoming_reservations,
    ReservationForm, ReservationRow,
};
pub use rooms::{add_room, rooms};
