//! Common data types used throughout the application

pub mod doctor;
pub mod price;
pub mod reservation;
pub mod room;

pub use doctor::{Doctor, Specialty};
pub use price::{PriceKind, PriceTable, RoomPrice};
pub use reservation::{Interval, Reservation};
pub use room::{Room, RoomType};
