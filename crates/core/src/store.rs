//! The in-memory entity store
//!
//! Exclusively owns every collection for the lifetime of the session.
//! Append-only from the UI's perspective: records are never edited in
//! place, only added, with reservation cancellation and wholesale price
//! replacement as the two removals.

use chrono::NaiveDateTime;
use praxis_domain::{Doctor, PriceTable, Reservation, Result, Room, ScheduleError};
use tracing::debug;

/// Owner of all doctors, rooms, reservations, and prices
#[derive(Debug, Default)]
pub struct ClinicStore {
    doctors: Vec<Doctor>,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    prices: PriceTable,
}

impl ClinicStore {
    /// Create an empty store with the initial price table
    pub fn new() -> Self {
        Self::default()
    }

    /// Doctors in registration order
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Rooms in registration order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Every reservation, past and upcoming, in booking order
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// The current price table
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Resolve a dropdown selection back to a doctor record
    pub fn doctor_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.name == name)
    }

    /// Resolve a dropdown selection back to a room record
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// Register a doctor, enforcing CRM uniqueness
    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<()> {
        if self.doctors.iter().any(|existing| existing.crm == doctor.crm) {
            return Err(ScheduleError::DuplicateCrm { crm: doctor.crm });
        }

        self.doctors.push(doctor);
        Ok(())
    }

    /// Register a room
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Append a reservation produced by the booking pipeline
    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Cancel the `index`-th upcoming reservation
    ///
    /// The index counts only the active (future) list the UI shows; past
    /// allocations are not cancellable. Returns whether a reservation was
    /// removed.
    pub fn cancel_reservation(&mut self, index: usize, now: NaiveDateTime) -> bool {
        let position = self
            .reservations
            .iter()
            .enumerate()
            .filter(|(_, reservation)| reservation.is_upcoming(now))
            .map(|(position, _)| position)
            .nth(index);

        match position {
            Some(position) => {
                let removed = self.reservations.remove(position);
                debug!(room = %removed.room.name, date = %removed.date, "reservation cancelled");
                true
            }
            None => false,
        }
    }

    /// Replace the price table wholesale
    pub fn set_prices(&mut self, prices: PriceTable) {
        self.prices = prices;
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use praxis_domain::{Interval, RoomPrice, RoomType, Specialty};

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 5, 10)
            .expect("valid date")
            .and_hms_opt(12, 0, 0)
            .expect("valid time")
    }

    fn reservation(month: u32, day: u32) -> Reservation {
        let date = NaiveDate::from_ymd_opt(2021, month, day).expect("valid date");
        Reservation {
            doctor: Doctor::new("Ana", "54321", Specialty::Dermatologist),
            room: Room::new("Sala 1", RoomType::Small),
            date: format!("{day:02}/{month:02}/2021"),
            interval: Interval::new(
                date.and_hms_opt(8, 0, 0).expect("valid time"),
                date.and_hms_opt(10, 0, 0).expect("valid time"),
            ),
            total_price: 800.0,
        }
    }

    #[test]
    fn duplicate_crm_is_rejected() {
        let mut store = ClinicStore::new();
        store
            .add_doctor(Doctor::new("Carlos", "12345", Specialty::GeneralSurgeon))
            .expect("first registration should succeed");

        let result = store.add_doctor(Doctor::new("Outro", "12345", Specialty::Allergist));
        assert_eq!(result, Err(ScheduleError::DuplicateCrm { crm: "12345".to_string() }));
        assert_eq!(store.doctors().len(), 1);
    }

    #[test]
    fn cancellation_indexes_the_upcoming_list_only() {
        let mut store = ClinicStore::new();
        store.add_reservation(reservation(4, 20)); // past allocation
        store.add_reservation(reservation(5, 20)); // upcoming, index 0
        store.add_reservation(reservation(5, 25)); // upcoming, index 1

        assert!(store.cancel_reservation(1, now()));

        let dates: Vec<&str> =
            store.reservations().iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["20/04/2021", "20/05/2021"]);
    }

    #[test]
    fn out_of_range_cancellation_is_a_no_op() {
        let mut store = ClinicStore::new();
        store.add_reservation(reservation(4, 20)); // past: not cancellable

        assert!(!store.cancel_reservation(0, now()));
        assert_eq!(store.reservations().len(), 1);
    }

    #[test]
    fn price_replacement_is_wholesale() {
        let mut store = ClinicStore::new();
        assert!(store.prices().unit_price(RoomType::Small).is_some());

        store.set_prices(PriceTable::new(vec![RoomPrice {
            room_type: RoomType::HighRisk,
            price: 2000.0,
        }]));

        assert_eq!(store.prices().unit_price(RoomType::HighRisk), Some(2000.0));
        assert_eq!(store.prices().unit_price(RoomType::Small), None);
    }

    #[test]
    fn selection_lookups_match_by_name() {
        let mut store = ClinicStore::new();
        store.add_room(Room::new("Sala 1", RoomType::Small));

        assert!(store.room_by_name("Sala 1").is_some());
        assert!(store.room_by_name("Sala 2").is_none());
        assert!(store.doctor_by_name("Carlos").is_none());
    }
}
