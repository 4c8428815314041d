//! Error types used throughout the application
//!
//! Every user-correctable validation failure maps to one variant whose
//! `Display` output is the notification message shown by the UI shell.
//! Messages are the practice's Portuguese locale strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::RoomType;

/// Main error type for Praxis
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ScheduleError {
    /// A form was submitted with one or more empty fields
    #[error("Preencha todos os campos para continuar")]
    MissingFields,

    /// A date or time input did not parse to a valid calendar value
    #[error("Insira uma data válida.")]
    InvalidDate,

    /// Reservation entry time is not in the future
    #[error("Insira uma data futura.")]
    PastDate,

    /// Allocation range end is in the future
    #[error("Insira uma data passada.")]
    FutureEndDate,

    /// Exit time precedes entry time
    #[error("O horário de saída é anterior ao horário de entrada.")]
    InvertedInterval,

    /// Interval falls outside the 06:00–22:00 window
    #[error("Reservas devem ser feitas das 06:00 às 22:00")]
    OutsideBusinessHours,

    /// Reservation is shorter than the minimum for the room type
    #[error("{}", below_minimum_message(.room_type))]
    BelowMinimumDuration { room_type: RoomType },

    /// The room already has an overlapping reservation
    #[error("A sala {room} já está reservada neste horário")]
    RoomAlreadyBooked { room: String },

    /// A doctor with this CRM is already registered
    #[error("Já existe um médico com o CRM {crm}")]
    DuplicateCrm { crm: String },

    /// Price table has no entry for a room type in use.
    ///
    /// This is a configuration defect, not a user error: callers must keep
    /// the price table complete for every room type they book.
    #[error("no price configured for room type {room_type}")]
    UnknownRoomType { room_type: RoomType },
}

/// Result type alias for Praxis operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

// The minimum-duration rule carries two distinct messages keyed by room
// type; both phrasings are load-bearing locale strings.
fn below_minimum_message(room_type: &RoomType) -> &'static str {
    match room_type {
        RoomType::HighRisk => "O mínimo para salas de alto risco é de 3 horas",
        _ => "O mínimo para reserva é de 2 horas",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_duration_message_is_keyed_by_room_type() {
        let high_risk = ScheduleError::BelowMinimumDuration { room_type: RoomType::HighRisk };
        let small = ScheduleError::BelowMinimumDuration { room_type: RoomType::Small };

        assert_eq!(high_risk.to_string(), "O mínimo para salas de alto risco é de 3 horas");
        assert_eq!(small.to_string(), "O mínimo para reserva é de 2 horas");
    }

    #[test]
    fn booked_room_message_names_the_room() {
        let err = ScheduleError::RoomAlreadyBooked { room: "Sala 4".to_string() };
        assert_eq!(err.to_string(), "A sala Sala 4 já está reservada neste horário");
    }

    #[test]
    fn duplicate_crm_message_names_the_crm() {
        let err = ScheduleError::DuplicateCrm { crm: "12345".to_string() };
        assert_eq!(err.to_string(), "Já existe um médico com o CRM 12345");
    }
}
