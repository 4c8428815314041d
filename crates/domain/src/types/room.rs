//! Rooms and room types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room categories offered by the practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Small,
    Large,
    HighRisk,
}

impl RoomType {
    /// Every room type, in the order the room form lists them
    pub const ALL: [RoomType; 3] = [Self::Small, Self::Large, Self::HighRisk];

    /// Label shown in the room type dropdown
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Pequena",
            Self::Large => "Grande",
            Self::HighRisk => "Alto risco",
        }
    }

    /// Parse a form label back into a room type
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|room_type| room_type.label() == label.trim())
    }

    /// Whether surgeons may book rooms of this type
    pub fn supports_surgery(self) -> bool {
        matches!(self, Self::Large | Self::HighRisk)
    }

    /// Whether dermatology procedures may be booked in rooms of this type
    pub fn supports_dermatology(self) -> bool {
        matches!(self, Self::Small | Self::Large)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A bookable room
///
/// Immutable once added; the name is unique within the practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub room_type: RoomType,
}

impl Room {
    /// Create a new room record
    pub fn new(name: impl Into<String>, room_type: RoomType) -> Self {
        Self { name: name.into(), room_type }
    }
}
