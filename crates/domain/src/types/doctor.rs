//! Doctor records and medical specialties

use std::fmt;

use serde::{Deserialize, Serialize};

/// Medical specialties the practice registers doctors under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    GeneralSurgeon,
    PlasticSurgeon,
    Dermatologist,
    Allergist,
}

impl Specialty {
    /// Every specialty, in the order the registration form lists them
    pub const ALL: [Specialty; 4] =
        [Self::GeneralSurgeon, Self::PlasticSurgeon, Self::Dermatologist, Self::Allergist];

    /// Label shown in the specialty dropdown
    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralSurgeon => "Cirurgião geral",
            Self::PlasticSurgeon => "Cirurgião plástico",
            Self::Dermatologist => "Dermatologista",
            Self::Allergist => "Alergista",
        }
    }

    /// Parse a form label back into a specialty
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|specialty| specialty.label() == label.trim())
    }

    /// Whether doctors with this specialty operate in surgery rooms
    pub fn is_surgical(self) -> bool {
        matches!(self, Self::GeneralSurgeon | Self::PlasticSurgeon)
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A doctor registered in the practice
///
/// Immutable once added; the CRM registration number is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub crm: String,
    pub specialty: Specialty,
}

impl Doctor {
    /// Create a new doctor record
    pub fn new(name: impl Into<String>, crm: impl Into<String>, specialty: Specialty) -> Self {
        Self { name: name.into(), crm: crm.into(), specialty }
    }
}
