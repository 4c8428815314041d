//! Room pricing tables and budget values

use serde::{Deserialize, Serialize};

use super::room::RoomType;
use crate::constants::{
    DEFAULT_HIGH_RISK_ROOM_PRICE, DEFAULT_LARGE_ROOM_PRICE, DEFAULT_SMALL_ROOM_PRICE,
};

/// Hourly price for one room type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomPrice {
    pub room_type: RoomType,
    pub price: f64,
}

/// The practice's price list, replaceable wholesale by administration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    entries: Vec<RoomPrice>,
}

impl PriceTable {
    /// Create a price table from a replacement price list
    pub fn new(entries: Vec<RoomPrice>) -> Self {
        Self { entries }
    }

    /// Hourly unit price for a room type, if configured
    pub fn unit_price(&self, room_type: RoomType) -> Option<f64> {
        self.entries.iter().find(|entry| entry.room_type == room_type).map(|entry| entry.price)
    }

    /// The configured entries, in listing order
    pub fn entries(&self) -> &[RoomPrice] {
        &self.entries
    }
}

impl Default for PriceTable {
    /// The initial price list the practice opens with
    fn default() -> Self {
        Self::new(vec![
            RoomPrice { room_type: RoomType::Small, price: DEFAULT_SMALL_ROOM_PRICE },
            RoomPrice { room_type: RoomType::Large, price: DEFAULT_LARGE_ROOM_PRICE },
            RoomPrice { room_type: RoomType::HighRisk, price: DEFAULT_HIGH_RISK_ROOM_PRICE },
        ])
    }
}

/// Budget of a reservation row
///
/// Cost only accrues once a reservation becomes a realized allocation, so
/// budget queries against a still-future reservation yield no price yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum PriceKind {
    Computed(f64),
    NotYetApplicable,
}

impl PriceKind {
    /// The computed value, if any
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Computed(value) => Some(value),
            Self::NotYetApplicable => None,
        }
    }
}
