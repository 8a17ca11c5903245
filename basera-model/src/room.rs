//! Rooms and the occupancy bookkeeping attached to them.

use crate::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Room category by cooling and seat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "AC_2")]
    Ac2,
    #[serde(rename = "AC_3")]
    Ac3,
    #[serde(rename = "NON_AC_2")]
    NonAc2,
    #[serde(rename = "NON_AC_3")]
    NonAc3,
    #[serde(rename = "HALL")]
    Hall,
}

/// Availability of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

/// A hostel room.
///
/// Occupancy always satisfies `currentOccupancy <= capacity`, and a room
/// is OCCUPIED exactly when occupancy has reached capacity. Decoding
/// enforces the bound and renormalizes the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub features: Vec<String>,
    pub status: RoomStatus,
    pub current_occupancy: u32,
    pub capacity: u32,
}

impl Room {
    /// Moves occupancy by `delta`, saturating at zero and at capacity, then
    /// recomputes the status.
    pub fn shift_occupancy(&mut self, delta: i32) {
        let moved = i64::from(self.current_occupancy) + i64::from(delta);
        self.current_occupancy = moved.clamp(0, i64::from(self.capacity)) as u32;
        self.recompute_status();
    }

    /// Applies the occupancy rule: a room at capacity is OCCUPIED; below
    /// capacity a stale OCCUPIED clears back to AVAILABLE. MAINTENANCE is
    /// left alone while seats remain free.
    pub fn recompute_status(&mut self) {
        if self.current_occupancy >= self.capacity {
            self.status = RoomStatus::Occupied;
        } else if self.status == RoomStatus::Occupied {
            self.status = RoomStatus::Available;
        }
    }
}

impl Record for Room {
    const COLLECTION: Collection = Collection::Rooms;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> crate::Result<()> {
        if self.current_occupancy > self.capacity {
            return Err(crate::Error::InvalidRecord(format!(
                "room {} occupancy {} exceeds capacity {}",
                self.number, self.current_occupancy, self.capacity
            )));
        }
        Ok(())
    }

    fn decode(row: Value) -> crate::Result<Self> {
        let mut room: Self = serde_json::from_value(row)?;
        room.validate()?;
        room.recompute_status();
        Ok(room)
    }
}
