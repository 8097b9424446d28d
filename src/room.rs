// Room catalog entries
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Nightly rates in minor currency units
pub const SINGLE_RATE: u64 = 30000;
pub const DOUBLE_RATE: u64 = 40000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Single,
    Double,
}

impl RoomCategory {
    pub fn rate(self) -> u64 {
        match self {
            RoomCategory::Single => SINGLE_RATE,
            RoomCategory::Double => DOUBLE_RATE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomCategory::Single => "single",
            RoomCategory::Double => "double",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown room category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for RoomCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(RoomCategory::Single),
            "double" => Ok(RoomCategory::Double),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

// A bookable room. The rate is fixed by the category at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    room_no: u32,
    category: RoomCategory,
    rate: u64,
}

impl Room {
    pub fn new(room_no: u32, category: RoomCategory) -> Self {
        Self {
            room_no,
            category,
            rate: category.rate(),
        }
    }

    pub fn single(room_no: u32) -> Self {
        Self::new(room_no, RoomCategory::Single)
    }

    pub fn double(room_no: u32) -> Self {
        Self::new(room_no, RoomCategory::Double)
    }

    pub fn room_no(&self) -> u32 {
        self.room_no
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn rate(&self) -> u64 {
        self.rate
    }
}
