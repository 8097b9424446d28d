// Hotel setup: catalog and pre-loaded bookings
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::hotel::Hotel;
use crate::room::{Room, RoomCategory};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub room_no: u32,
    pub category: RoomCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSeed {
    pub room_no: u32,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelConfig {
    pub name: String,
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub bookings: Vec<BookingSeed>,
}

fn default_currency_suffix() -> String {
    "Ft".to_string()
}

impl Default for HotelConfig {
    fn default() -> Self {
        let room = |room_no, category| RoomSeed { room_no, category };
        let booking = |room_no, date: &str| BookingSeed {
            room_no,
            date: date.to_string(),
        };

        Self {
            name: "Star Hotel".to_string(),
            currency_suffix: default_currency_suffix(),
            rooms: vec![
                room(101, RoomCategory::Single),
                room(102, RoomCategory::Double),
                room(103, RoomCategory::Single),
            ],
            bookings: vec![
                booking(101, "2024-06-01"),
                booking(102, "2024-06-01"),
                booking(103, "2024-06-02"),
                booking(101, "2024-06-03"),
                booking(102, "2024-06-04"),
            ],
        }
    }
}

impl HotelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    // Builds the hotel and replays the seed bookings through `reserve_room`.
    // Seeds the ledger rejects are skipped.
    pub fn build_hotel(&self, clock: Box<dyn Clock>) -> Hotel {
        let mut hotel = Hotel::with_clock(self.name.clone(), clock);
        for seed in &self.rooms {
            hotel.add_room(Room::new(seed.room_no, seed.category));
        }

        let skipped = self.replay_bookings(&mut hotel);
        if skipped > 0 {
            warn!(skipped, total = self.bookings.len(), "some seed bookings were not loaded");
        }

        info!(
            hotel = %hotel.name(),
            rooms = hotel.rooms().len(),
            bookings = hotel.bookings().len(),
            "hotel initialised"
        );
        hotel
    }

    // Returns how many seeds were rejected; each one is logged at debug only
    fn replay_bookings(&self, hotel: &mut Hotel) -> usize {
        let mut skipped = 0;
        for seed in &self.bookings {
            if let Err(e) = hotel.reserve_room(seed.room_no, &seed.date) {
                debug!(
                    room_no = seed.room_no,
                    date = %seed.date,
                    error = %e,
                    "skipping seed booking"
                );
                skipped += 1;
            }
        }
        skipped
    }
}

pub const SAMPLE_CONFIG_PATH: &str = "samples/star_hotel.json";
