use chrono::NaiveDate;

use crate::room::RoomCategory;

// One night of one room. Refers to the room by number only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub room_no: u32,
    pub date: NaiveDate,
}

impl Booking {
    pub fn new(room_no: u32, date: NaiveDate) -> Self {
        Self { room_no, date }
    }

    pub fn matches(&self, room_no: u32, date: NaiveDate) -> bool {
        self.room_no == room_no && self.date == date
    }
}

// Row returned when listing the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingEntry {
    pub room_no: u32,
    pub category: RoomCategory,
    pub date: NaiveDate,
}
