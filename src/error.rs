use chrono::NaiveDate;
use thiserror::Error;

// Outcomes of ledger operations that are not a plain success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    #[error("Invalid date. Please provide a future date in yyyy-mm-dd format.")]
    InvalidDate,

    #[error("Invalid date format. Please use the following format: yyyy-mm-dd.")]
    InvalidDateFormat,

    #[error("The provided date is in the past. Please provide a future date.")]
    PastDate,

    #[error("No such room number: {0}")]
    RoomNotFound(u32),

    #[error("Room {room_no} is already booked on {date}.")]
    AlreadyBooked { room_no: u32, date: NaiveDate },

    #[error("No such booking exists for room {room_no} on {date}.")]
    BookingNotFound { room_no: u32, date: String },

    // Informational, not failures
    #[error("No bookings.")]
    NoBookings,

    #[error("No available rooms on this date.")]
    NoRoomsAvailable,
}

impl HotelError {
    pub fn is_informational(&self) -> bool {
        matches!(self, HotelError::NoBookings | HotelError::NoRoomsAvailable)
    }
}
