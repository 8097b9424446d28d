// Room catalog and booking ledger
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::booking::{Booking, BookingEntry};
use crate::clock::Clock;
use crate::error::HotelError;
use crate::room::Room;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Year must start with a digit; chrono's %Y would also take a sign
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if !date.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

pub struct Hotel {
    name: String,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    clock: Box<dyn Clock>,
}

impl Hotel {
    pub fn with_clock(name: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            bookings: Vec::new(),
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    // Room numbers are expected to be distinct; duplicates are not rejected
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    // Books `room_no` for the night of `date` and returns the cost.
    // The date is checked before the room lookup, so a bad date yields
    // InvalidDate even for an unknown room.
    pub fn reserve_room(&mut self, room_no: u32, date: &str) -> Result<u64, HotelError> {
        let date = match parse_date(date) {
            Some(parsed) if self.is_future(parsed) => parsed,
            _ => {
                debug!(room_no, date, "rejected reservation date");
                return Err(HotelError::InvalidDate);
            }
        };

        let room = self
            .rooms
            .iter()
            .find(|room| room.room_no() == room_no)
            .ok_or(HotelError::RoomNotFound(room_no))?;

        if self.bookings.iter().any(|b| b.matches(room_no, date)) {
            debug!(room_no, %date, "room already booked");
            return Err(HotelError::AlreadyBooked { room_no, date });
        }

        let cost = room.rate();
        self.bookings.push(Booking::new(room_no, date));
        info!(room_no, %date, cost, "room reserved");
        Ok(cost)
    }

    pub fn cancel_reservation(&mut self, room_no: u32, date: &str) -> Result<(), HotelError> {
        let position = parse_date(date)
            .and_then(|parsed| self.bookings.iter().position(|b| b.matches(room_no, parsed)));

        match position {
            Some(index) => {
                let removed = self.bookings.remove(index);
                info!(room_no, date = %removed.date, "reservation canceled");
                Ok(())
            }
            None => Err(HotelError::BookingNotFound {
                room_no,
                date: date.trim().to_string(),
            }),
        }
    }

    pub fn list_bookings(&self) -> Result<Vec<BookingEntry>, HotelError> {
        if self.bookings.is_empty() {
            return Err(HotelError::NoBookings);
        }

        Ok(self
            .bookings
            .iter()
            .filter_map(|booking| {
                self.find_room(booking.room_no).map(|room| BookingEntry {
                    room_no: booking.room_no,
                    category: room.category(),
                    date: booking.date,
                })
            })
            .collect())
    }

    pub fn check_available_rooms(&self, date: &str) -> Result<Vec<Room>, HotelError> {
        let date = parse_date(date).ok_or(HotelError::InvalidDateFormat)?;
        if !self.is_future(date) {
            return Err(HotelError::PastDate);
        }

        let available: Vec<Room> = self
            .rooms
            .iter()
            .filter(|room| !self.bookings.iter().any(|b| b.matches(room.room_no(), date)))
            .cloned()
            .collect();
        debug!(%date, available = available.len(), "availability checked");

        if available.is_empty() {
            return Err(HotelError::NoRoomsAvailable);
        }
        Ok(available)
    }

    fn find_room(&self, room_no: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_no() == room_no)
    }

    fn is_future(&self, date: NaiveDate) -> bool {
        date > self.clock.today()
    }
}
