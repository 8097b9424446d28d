// In-memory hotel room booking manager

pub mod booking;
pub mod clock;
pub mod config;
pub mod error;
pub mod hotel;
pub mod room;
pub mod shell;

// Re-export key types for convenience
pub use booking::{Booking, BookingEntry};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BookingSeed, ConfigError, HotelConfig, RoomSeed};
pub use error::HotelError;
pub use hotel::{parse_date, Hotel};
pub use room::{Room, RoomCategory};
pub use shell::Shell;
