// Interactive text menu over a Hotel
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::hotel::Hotel;

const MENU: &str = "\nSelect the desired operation:
1 - Book a room
2 - Cancel a booking
3 - List bookings
4 - Available rooms for a specific date
5 - Exit";

pub struct Shell<R, W> {
    hotel: Hotel,
    currency_suffix: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(hotel: Hotel, currency_suffix: impl Into<String>, input: R, output: W) -> Self {
        Self {
            hotel,
            currency_suffix: currency_suffix.into(),
            input,
            output,
        }
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn into_parts(self) -> (Hotel, W) {
        (self.hotel, self.output)
    }

    // Runs until the exit option is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n *** Welcome to {}! Please use button 4 to view our available rooms. ***",
            self.hotel.name()
        )?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(option) = self.prompt("Please choose an option (1-5): ")? else {
                break;
            };

            match option.as_str() {
                "1" => self.reserve()?,
                "2" => self.cancel()?,
                "3" => self.list()?,
                "4" => self.available()?,
                "5" => {
                    writeln!(self.output, "Exiting the program.")?;
                    break;
                }
                other => {
                    debug!(option = other, "unknown menu option");
                    writeln!(self.output, "Invalid option. Please try again.")?;
                }
            }
        }

        self.output.flush()
    }

    fn reserve(&mut self) -> io::Result<()> {
        let Some(room_no) = self.prompt_room_no()? else {
            return Ok(());
        };
        let Some(date) =
            self.prompt("Enter the booking date (in yyyy-mm-dd format, e.g., 2024-06-01): ")?
        else {
            return Ok(());
        };

        match self.hotel.reserve_room(room_no, &date) {
            Ok(cost) => writeln!(
                self.output,
                "The booking cost is: {} {}",
                cost, self.currency_suffix
            ),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn cancel(&mut self) -> io::Result<()> {
        let Some(room_no) = self.prompt_room_no()? else {
            return Ok(());
        };
        let Some(date) = self.prompt("Enter the booking date (in yyyy-mm-dd format): ")? else {
            return Ok(());
        };

        match self.hotel.cancel_reservation(room_no, &date) {
            Ok(()) => writeln!(self.output, "Booking successfully canceled."),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        match self.hotel.list_bookings() {
            Ok(entries) => {
                for entry in entries {
                    writeln!(
                        self.output,
                        "Room number: {}, Type: {}, Date: {}",
                        entry.room_no, entry.category, entry.date
                    )?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn available(&mut self) -> io::Result<()> {
        let Some(date) = self.prompt(
            "Enter the date to check available rooms (in yyyy-mm-dd format, e.g., 2024-06-01): ",
        )?
        else {
            return Ok(());
        };

        match self.hotel.check_available_rooms(&date) {
            Ok(rooms) => {
                writeln!(self.output, "Available rooms for the date: {}", date)?;
                for room in rooms {
                    writeln!(
                        self.output,
                        "Room number: {}, Type: {}, Price: {} {}",
                        room.room_no(),
                        room.category(),
                        room.rate(),
                        self.currency_suffix
                    )?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    // None means the input is exhausted or the number did not parse
    fn prompt_room_no(&mut self) -> io::Result<Option<u32>> {
        let Some(raw) = self.prompt("Enter the room number: ")? else {
            return Ok(None);
        };
        match raw.parse::<u32>() {
            Ok(room_no) => Ok(Some(room_no)),
            Err(_) => {
                writeln!(
                    self.output,
                    "The room number was entered incorrectly, please try again."
                )?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::hotel::parse_date;
    use crate::room::Room;
    use std::io::Cursor;

    fn run_session(script: &str) -> (Hotel, String) {
        let mut hotel = Hotel::with_clock(
            "Wild East Hotel",
            Box::new(FixedClock(parse_date("2030-01-15").unwrap())),
        );
        hotel.add_room(Room::single(101));
        hotel.add_room(Room::double(102));

        let mut shell = Shell::new(hotel, "Ft", Cursor::new(script.to_string()), Vec::new());
        shell.run().unwrap();
        let (hotel, output) = shell.into_parts();
        (hotel, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_banner_and_exit() {
        let (_, output) = run_session("5\n");
        assert!(output.contains("Welcome to Wild East Hotel!"));
        assert!(output.contains("Exiting the program."));
    }

    #[test]
    fn test_reserve_then_list() {
        let (hotel, output) = run_session("1\n101\n2030-02-01\n3\n5\n");
        assert!(output.contains("The booking cost is: 30000 Ft"));
        assert!(output.contains("Room number: 101, Type: single, Date: 2030-02-01"));
        assert_eq!(hotel.bookings().len(), 1);
    }

    #[test]
    fn test_double_booking_message() {
        let (_, output) = run_session("1\n102\n2030-02-01\n1\n102\n2030-02-01\n5\n");
        assert!(output.contains("The booking cost is: 40000 Ft"));
        assert!(output.contains("Room 102 is already booked on 2030-02-01."));
    }

    #[test]
    fn test_cancel_flow() {
        let (hotel, output) =
            run_session("1\n101\n2030-02-01\n2\n101\n2030-02-01\n2\n101\n2030-02-01\n5\n");
        assert!(output.contains("Booking successfully canceled."));
        assert!(output.contains("No such booking exists for room 101 on 2030-02-01."));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_availability_listing() {
        let (_, output) = run_session("1\n101\n2030-02-01\n4\n2030-02-01\n5\n");
        assert!(output.contains("Available rooms for the date: 2030-02-01"));
        assert!(output.contains("Room number: 102, Type: double, Price: 40000 Ft"));
        assert!(!output.contains("Room number: 101, Type: single, Price"));
    }

    #[test]
    fn test_informational_and_error_messages() {
        let (_, output) = run_session("3\n4\n2020-01-01\n4\nnope\n1\n101\n2020-01-01\n5\n");
        assert!(output.contains("No bookings."));
        assert!(output.contains("The provided date is in the past."));
        assert!(output.contains("Invalid date format."));
        assert!(output.contains("Invalid date. Please provide a future date"));
    }

    #[test]
    fn test_malformed_input_reprompts() {
        let (hotel, output) = run_session("9\n1\nabc\n5\n");
        assert!(output.contains("Invalid option. Please try again."));
        assert!(output.contains("The room number was entered incorrectly"));
        assert!(output.contains("Exiting the program."));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (_, output) = run_session("1\n101\n");
        assert!(!output.contains("Exiting the program."));
        assert!(output.contains("Enter the booking date"));
    }
}
