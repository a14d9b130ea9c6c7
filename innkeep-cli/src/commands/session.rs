//! Interactive session command.
//!
//! This module implements the `session` command, the menu-driven console
//! the operator uses to register rooms and clients, book and cancel rooms,
//! and look up nightly costs. A session owns one [`Hotel`] for the
//! lifetime of the run.

use crate::console::Console;
use crate::error::CliError;
use crate::render;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use innkeep::config::{Config, OutputFormat};
use innkeep::{Booking, ClientId, CostLookup, Error, Hotel, Room, RoomId};
use std::io::{self, BufRead, Write};

const DEFAULT_TITLE: &str = "Hotel information system";

/// Run the interactive hotel menu.
#[derive(Args, Debug, Default)]
pub struct SessionCommand {}

impl SessionCommand {
    /// Execute the session command on standard input and output.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let hotel = Hotel::from_config(&config)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let console = Console::new(stdin.lock(), stdout.lock());

        Session::new(hotel, &config, console).run()
    }
}

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Leave the session.
    Exit,
    /// Add a room with a label and nightly cost.
    AddRoom,
    /// List every room.
    ListRooms,
    /// Register a client, then offer a free room.
    RegisterAndBook,
    /// List free rooms.
    ListAvailableRooms,
    /// Show the nightly cost a client pays, by surname.
    CostBySurname,
    /// List every client.
    ListClients,
    /// Book a room for an already registered client.
    BookRoom,
    /// Cancel a client's booking.
    CancelBooking,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [Self; 9] = [
        Self::AddRoom,
        Self::ListRooms,
        Self::RegisterAndBook,
        Self::ListAvailableRooms,
        Self::CostBySurname,
        Self::ListClients,
        Self::BookRoom,
        Self::CancelBooking,
        Self::Exit,
    ];

    /// Highest menu number.
    pub const MAX_CHOICE: u32 = 8;

    /// The number the operator types for this entry.
    pub const fn choice(self) -> u32 {
        match self {
            Self::Exit => 0,
            Self::AddRoom => 1,
            Self::ListRooms => 2,
            Self::RegisterAndBook => 3,
            Self::ListAvailableRooms => 4,
            Self::CostBySurname => 5,
            Self::ListClients => 6,
            Self::BookRoom => 7,
            Self::CancelBooking => 8,
        }
    }

    /// Maps a typed number back to its entry.
    pub fn from_choice(choice: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.choice() == choice)
    }

    /// Whether this entry can change rooms, clients or bookings.
    pub const fn mutates(self) -> bool {
        matches!(
            self,
            Self::AddRoom | Self::RegisterAndBook | Self::BookRoom | Self::CancelBooking
        )
    }

    /// Menu text for this entry.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::AddRoom => "Add a room (number and nightly cost)",
            Self::ListRooms => "List all rooms",
            Self::RegisterAndBook => "Register a client and book a room",
            Self::ListAvailableRooms => "List available rooms",
            Self::CostBySurname => "Show nightly cost by client surname",
            Self::ListClients => "List all clients",
            Self::BookRoom => "Book a room for a registered client",
            Self::CancelBooking => "Cancel a client's booking",
        }
    }
}

/// What the menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
    EndOfInput,
}

/// One run of the menu over one hotel.
///
/// # Examples
///
/// ```
/// use innkeep::config::Config;
/// use innkeep::Hotel;
/// use innkeep_cli::commands::session::Session;
/// use innkeep_cli::console::Console;
/// use std::io::Cursor;
///
/// let input = Cursor::new("1\n101\n50\n0\n");
/// let console = Console::new(input, Vec::new());
/// let mut session = Session::new(Hotel::new(), &Config::default(), console);
/// session.run().unwrap();
///
/// assert_eq!(session.hotel().rooms().len(), 1);
/// ```
pub struct Session<R, W> {
    hotel: Hotel,
    console: Console<R, W>,
    title: String,
    format: OutputFormat,
    max_cost_per_night: f64,
    max_room_id: u32,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over `hotel`, taking limits and the listing format
    /// from `config`.
    pub fn new(hotel: Hotel, config: &Config, console: Console<R, W>) -> Self {
        Self {
            hotel,
            console,
            title: config
                .hotel_name
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            format: config.output_format(),
            max_cost_per_night: config.max_cost_per_night(),
            max_room_id: config.max_room_id(),
        }
    }

    /// The hotel this session manages.
    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    /// Consumes the session and returns the console's writer.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// Booking rejections are reported and the menu continues; any other
    /// library error ends the session with that error. The hotel is checked
    /// for consistency after every action that can change it.
    pub fn run(&mut self) -> Result<(), CliError> {
        log::debug!("session started with {} room(s)", self.hotel.rooms().len());

        loop {
            self.print_menu()?;
            let Some(choice) =
                self.console
                    .read_int_in_range("Choose an action: ", 0, MenuAction::MAX_CHOICE)?
            else {
                self.console.say("End of input.")?;
                break;
            };
            let Some(action) = MenuAction::from_choice(choice) else {
                self.console.say("Invalid choice.")?;
                continue;
            };

            let step = self.perform(action)?;
            if action.mutates() {
                checked_invariants(action, self.hotel.check_invariants())?;
            }

            match step {
                Step::Continue => {}
                Step::Exit => {
                    self.console.say("Exiting.")?;
                    break;
                }
                Step::EndOfInput => {
                    self.console.say("End of input.")?;
                    break;
                }
            }
        }

        self.console.say("Session finished.")?;
        log::debug!(
            "session finished with {} room(s), {} client(s)",
            self.hotel.rooms().len(),
            self.hotel.clients().len()
        );
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        let banner = format!("=== {} ===", self.title);
        self.console.say("")?;
        self.console.say(&banner)?;
        for action in MenuAction::ALL {
            self.console
                .say(format_args!("{}. {}", action.choice(), action.label()))?;
        }
        self.console.say("=".repeat(banner.chars().count()))?;
        Ok(())
    }

    fn perform(&mut self, action: MenuAction) -> Result<Step, CliError> {
        match action {
            MenuAction::Exit => Ok(Step::Exit),
            MenuAction::AddRoom => self.add_room(),
            MenuAction::ListRooms => self.list_rooms(),
            MenuAction::RegisterAndBook => self.register_and_book(),
            MenuAction::ListAvailableRooms => self.list_available_rooms(),
            MenuAction::CostBySurname => self.cost_by_surname(),
            MenuAction::ListClients => self.list_clients(),
            MenuAction::BookRoom => self.book_for_registered_client(),
            MenuAction::CancelBooking => self.cancel_booking(),
        }
    }

    fn add_room(&mut self) -> Result<Step, CliError> {
        let Some(number) = self.console.read_non_empty("Room number: ")? else {
            return Ok(Step::EndOfInput);
        };
        let Some(cost) = self
            .console
            .read_cost("Cost per night: ", self.max_cost_per_night)?
        else {
            return Ok(Step::EndOfInput);
        };

        let label = innkeep::RoomLabel::new(number).map_err(Error::from)?;
        let id = self.hotel.add_room(label, cost);
        self.console.say(format_args!("Room added. ID = {id}"))?;
        Ok(Step::Continue)
    }

    fn list_rooms(&mut self) -> Result<Step, CliError> {
        let rooms: Vec<&Room> = self.hotel.rooms().iter().collect();
        if rooms.is_empty() && self.format == OutputFormat::Table {
            self.console.say("No rooms registered.")?;
            return Ok(Step::Continue);
        }
        if self.format == OutputFormat::Table {
            self.console.say("Rooms:")?;
        }
        render::write_rooms(self.console.output(), &rooms, self.format)?;
        Ok(Step::Continue)
    }

    /// Writes the free rooms, or `empty_message` if there are none.
    /// Returns whether any room is free.
    fn show_available_rooms(&mut self, empty_message: &str) -> Result<bool, CliError> {
        let rooms: Vec<&Room> = self.hotel.available_rooms().collect();
        if rooms.is_empty() {
            self.console.say(empty_message)?;
            return Ok(false);
        }
        if self.format == OutputFormat::Table {
            self.console.say("Available rooms:")?;
        }
        render::write_rooms(self.console.output(), &rooms, self.format)?;
        Ok(true)
    }

    fn list_available_rooms(&mut self) -> Result<Step, CliError> {
        self.show_available_rooms("No free rooms.")?;
        Ok(Step::Continue)
    }

    fn register_and_book(&mut self) -> Result<Step, CliError> {
        let Some(surname) = self.console.read_non_empty("Client surname: ")? else {
            return Ok(Step::EndOfInput);
        };
        let surname = innkeep::Surname::new(surname).map_err(Error::from)?;
        let client = self.hotel.add_client(surname);
        self.console
            .say(format_args!("Client registered. ID = {client}"))?;

        if !self.show_available_rooms("No free rooms available for booking.")? {
            return Ok(Step::Continue);
        }

        let Some(choice) = self.console.read_int_in_range(
            "Room ID to book (0 to skip): ",
            0,
            self.max_room_id,
        )?
        else {
            return Ok(Step::EndOfInput);
        };
        if choice == 0 {
            self.console.say("Booking skipped by operator.")?;
            return Ok(Step::Continue);
        }

        let room = RoomId::try_from(choice).map_err(Error::from)?;
        self.book(client, room)?;
        Ok(Step::Continue)
    }

    fn book_for_registered_client(&mut self) -> Result<Step, CliError> {
        let Some(client) = self.console.read_int_in_range("Client ID: ", 1, u32::MAX)? else {
            return Ok(Step::EndOfInput);
        };
        let Some(room) = self
            .console
            .read_int_in_range("Room ID: ", 1, self.max_room_id)?
        else {
            return Ok(Step::EndOfInput);
        };

        let client = ClientId::try_from(client).map_err(Error::from)?;
        let room = RoomId::try_from(room).map_err(Error::from)?;
        self.book(client, room)?;
        Ok(Step::Continue)
    }

    fn book(&mut self, client: ClientId, room: RoomId) -> Result<(), CliError> {
        match self.hotel.book_room(client, room) {
            Ok(booking) => {
                let message = self.describe_booking(booking);
                self.console.say(format_args!("Booked: {message}."))?;
                Ok(())
            }
            Err(e) => self.report_rejection(e),
        }
    }

    fn cancel_booking(&mut self) -> Result<Step, CliError> {
        let Some(client) = self.console.read_int_in_range("Client ID: ", 1, u32::MAX)? else {
            return Ok(Step::EndOfInput);
        };
        let client = ClientId::try_from(client).map_err(Error::from)?;

        match self.hotel.cancel_booking(client) {
            Ok(booking) => {
                let message = self.describe_booking(booking);
                self.console
                    .say(format_args!("Booking cancelled: {message}. The room is free again."))?;
            }
            Err(e) => self.report_rejection(e)?,
        }
        Ok(Step::Continue)
    }

    fn cost_by_surname(&mut self) -> Result<Step, CliError> {
        let Some(surname) = self.console.read_non_empty("Client surname: ")? else {
            return Ok(Step::EndOfInput);
        };

        match self.hotel.cost_by_client_surname(&surname)? {
            CostLookup::ClientNotFound => {
                self.console
                    .say(format_args!("Client with surname '{surname}' not found."))?;
            }
            CostLookup::NotBooked { .. } => {
                self.console
                    .say("Client found, but no room is booked. There is no nightly cost.")?;
            }
            CostLookup::Booked { cost_per_night, .. } => {
                self.console.say(format_args!(
                    "Client {surname} pays {cost_per_night} per night."
                ))?;
            }
        }
        Ok(Step::Continue)
    }

    fn list_clients(&mut self) -> Result<Step, CliError> {
        let clients: Vec<_> = self.hotel.clients().iter().collect();
        if clients.is_empty() && self.format == OutputFormat::Table {
            self.console.say("No clients registered.")?;
            return Ok(Step::Continue);
        }
        if self.format == OutputFormat::Table {
            self.console.say("Clients:")?;
        }
        render::write_clients(self.console.output(), &clients, self.format)?;
        Ok(Step::Continue)
    }

    /// Reports a booking rejection and keeps the session going; anything
    /// else is returned as an error.
    fn report_rejection(&mut self, err: Error) -> Result<(), CliError> {
        if !err.is_rejection() {
            return Err(err.into());
        }

        let severity = if err.is_not_found() { "Error" } else { "Warning" };
        let message = match &err {
            Error::ClientNotFound { id } => format!("no client with ID {id}."),
            Error::RoomNotFound { id } => format!("no room with ID {id}."),
            Error::RoomAlreadyOccupied { room, .. } => {
                format!("room {room} is already occupied. Booking not made.")
            }
            Error::ClientAlreadyBooked { client, room } => {
                format!("client {client} has already booked room {room}.")
            }
            Error::NoRoomToCancel { client } => {
                format!("client {client} has no booking to cancel.")
            }
            other => format!("{other}."),
        };
        self.console.say(format_args!("{severity}: {message}"))?;
        Ok(())
    }

    /// Describes a booking by room label and surname, falling back to ids.
    fn describe_booking(&self, booking: Booking) -> String {
        let room = self
            .hotel
            .room(booking.room)
            .map_or_else(|| booking.room.to_string(), |room| room.number().to_string());
        let client = self
            .hotel
            .client(booking.client)
            .map_or_else(|| booking.client.to_string(), |c| c.surname().to_string());
        format!("room {room} for client {client}")
    }
}

/// Passes a consistency check through, logging the outcome. A failed check
/// ends the session with the library error.
fn checked_invariants(action: MenuAction, outcome: innkeep::Result<()>) -> Result<(), CliError> {
    match outcome {
        Ok(()) => {
            log::debug!("hotel consistent after '{}'", action.label());
            Ok(())
        }
        Err(e) => {
            log::error!("hotel inconsistent after '{}': {e}", action.label());
            Err(e.into())
        }
    }
}
