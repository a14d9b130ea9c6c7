//! The hotel repository.
//!
//! [`Hotel`] is the sole owner of every [`Room`] and [`Client`]. It assigns
//! identifiers, answers lookups and (in [`booking`]) performs the booking
//! and cancellation transitions that keep rooms and clients paired.
//!
//! Collections are small, so lookups are linear scans over creation-ordered
//! vectors. Listing order is always creation order.
//!
//! # Examples
//!
//! ```
//! use innkeep::{CostPerNight, Hotel, RoomLabel, Surname};
//!
//! let mut hotel = Hotel::new();
//! let first = hotel.add_room(RoomLabel::new("101").unwrap(), CostPerNight::try_from(50.0).unwrap());
//! let second = hotel.add_room(RoomLabel::new("102").unwrap(), CostPerNight::try_from(65.0).unwrap());
//! assert_eq!(first.value(), 1);
//! assert_eq!(second.value(), 2);
//!
//! let client = hotel.add_client(Surname::new("Smith").unwrap());
//! hotel.book_room(client, first).unwrap();
//!
//! let free: Vec<_> = hotel.available_rooms().map(|room| room.id()).collect();
//! assert_eq!(free, vec![second]);
//! ```

pub mod booking;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_util;

pub use booking::{Booking, CostLookup};

use crate::client::{Client, ClientId, Surname};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::room::{CostPerNight, Room, RoomId, RoomLabel};

/// In-memory repository of rooms and clients for one hotel.
#[derive(Debug, Clone)]
pub struct Hotel {
    rooms: Vec<Room>,
    clients: Vec<Client>,
    next_room_id: RoomId,
    next_client_id: ClientId,
}

impl Hotel {
    /// Creates an empty hotel whose id counters start at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rooms: Vec::new(),
            clients: Vec::new(),
            next_room_id: RoomId::FIRST,
            next_client_id: ClientId::FIRST,
        }
    }

    /// Creates a hotel pre-loaded with the rooms listed in `config`.
    ///
    /// Rooms are added in the order they appear, so the first configured
    /// room gets id 1.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a configured room has an empty label or
    /// a cost outside `(0, max_cost_per_night]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::config::{Config, RoomSeed};
    /// use innkeep::Hotel;
    ///
    /// let config = Config {
    ///     rooms: Some(vec![RoomSeed { number: "101".into(), cost_per_night: 50.0 }]),
    ///     ..Default::default()
    /// };
    /// let hotel = Hotel::from_config(&config).unwrap();
    /// assert_eq!(hotel.rooms().len(), 1);
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut hotel = Self::new();
        let max_cost = config.max_cost_per_night();

        for seed in config.rooms.iter().flatten() {
            let number = RoomLabel::new(&seed.number)?;
            let cost = CostPerNight::with_ceiling(seed.cost_per_night, max_cost)?;
            hotel.add_room(number, cost);
        }

        log::info!("hotel opened with {} configured room(s)", hotel.rooms.len());
        Ok(hotel)
    }

    /// Registers a new room and returns its id.
    pub fn add_room(&mut self, number: RoomLabel, cost_per_night: CostPerNight) -> RoomId {
        let id = self.next_room_id;
        self.next_room_id = id.next();

        log::debug!("adding room {id} ({number}, {cost_per_night}/night)");
        self.rooms.push(Room::new(id, number, cost_per_night));
        id
    }

    /// Registers a new client and returns its id.
    pub fn add_client(&mut self, surname: Surname) -> ClientId {
        let id = self.next_client_id;
        self.next_client_id = id.next();

        log::debug!("registering client {id} ({surname})");
        self.clients.push(Client::new(id, surname));
        id
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id() == id)
    }

    /// Looks up a client by id.
    #[must_use]
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id() == id)
    }

    /// Looks up the earliest registered client with the given surname.
    ///
    /// The comparison is exact (case-sensitive) after trimming `surname`.
    #[must_use]
    pub fn client_by_surname(&self, surname: &str) -> Option<&Client> {
        let surname = surname.trim();
        self.clients
            .iter()
            .find(|client| client.surname().as_str() == surname)
    }

    /// Returns all rooms in creation order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns all clients in creation order.
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Returns the unoccupied rooms in creation order.
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|room| !room.is_occupied())
    }

    /// Verifies that rooms and clients agree on every booking.
    ///
    /// Checks that each occupied room points at an existing client holding
    /// exactly that room (and vice versa), and that ids are strictly
    /// increasing and below the next id to be handed out.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentState` describing the first disagreement found.
    pub fn check_invariants(&self) -> Result<()> {
        let rooms_ordered = self.rooms.windows(2).all(|w| w[0].id() < w[1].id());
        let clients_ordered = self.clients.windows(2).all(|w| w[0].id() < w[1].id());
        if !rooms_ordered || !clients_ordered {
            return Err(inconsistent("ids are not strictly increasing"));
        }
        if self.rooms.last().is_some_and(|room| room.id() >= self.next_room_id)
            || self
                .clients
                .last()
                .is_some_and(|client| client.id() >= self.next_client_id)
        {
            return Err(inconsistent("an id was handed out twice"));
        }

        for room in &self.rooms {
            if let Some(occupant) = room.occupant() {
                match self.client(occupant) {
                    Some(client) if client.room() == Some(room.id()) => {}
                    Some(_) => {
                        return Err(inconsistent(format!(
                            "room {} names client {occupant}, who holds a different room",
                            room.id()
                        )))
                    }
                    None => {
                        return Err(inconsistent(format!(
                            "room {} names unknown client {occupant}",
                            room.id()
                        )))
                    }
                }
            }
        }

        for client in &self.clients {
            if let Some(room_id) = client.room() {
                match self.room(room_id) {
                    Some(room) if room.occupant() == Some(client.id()) => {}
                    Some(_) => {
                        return Err(inconsistent(format!(
                            "client {} holds room {room_id}, which names a different occupant",
                            client.id()
                        )))
                    }
                    None => {
                        return Err(inconsistent(format!(
                            "client {} holds unknown room {room_id}",
                            client.id()
                        )))
                    }
                }
            }
        }

        Ok(())
    }

    fn room_index(&self, id: RoomId) -> Option<usize> {
        self.rooms.iter().position(|room| room.id() == id)
    }

    fn client_index(&self, id: ClientId) -> Option<usize> {
        self.clients.iter().position(|client| client.id() == id)
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

fn inconsistent(details: impl Into<String>) -> Error {
    Error::InconsistentState {
        details: details.into(),
    }
}
