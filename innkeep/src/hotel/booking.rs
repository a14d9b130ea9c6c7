//! Booking, cancellation and cost lookup.
//!
//! These are the only operations that change occupancy. Each one either
//! updates both the room and the client or changes nothing.

use serde::Serialize;

use super::{inconsistent, Hotel};
use crate::client::ClientId;
use crate::error::{Error, Result};
use crate::room::{CostPerNight, RoomId};

/// A client paired with the room they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// The client holding the room.
    pub client: ClientId,
    /// The booked room.
    pub room: RoomId,
}

/// Result of looking up the nightly cost for a client by surname.
///
/// "Not registered" and "registered but not booked" are kept apart so a
/// missing booking is never mistaken for a free room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostLookup {
    /// No client has that surname.
    ClientNotFound,
    /// The client exists but holds no room.
    NotBooked {
        /// The client that was found.
        client: ClientId,
    },
    /// The client holds a room.
    Booked {
        /// The client that was found.
        client: ClientId,
        /// The room the client holds.
        room: RoomId,
        /// That room's nightly cost.
        cost_per_night: CostPerNight,
    },
}

impl CostLookup {
    /// Returns the nightly cost if the client holds a room.
    #[must_use]
    pub const fn cost(&self) -> Option<CostPerNight> {
        match self {
            Self::Booked { cost_per_night, .. } => Some(*cost_per_night),
            Self::ClientNotFound | Self::NotBooked { .. } => None,
        }
    }
}

impl Hotel {
    /// Books `room` for `client`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    ///
    /// 1. the client exists (`ClientNotFound`)
    /// 2. the room exists (`RoomNotFound`)
    /// 3. the room is free (`RoomAlreadyOccupied`)
    /// 4. the client holds no room yet (`ClientAlreadyBooked`)
    ///
    /// Existing bookings are never moved; a client must cancel first.
    ///
    /// # Errors
    ///
    /// Returns one of the four rejections above. The hotel is unchanged
    /// when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{CostPerNight, Error, Hotel, RoomLabel, Surname};
    ///
    /// let mut hotel = Hotel::new();
    /// let room = hotel.add_room(RoomLabel::new("101").unwrap(), CostPerNight::try_from(50.0).unwrap());
    /// let smith = hotel.add_client(Surname::new("Smith").unwrap());
    /// let jones = hotel.add_client(Surname::new("Jones").unwrap());
    ///
    /// hotel.book_room(smith, room).unwrap();
    /// assert!(matches!(
    ///     hotel.book_room(jones, room),
    ///     Err(Error::RoomAlreadyOccupied { .. })
    /// ));
    /// ```
    pub fn book_room(&mut self, client: ClientId, room: RoomId) -> Result<Booking> {
        let client_idx = self
            .client_index(client)
            .ok_or(Error::ClientNotFound { id: client })?;
        let room_idx = self
            .room_index(room)
            .ok_or(Error::RoomNotFound { id: room })?;

        if let Some(occupant) = self.rooms[room_idx].occupant() {
            return Err(Error::RoomAlreadyOccupied { room, occupant });
        }
        if let Some(held) = self.clients[client_idx].room() {
            return Err(Error::ClientAlreadyBooked { client, room: held });
        }

        self.rooms[room_idx].occupy(client);
        self.clients[client_idx].assign_room(room);

        log::info!("client {client} booked room {room}");
        Ok(Booking { client, room })
    }

    /// Cancels the booking held by `client`, freeing the room.
    ///
    /// Returns the booking that was cancelled. The room stays registered
    /// and becomes available again.
    ///
    /// # Errors
    ///
    /// Returns `ClientNotFound` for an unknown client, `NoRoomToCancel` if
    /// the client holds no room, and `InconsistentState` if the client's
    /// room is missing or names a different occupant.
    pub fn cancel_booking(&mut self, client: ClientId) -> Result<Booking> {
        let client_idx = self
            .client_index(client)
            .ok_or(Error::ClientNotFound { id: client })?;
        let room = self.clients[client_idx]
            .room()
            .ok_or(Error::NoRoomToCancel { client })?;

        let Some(room_idx) = self.room_index(room) else {
            log::error!("client {client} holds room {room}, which does not exist");
            return Err(inconsistent(format!(
                "client {client} holds unknown room {room}"
            )));
        };
        if self.rooms[room_idx].occupant() != Some(client) {
            log::error!("room {room} does not list client {client} as its occupant");
            return Err(inconsistent(format!(
                "client {client} holds room {room}, which names a different occupant"
            )));
        }

        self.rooms[room_idx].vacate();
        self.clients[client_idx].clear_room();

        log::info!("client {client} cancelled the booking of room {room}");
        Ok(Booking { client, room })
    }

    /// Looks up the nightly cost of the room booked by the earliest
    /// registered client with `surname`.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentState` if the client holds a room that does not
    /// exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{CostLookup, Hotel, Surname};
    ///
    /// let mut hotel = Hotel::new();
    /// let client = hotel.add_client(Surname::new("Smith").unwrap());
    ///
    /// assert_eq!(hotel.cost_by_client_surname("Smith").unwrap(), CostLookup::NotBooked { client });
    /// assert_eq!(hotel.cost_by_client_surname("Jones").unwrap(), CostLookup::ClientNotFound);
    /// ```
    pub fn cost_by_client_surname(&self, surname: &str) -> Result<CostLookup> {
        let Some(client) = self.client_by_surname(surname) else {
            return Ok(CostLookup::ClientNotFound);
        };
        let Some(room_id) = client.room() else {
            return Ok(CostLookup::NotBooked {
                client: client.id(),
            });
        };

        let room = self.room(room_id).ok_or_else(|| {
            log::error!("client {} holds room {room_id}, which does not exist", client.id());
            inconsistent(format!(
                "client {} holds unknown room {room_id}",
                client.id()
            ))
        })?;

        Ok(CostLookup::Booked {
            client: client.id(),
            room: room_id,
            cost_per_night: room.cost_per_night(),
        })
    }

    /// Returns the active bookings, ordered by room creation.
    pub fn bookings(&self) -> impl Iterator<Item = Booking> + '_ {
        self.rooms.iter().filter_map(|room| {
            room.occupant().map(|client| Booking {
                client,
                room: room.id(),
            })
        })
    }
}
