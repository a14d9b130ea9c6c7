//! Client types: identifiers, surnames and the client record.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::room::RoomId;

/// Identifier of a client, assigned by the [`Hotel`](crate::Hotel).
///
/// Client ids start at 1; 0 is never a valid id.
///
/// # Examples
///
/// ```
/// use innkeep::ClientId;
///
/// let id = ClientId::try_from(3).unwrap();
/// assert_eq!(id.to_string(), "3");
/// assert!(ClientId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientId(u32);

impl ClientId {
    /// The first id handed out by a hotel.
    pub const FIRST: Self = Self(1);

    /// Returns the underlying number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<u32> for ClientId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(ValidationError {
                field: "client id".into(),
                message: "client ids start at 1".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A client's surname.
///
/// Surnames are trimmed and must not be empty. Two clients may share a
/// surname; lookups by surname return the earliest registered one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Surname(String);

impl Surname {
    /// Creates a surname from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the surname is empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::Surname;
    ///
    /// assert_eq!(Surname::new(" Smith ").unwrap().as_str(), "Smith");
    /// assert!(Surname::new("").is_err());
    /// ```
    pub fn new(surname: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = surname.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "surname".into(),
                message: "surname must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the surname text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Surname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered guest.
///
/// # Examples
///
/// ```
/// use innkeep::{Client, ClientId, Surname};
///
/// let client = Client::new(ClientId::FIRST, Surname::new("Smith").unwrap());
/// assert_eq!(client.room(), None);
/// assert_eq!(client.to_string(), "#1 Smith no room");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    id: ClientId,
    surname: Surname,
    room: Option<RoomId>,
}

impl Client {
    /// Creates a client without a booking.
    #[must_use]
    pub const fn new(id: ClientId, surname: Surname) -> Self {
        Self {
            id,
            surname,
            room: None,
        }
    }

    /// Returns the client id.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the surname.
    #[must_use]
    pub const fn surname(&self) -> &Surname {
        &self.surname
    }

    /// Returns the booked room, if any.
    #[must_use]
    pub const fn room(&self) -> Option<RoomId> {
        self.room
    }

    /// Returns `true` if the client holds a room.
    #[must_use]
    pub const fn has_booking(&self) -> bool {
        self.room.is_some()
    }

    pub(crate) fn assign_room(&mut self, room: RoomId) {
        self.room = Some(room);
    }

    pub(crate) fn clear_room(&mut self) {
        self.room = None;
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ", self.id, self.surname)?;
        match self.room {
            Some(room) => write!(f, "room #{room}"),
            None => write!(f, "no room"),
        }
    }
}
