//! Error types for the innkeep library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Expected booking
//! outcomes (unknown ids, occupied rooms, double bookings) are ordinary
//! variants here and never abort the process.

use std::fmt;

use thiserror::Error;

use crate::client::ClientId;
use crate::room::RoomId;

/// Result type alias for operations that may fail with an innkeep error.
///
/// # Examples
///
/// ```
/// use innkeep::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
#[derive(Debug, Error)]
pub enum Error {
    /// No client is registered under the given id.
    #[error("client {id} not found")]
    ClientNotFound {
        /// The id that was looked up.
        id: ClientId,
    },

    /// No room is registered under the given id.
    #[error("room {id} not found")]
    RoomNotFound {
        /// The id that was looked up.
        id: RoomId,
    },

    /// The room already has an occupant.
    #[error("room {room} is already occupied by client {occupant}")]
    RoomAlreadyOccupied {
        /// The requested room.
        room: RoomId,
        /// The client currently holding the room.
        occupant: ClientId,
    },

    /// The client already holds a room and must cancel before booking again.
    #[error("client {client} has already booked room {room}")]
    ClientAlreadyBooked {
        /// The client that tried to book.
        client: ClientId,
        /// The room the client already holds.
        room: RoomId,
    },

    /// The client has no active booking to cancel.
    #[error("client {client} has no booking to cancel")]
    NoRoomToCancel {
        /// The client whose booking was to be cancelled.
        client: ClientId,
    },

    /// Room and client occupancy records disagree.
    #[error("inconsistent hotel state: {details}")]
    InconsistentState {
        /// What disagreed.
        details: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is an expected booking rejection.
    ///
    /// Rejections leave the hotel unchanged and are reported to the operator;
    /// anything else points at bad input or a broken invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::{Error, RoomId};
    ///
    /// let err = Error::RoomNotFound { id: RoomId::try_from(7).unwrap() };
    /// assert!(err.is_rejection());
    ///
    /// let err = Error::InconsistentState { details: "dangling room".into() };
    /// assert!(!err.is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::ClientNotFound { .. }
                | Self::RoomNotFound { .. }
                | Self::RoomAlreadyOccupied { .. }
                | Self::ClientAlreadyBooked { .. }
                | Self::NoRoomToCancel { .. }
        )
    }

    /// Check if the error is a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ClientNotFound { .. } | Self::RoomNotFound { .. }
        )
    }
}

/// A field value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
