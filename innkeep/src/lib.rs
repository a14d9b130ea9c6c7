#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A library for managing the rooms, clients and bookings of a small hotel.
//!
//! All state lives in memory inside a [`Hotel`], which owns every room and
//! client, hands out identifiers and enforces the booking rules: a room has
//! at most one occupant and a client holds at most one room.
//!
//! ## Core Types
//!
//! - [`Room`], [`RoomId`], [`RoomLabel`] and [`CostPerNight`]: bookable rooms
//! - [`Client`], [`ClientId`] and [`Surname`]: registered guests
//! - [`Hotel`], [`Booking`] and [`CostLookup`]: the repository and its results
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use innkeep::{CostLookup, CostPerNight, Hotel, RoomLabel, Surname};
//!
//! let mut hotel = Hotel::new();
//! let room = hotel.add_room(
//!     RoomLabel::new("101").unwrap(),
//!     CostPerNight::try_from(50.0).unwrap(),
//! );
//! let client = hotel.add_client(Surname::new("Smith").unwrap());
//!
//! hotel.book_room(client, room).unwrap();
//!
//! match hotel.cost_by_client_surname("Smith").unwrap() {
//!     CostLookup::Booked { cost_per_night, .. } => assert_eq!(cost_per_night.value(), 50.0),
//!     other => panic!("unexpected lookup result: {other:?}"),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod hotel;
pub mod logging;
pub mod room;

// Re-export key types at crate root for convenience
pub use client::{Client, ClientId, Surname};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use hotel::{Booking, CostLookup, Hotel};
pub use logging::{init_logger, LogLevel, Logger};
pub use room::{CostPerNight, Room, RoomId, RoomLabel};
