//! Shared test utilities for hotel unit tests.

use crate::{CostPerNight, Hotel, RoomLabel, Surname};

/// Builds a room label, panicking on invalid input.
pub fn label(text: &str) -> RoomLabel {
    RoomLabel::new(text).unwrap()
}

/// Builds a nightly cost, panicking on invalid input.
pub fn cost(value: f64) -> CostPerNight {
    CostPerNight::try_from(value).unwrap()
}

/// Builds a surname, panicking on invalid input.
pub fn surname(text: &str) -> Surname {
    Surname::new(text).unwrap()
}

/// Creates a hotel holding the given `(label, cost)` rooms, in order.
pub fn hotel_with_rooms(rooms: &[(&str, f64)]) -> Hotel {
    let mut hotel = Hotel::new();
    for (number, nightly) in rooms {
        hotel.add_room(label(number), cost(*nightly));
    }
    hotel
}
