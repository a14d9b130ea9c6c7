//! Property-based tests for the hotel repository.
//!
//! Random sequences of registrations, bookings and cancellations are
//! replayed against a fresh hotel, checking the occupancy invariant after
//! every step.

use super::test_util::{cost, label, surname};
use super::Hotel;
use crate::{ClientId, Error, RoomId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddRoom(f64),
    AddClient,
    Book { client: u32, room: u32 },
    Cancel { client: u32 },
}

// Ids deliberately overshoot what exists so unknown-id paths get exercised.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1.0f64..5000.0).prop_map(Op::AddRoom),
        Just(Op::AddClient),
        (1u32..12, 1u32..12).prop_map(|(client, room)| Op::Book { client, room }),
        (1u32..12).prop_map(|client| Op::Cancel { client }),
    ]
}

fn apply(hotel: &mut Hotel, op: &Op) -> Option<Error> {
    match *op {
        Op::AddRoom(nightly) => {
            let number = format!("{}", hotel.rooms().len() + 100);
            hotel.add_room(label(&number), cost(nightly));
            None
        }
        Op::AddClient => {
            hotel.add_client(surname("Guest"));
            None
        }
        Op::Book { client, room } => hotel
            .book_room(
                ClientId::try_from(client).unwrap(),
                RoomId::try_from(room).unwrap(),
            )
            .err(),
        Op::Cancel { client } => hotel
            .cancel_booking(ClientId::try_from(client).unwrap())
            .err(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Occupancy stays symmetric and one-to-one after every operation
    #[test]
    fn occupancy_invariant_holds(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut hotel = Hotel::new();
        for op in &ops {
            let _ = apply(&mut hotel, op);
            prop_assert!(hotel.check_invariants().is_ok(), "after {:?}", op);
        }

        for room in hotel.rooms() {
            let holders = hotel
                .clients()
                .iter()
                .filter(|client| client.room() == Some(room.id()))
                .count();
            prop_assert_eq!(room.is_occupied(), holders == 1);
            prop_assert!(holders <= 1);
        }
    }

    // Rejected operations never change state
    #[test]
    fn rejections_change_nothing(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut hotel = Hotel::new();
        for op in &ops {
            let before = hotel.clone();
            if let Some(err) = apply(&mut hotel, op) {
                prop_assert!(err.is_rejection(), "unexpected error {:?}", err);
                prop_assert_eq!(hotel.rooms(), before.rooms());
                prop_assert_eq!(hotel.clients(), before.clients());
            }
        }
    }

    // Ids start at 1 and increase by one per entity, independently per kind
    #[test]
    fn ids_are_sequential(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut hotel = Hotel::new();
        for op in &ops {
            let _ = apply(&mut hotel, op);
        }

        for (index, room) in hotel.rooms().iter().enumerate() {
            prop_assert_eq!(room.id().value() as usize, index + 1);
        }
        for (index, client) in hotel.clients().iter().enumerate() {
            prop_assert_eq!(client.id().value() as usize, index + 1);
        }
    }

    // Cancelling and re-booking the same pair restores the booking
    #[test]
    fn cancel_then_rebook_restores(room_count in 1usize..8, pick in 0usize..8) {
        let mut hotel = Hotel::new();
        for i in 0..room_count {
            hotel.add_room(label(&format!("{}", 100 + i)), cost(50.0));
        }
        let client = hotel.add_client(surname("Smith"));
        let room = hotel.rooms()[pick % room_count].id();

        hotel.book_room(client, room).unwrap();
        let snapshot = hotel.clone();

        hotel.cancel_booking(client).unwrap();
        hotel.book_room(client, room).unwrap();

        prop_assert_eq!(hotel.rooms(), snapshot.rooms());
        prop_assert_eq!(hotel.clients(), snapshot.clients());
    }

    // Available rooms are exactly the unoccupied ones, in creation order
    #[test]
    fn available_rooms_match_occupancy(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut hotel = Hotel::new();
        for op in &ops {
            let _ = apply(&mut hotel, op);
        }

        let available: Vec<RoomId> = hotel.available_rooms().map(crate::Room::id).collect();
        let expected: Vec<RoomId> = hotel
            .rooms()
            .iter()
            .filter(|room| room.occupant().is_none())
            .map(crate::Room::id)
            .collect();
        prop_assert_eq!(available, expected);
        prop_assert_eq!(
            hotel.available_rooms().count() + hotel.bookings().count(),
            hotel.rooms().len()
        );
    }
}
