//! Integration tests for the interactive session.
//!
//! Each test pipes a script of menu choices and answers into the binary and
//! checks the transcript.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_session_is_default_command() {
    let env = TestEnv::new();

    env.command()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Hotel information system ==="))
        .stdout(predicate::str::contains("Exiting."));
}

#[test]
fn test_explicit_session_subcommand() {
    let env = TestEnv::new();

    env.command()
        .arg("session")
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session finished."));
}

#[test]
fn test_add_book_and_lookup_cost() {
    let env = TestEnv::new();

    let out = env.session("1\n101\n50\n3\nSmith\n1\n5\nSmith\n0\n");

    assert!(out.contains("Room added. ID = 1"));
    assert!(out.contains("Client registered. ID = 1"));
    assert!(out.contains("Booked: room 101 for client Smith."));
    assert!(out.contains("Client Smith pays 50.00 per night."));
}

#[test]
fn test_available_rooms_after_one_booking() {
    let env = TestEnv::new();

    let out = env.session("1\nA\n10\n1\nB\n20\n1\nC\n30\n3\nSmith\n2\n4\n0\n");

    let listing = out
        .rsplit("Available rooms:\n")
        .next()
        .expect("available rooms listing");
    assert!(listing.starts_with(
        "ID\tNUMBER\tCOST_PER_NIGHT\tOCCUPANT\n1\tA\t10.00\t-\n3\tC\t30.00\t-\n"
    ));
}

#[test]
fn test_rejections_do_not_end_session() {
    let env = TestEnv::new();

    let out = env.session("7\n1\n1\n8\n1\n1\n101\n50\n3\nSmith\n1\n3\nJones\n7\n2\n1\n0\n");

    assert_eq!(out.matches("Error: no client with ID 1.").count(), 2);
    assert!(out.contains("No free rooms available for booking."));
    assert!(out.contains("Warning: room 1 is already occupied. Booking not made."));
    assert!(out.contains("Exiting."));
}

#[test]
fn test_closed_stdin_ends_session() {
    let env = TestEnv::new();

    env.command()
        .write_stdin("1\n101\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("End of input.\nSession finished.\n"));
}

#[test]
fn test_seeded_rooms_from_project_config() {
    let env = TestEnv::new();
    env.write_project_config(
        "hotel_name: Seaside Inn\nrooms:\n  - number: \"101\"\n    cost_per_night: 50.0\n  - number: \"102\"\n    cost_per_night: 65.0\n",
    );

    let out = env.session("2\n0\n");

    assert!(out.contains("=== Seaside Inn ==="));
    assert!(out.contains("1\t101\t50.00\t-\n2\t102\t65.00\t-\n"));
}

#[test]
fn test_user_and_project_rooms_accumulate() {
    let env = TestEnv::new();
    env.write_user_config("rooms:\n  - number: U1\n    cost_per_night: 40.0\n");
    env.write_project_config("rooms:\n  - number: P1\n    cost_per_night: 45.0\n");

    let out = env.session("2\n0\n");

    assert!(out.contains("1\tU1\t40.00\t-\n2\tP1\t45.00\t-\n"));
}

#[test]
fn test_format_flag_switches_listing() {
    let env = TestEnv::new();

    env.command()
        .arg("--format")
        .arg("csv")
        .write_stdin("1\n101\n50\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "id,number,cost_per_night,occupant\n1,101,50.00,\n",
        ));
}

#[test]
fn test_format_from_environment() {
    let env = TestEnv::new();

    env.command()
        .env("INNKEEP_OUTPUT_FORMAT", "tsv")
        .write_stdin("3\nSmith\n6\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("id\tsurname\troom\n1\tSmith\t\n"));
}

#[test]
fn test_max_cost_from_environment() {
    let env = TestEnv::new();

    env.command()
        .env("INNKEEP_MAX_COST_PER_NIGHT", "100")
        .write_stdin("1\n101\n500\n80\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: cost must not exceed 100.00. Try again.",
        ))
        .stdout(predicate::str::contains("Room added. ID = 1"));
}

#[test]
fn test_json_listing_parses() {
    let env = TestEnv::new();
    env.write_user_config("output_format: json\n");

    let out = env.session("1\n101\n50\n3\nSmith\n1\n6\n0\n");

    let start = out.rfind("[\n").expect("JSON listing in output");
    let end = out[start..].find("\n]\n").expect("end of JSON listing") + start + 2;
    let clients: serde_json::Value = serde_json::from_str(&out[start..end]).unwrap();
    assert_eq!(clients[0]["surname"], "Smith");
    assert_eq!(clients[0]["room"], 1);
}
