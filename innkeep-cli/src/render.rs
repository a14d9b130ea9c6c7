//! Room and client listings in table, JSON, CSV and TSV formats.

use crate::error::CliError;
use innkeep::config::OutputFormat;
use innkeep::{Client, Room};
use std::io::Write;

/// Column headers for room listings.
const ROOM_HEADERS: [&str; 4] = ["id", "number", "cost_per_night", "occupant"];

/// Column headers for client listings.
const CLIENT_HEADERS: [&str; 3] = ["id", "surname", "room"];

/// Writes rooms to `out` in the given format.
pub fn write_rooms<W: Write>(
    out: &mut W,
    rooms: &[&Room],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, serde_json::to_string_pretty(rooms)),
        _ => {
            let rows = rooms
                .iter()
                .map(|room| {
                    vec![
                        Some(room.id().to_string()),
                        Some(room.number().to_string()),
                        Some(room.cost_per_night().to_string()),
                        room.occupant().map(|client| client.to_string()),
                    ]
                })
                .collect::<Vec<_>>();
            write_rows(out, &ROOM_HEADERS, &rows, format)
        }
    }
}

/// Writes clients to `out` in the given format.
pub fn write_clients<W: Write>(
    out: &mut W,
    clients: &[&Client],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(out, serde_json::to_string_pretty(clients)),
        _ => {
            let rows = clients
                .iter()
                .map(|client| {
                    vec![
                        Some(client.id().to_string()),
                        Some(client.surname().to_string()),
                        client.room().map(|room| room.to_string()),
                    ]
                })
                .collect::<Vec<_>>();
            write_rows(out, &CLIENT_HEADERS, &rows, format)
        }
    }
}

/// Writes already serialized records followed by a newline.
fn write_json<W: Write>(out: &mut W, json: serde_json::Result<String>) -> Result<(), CliError> {
    let json = json.map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Writes rows as a table or as delimited records. Missing values show as
/// `-` in tables and as empty fields otherwise.
fn write_rows<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<Option<String>>],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Csv => write_delimited(out, headers, rows, b','),
        OutputFormat::Tsv => write_delimited(out, headers, rows, b'\t'),
        OutputFormat::Table | OutputFormat::Json => {
            let header_line = headers
                .iter()
                .map(|s| s.to_uppercase())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(out, "{header_line}")?;

            for row in rows {
                let line = row
                    .iter()
                    .map(|cell| cell.as_deref().unwrap_or("-"))
                    .collect::<Vec<_>>()
                    .join("\t");
                writeln!(out, "{line}")?;
            }
            Ok(())
        }
    }
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn write_delimited<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<Option<String>>],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(&mut *out);

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeep::{CostPerNight, Hotel, RoomLabel, Surname};

    fn hotel() -> Hotel {
        let mut hotel = Hotel::new();
        let room = hotel.add_room(
            RoomLabel::new("101").unwrap(),
            CostPerNight::try_from(50.0).unwrap(),
        );
        hotel.add_room(
            RoomLabel::new("Suite, sea view").unwrap(),
            CostPerNight::try_from(120.5).unwrap(),
        );
        let client = hotel.add_client(Surname::new("Smith").unwrap());
        hotel.add_client(Surname::new("Jones").unwrap());
        hotel.book_room(client, room).unwrap();
        hotel
    }

    fn rooms_as(hotel: &Hotel, format: OutputFormat) -> String {
        let rooms: Vec<&Room> = hotel.rooms().iter().collect();
        let mut out = Vec::new();
        write_rooms(&mut out, &rooms, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn clients_as(hotel: &Hotel, format: OutputFormat) -> String {
        let clients: Vec<&Client> = hotel.clients().iter().collect();
        let mut out = Vec::new();
        write_clients(&mut out, &clients, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rooms_table() {
        let out = rooms_as(&hotel(), OutputFormat::Table);
        assert_eq!(
            out,
            "ID\tNUMBER\tCOST_PER_NIGHT\tOCCUPANT\n\
             1\t101\t50.00\t1\n\
             2\tSuite, sea view\t120.50\t-\n"
        );
    }

    #[test]
    fn test_rooms_csv_quotes_commas() {
        let out = rooms_as(&hotel(), OutputFormat::Csv);
        assert_eq!(
            out,
            "id,number,cost_per_night,occupant\n\
             1,101,50.00,1\n\
             2,\"Suite, sea view\",120.50,\n"
        );
    }

    #[test]
    fn test_clients_tsv() {
        let out = clients_as(&hotel(), OutputFormat::Tsv);
        assert_eq!(out, "id\tsurname\troom\n1\tSmith\t1\n2\tJones\t\n");
    }

    #[test]
    fn test_rooms_json() {
        let out = rooms_as(&hotel(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["number"], "101");
        assert_eq!(parsed[0]["cost_per_night"], 50.0);
        assert_eq!(parsed[0]["occupant"], 1);
        assert!(parsed[1]["occupant"].is_null());
    }

    #[test]
    fn test_json_uses_record_field_names() {
        let hotel = hotel();
        let parsed: serde_json::Value =
            serde_json::from_str(&clients_as(&hotel, OutputFormat::Json)).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                {"id": 1, "surname": "Smith", "room": 1},
                {"id": 2, "surname": "Jones", "room": null}
            ])
        );

        let parsed: serde_json::Value =
            serde_json::from_str(&rooms_as(&hotel, OutputFormat::Json)).unwrap();
        assert_eq!(parsed[1]["id"], 2);
        assert_eq!(parsed[1]["number"], "Suite, sea view");
        assert_eq!(parsed[1]["cost_per_night"], 120.5);
    }

    #[test]
    fn test_clients_json_empty() {
        let mut out = Vec::new();
        write_clients(&mut out, &[], OutputFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
