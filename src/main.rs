use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use ruang::BookingDesk;
use ruang::model::BookingRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let metrics_port: Option<u16> = std::env::var("RUANG_METRICS_PORT")
        .ok()
        .and_then(|s| s.parse().ok());
    ruang::observability::init(metrics_port);

    let desk = Arc::new(BookingDesk::with_builtin_rooms());
    info!("ruang ready: {} rooms in catalog", desk.catalog().len());
    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" {
                    break;
                }
                if let Err(e) = dispatch(&desk, line).await {
                    eprintln!("error: {e}");
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("ruang stopped");
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  rooms");
    println!("  book <room> | <name> | <purpose> | <YYYY-MM-DD> | <HH:MM> | <HH:MM>");
    println!("  list <YYYY-MM-DD>");
    println!("  clear");
    println!("  quit");
}

async fn dispatch(desk: &BookingDesk, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
    match cmd {
        "rooms" => {
            for room in desk.catalog().iter() {
                println!("{}", serde_json::to_string(room)?);
            }
        }
        "book" => {
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            let &[room, name, purpose, date, start, end] = parts.as_slice() else {
                return Err("usage: book <room> | <name> | <purpose> | <date> | <start> | <end>".into());
            };
            let request = BookingRequest {
                room: room.to_owned(),
                booked_by: name.to_owned(),
                purpose: purpose.to_owned(),
                date: date.parse::<NaiveDate>()?,
                start: NaiveTime::parse_from_str(start, "%H:%M")?,
                end: NaiveTime::parse_from_str(end, "%H:%M")?,
            };
            match desk.try_book(request).await {
                Ok(r) => println!(
                    "booked {} for {} on {} ({} - {})",
                    r.room,
                    r.booked_by,
                    r.slot.date(),
                    r.slot.start.time().format("%H:%M"),
                    r.slot.end.time().format("%H:%M"),
                ),
                Err(e) => println!("rejected: {e}"),
            }
        }
        "list" => {
            let date: NaiveDate = rest.trim().parse()?;
            let reservations = desk.list_by_date(date).await;
            if reservations.is_empty() {
                println!("no bookings on {date}");
            } else {
                for r in &reservations {
                    println!("{}", serde_json::to_string(r)?);
                }
            }
        }
        "clear" => {
            let removed = desk.clear_all().await;
            println!("cleared {removed} reservations");
        }
        other => return Err(format!("unknown command: {other}").into()),
    }
    Ok(())
}
