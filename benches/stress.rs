use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use ruang::BookingDesk;
use ruang::model::BookingRequest;

const DAYS: i64 = 180;
const SLOTS_PER_DAY: u32 = 8; // 09:00-17:00, one-hour slots

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.2}us, p50={:.2}us, p95={:.2}us, p99={:.2}us, max={:.2}us",
        latencies.len(),
        avg.as_secs_f64() * 1e6,
        percentile(latencies, 50.0).as_secs_f64() * 1e6,
        percentile(latencies, 95.0).as_secs_f64() * 1e6,
        percentile(latencies, 99.0).as_secs_f64() * 1e6,
        latencies.last().unwrap().as_secs_f64() * 1e6,
    );
}

fn request(room: &str, date: NaiveDate, hour: u32) -> BookingRequest {
    BookingRequest {
        room: room.to_owned(),
        booked_by: "bench".into(),
        purpose: "stress".into(),
        date,
        start: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        end: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
    }
}

#[tokio::main]
async fn main() {
    println!("== ruang stress ==");

    let desk = BookingDesk::with_builtin_rooms();
    let rooms: Vec<String> = desk.catalog().iter().map(|r| r.name.clone()).collect();
    let first_day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    // Phase 1: fill every room with back-to-back one-hour bookings.
    let mut admit_latencies = Vec::new();
    for day in 0..DAYS {
        let date = first_day + TimeDelta::days(day);
        for slot in 0..SLOTS_PER_DAY {
            for room in &rooms {
                let start = Instant::now();
                desk.try_book(request(room, date, 9 + slot))
                    .await
                    .expect("seed booking must be admitted");
                admit_latencies.push(start.elapsed());
            }
        }
    }
    println!("  seeded {} reservations", desk.reservation_count().await);
    print_latency("admit (empty slot)", &mut admit_latencies);

    // Phase 2: every attempt collides with an existing booking.
    let mut conflict_latencies = Vec::new();
    for day in 0..DAYS {
        let date = first_day + TimeDelta::days(day);
        for room in &rooms {
            let start = Instant::now();
            let result = desk.try_book(request(room, date, 12)).await;
            conflict_latencies.push(start.elapsed());
            assert!(result.is_err(), "overlap must be rejected");
        }
    }
    print_latency("reject (conflict)", &mut conflict_latencies);

    // Phase 3: schedule listings across the seeded range.
    let mut list_latencies = Vec::new();
    for day in 0..DAYS {
        let date = first_day + TimeDelta::days(day);
        let start = Instant::now();
        let listed = desk.list_by_date(date).await;
        list_latencies.push(start.elapsed());
        assert_eq!(listed.len(), (SLOTS_PER_DAY as usize) * rooms.len());
    }
    print_latency("list_by_date", &mut list_latencies);
}
