use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: booking attempts. Labels: status (admitted | rejected).
pub const BOOKINGS_TOTAL: &str = "ruang_bookings_total";

/// Counter: bookings rejected due to a same-room overlap.
pub const BOOKING_CONFLICTS_TOTAL: &str = "ruang_booking_conflicts_total";

/// Counter: schedule listings served.
pub const LIST_QUERIES_TOTAL: &str = "ruang_list_queries_total";

/// Counter: administrative clears.
pub const STORE_CLEARS_TOTAL: &str = "ruang_store_clears_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: reservations currently held in the store.
pub const RESERVATIONS_ACTIVE: &str = "ruang_reservations_active";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}
