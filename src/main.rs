use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_inventory::{config::Config, Auditorium};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %config.app.environment, "Starting seat inventory demo");

    let mut auditorium = Auditorium::new(&config.auditorium.widths);
    info!(
        "Auditorium {} ready: {} rows, {} seats",
        auditorium.id(),
        auditorium.row_count(),
        auditorium.total_seats()
    );

    // Seat each party in a single row, first fit
    for &party in &config.demo.parties {
        match auditorium.reserve_best(party) {
            Ok(start) => info!("Party of {} seated from {}", party, start),
            Err(e) => warn!("Party of {} not seated: {}", party, e),
        }
    }

    info!("{} seats still available", auditorium.count_available());

    let map = auditorium.snapshot();
    print!("{}", map);
    println!("{}", serde_json::to_string_pretty(&map)?);

    Ok(())
}
