use clap::Parser;
use latlon_utm::{to_geodetic, to_projected, Error, LatLon};

/// Projects a point to UTM and back, printing the round-trip difference.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Latitude in degrees, [-80, 84]
    #[arg(long, allow_hyphen_values = true, default_value_t = 52.50207395)]
    lat: f64,
    /// Longitude in degrees, (-180, 180]
    #[arg(long, allow_hyphen_values = true, default_value_t = -2.9096531)]
    lon: f64,
}

fn run(args: &Args) -> Result<(), Error> {
    let origin = LatLon::from_degrees(args.lat, args.lon)?;
    let (lat, lon) = (origin.latitude(), origin.longitude());

    let utm = to_projected(lat, lon)?;
    let zone = utm.zone().to_string();
    println!("x: {:.8}, y: {:.8}, zone: {zone}", utm.easting(), utm.northing());

    let back = to_geodetic(utm.easting(), utm.northing(), &zone)?;
    println!("lat: {:.8}, lon: {:.8}", back.latitude(), back.longitude());
    println!(
        "diff: lat: {:.8e}, lon: {:.8e}",
        lat - back.latitude(),
        lon - back.longitude()
    );
    println!("distance: {:.3e} m", origin.haversine(&back));

    Ok(())
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
