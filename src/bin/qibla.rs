//! Qibla CLI - prints the bearing towards the Kaaba from a position,
//! and guidance for any number of compass headings.

use std::process;
use std::time::Instant;

use clap::Parser;
use dotenv::dotenv;
use log::{debug, warn};

use qibla::session::{FixedLocation, OrientationSample};
use qibla::{Finder, FinderConfig, GeoPoint, Heading, Preference, TurnConvention};

#[derive(Parser)]
#[command(name = "qibla")]
#[command(about = "Find the great-circle direction towards the Kaaba", long_about = None)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Compass heading(s) to evaluate, in degrees clockwise from north
    #[arg(long = "heading", allow_hyphen_values = true)]
    headings: Vec<Heading>,

    /// Alignment tolerance in degrees (overrides QIBLA_TOLERANCE)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Turn convention, clockwise or counter-clockwise (overrides QIBLA_TURN_CONVENTION)
    #[arg(long)]
    convention: Option<TurnConvention>,
}

fn main() {
    // A missing `.env` file is fine; only the environment is consulted then.
    let _ = dotenv();

    init_logging();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_logging() {
    if let Err(e) = qibla::util::trace::initialize_tracer() {
        eprintln!("Error initialising tracer: {}", e);
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging() {
    env_logger::init();
}

fn run(args: Args) -> Result<(), qibla::Error> {
    let mut config = FinderConfig::from_env()?;

    if let Some(tolerance) = args.tolerance {
        config.set(Preference::Tolerance, &tolerance.to_string())?;
    }

    if let Some(convention) = args.convention {
        config.set(Preference::TurnConvention, &convention.to_string())?;
    }

    debug!("Resolved configuration: {:?}", config);

    let origin = GeoPoint::new(args.lat, args.lng)?;
    let mut finder = Finder::new(config);
    let fix = *finder.locate(&mut FixedLocation(origin))?;

    println!("Location:  {}", fix.origin);
    println!("Bearing:   {}", fix.bearing);
    println!("Distance:  {:.0} km", fix.distance_km);
    println!(
        "Indicator: {} ({} km)",
        fix.indicator,
        finder.config().indicator_km()
    );

    if args.headings.is_empty() {
        return Ok(());
    }

    println!();
    let now = Instant::now();
    for heading in args.headings {
        let sample = OrientationSample::absolute(heading.degrees());
        let Some(guidance) = finder.on_orientation(sample, now) else {
            warn!("No guidance for heading {}", heading);
            continue;
        };

        let state = guidance.state;
        if state.aligned {
            println!(
                "{:>6} aligned (off by {:.1}°)",
                guidance.heading.to_string(),
                state.minimal
            );
        } else {
            println!(
                "{:>6} turn {} by {:.1}°",
                guidance.heading.to_string(),
                state.turn,
                state.minimal
            );
        }
    }

    Ok(())
}
