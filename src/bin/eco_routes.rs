use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;
use time::macros::format_description;

use ecoflight::{load_routes, search};

/// Lists eco-friendly flight options between two places
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Departure city or airport
    #[arg(short, long)]
    from: String,
    /// Destination city or airport
    #[arg(short, long)]
    to: String,
    /// Travel date in format `yyyy-mm-dd`
    #[arg(short, long)]
    date: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let from = cli.from.trim();
    let to = cli.to.trim();
    if from.is_empty() || to.is_empty() {
        eprintln!("Please enter both departure and destination");
        std::process::exit(1);
    }

    let date = cli
        .date
        .map(|date| time::Date::parse(&date, format_description!("[year]-[month]-[day]")))
        .transpose()?;

    let table = load_routes()?;
    let results = search(from, to, date, &table).await?;

    println!(
        "Eco-Friendly Options from {} to {}",
        results.departure, results.destination
    );
    if let Some(date) = &results.travel_date {
        println!("{date}");
    }
    println!("Route distance: ~{} km", results.distance_km);
    println!();

    for option in &results.options {
        println!(
            "{} {} | {} -> {} ({}) | {} | {} | {} | {}",
            option.airline,
            option.flight_no,
            option.departure,
            option.arrival,
            option.duration,
            option.aircraft,
            option.stops,
            option.emissions,
            option.price
        );
    }

    Ok(())
}
