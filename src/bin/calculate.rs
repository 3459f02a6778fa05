use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;
use tinytemplate::TinyTemplate;

use ecoflight::*;

static TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/bin/calculate_template.md"
));
static TEMPLATE_NAME: &'static str = "t";

/// Estimates the CO₂e emissions of a flight between two airports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// IATA code of the departure airport
    #[arg(short, long)]
    departure: String,
    /// IATA code of the arrival airport
    #[arg(short, long)]
    arrival: String,
    /// Cabin class (economy, premium, business or first)
    #[arg(short, long, default_value = "economy")]
    class: String,
    /// Number of passengers
    #[arg(short, long, default_value = "1")]
    passengers: String,
}

#[derive(::serde::Serialize)]
struct Context {
    summary: Summary,
    passengers_word: &'static str,
    offset_cost: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let request =
        match CalculationRequest::parse(&cli.departure, &cli.arrival, &cli.class, &cli.passengers)
        {
            Ok(request) => request,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        };

    let table = load_routes()?;
    let distance = table.resolve(&request.departure, &request.arrival).await?;

    let factors = EmissionFactors::default();
    let comparison_factors = ComparisonFactors::default();
    let summary = summarize(
        distance,
        request.class,
        request.passengers,
        &factors,
        &comparison_factors,
    );

    let total = estimate_co2e(distance, request.class, request.passengers, &factors);
    let context = Context {
        passengers_word: if request.passengers > 1 {
            "passengers"
        } else {
            "passenger"
        },
        offset_cost: format_cost(offset_cost(total, &OffsetPricing::default())),
        summary,
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    println!("{}", tt.render(TEMPLATE_NAME, &context)?);

    Ok(())
}
