use std::error::Error;
use std::io::BufRead;

use clap::Parser;
use simple_logger::SimpleLogger;

use ecoflight::{format_cost, offset_cost, OffsetPricing};

/// Prices a carbon offset purchase
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount of CO₂e to offset, in kg. When absent, amounts are read from
    /// stdin and the cost is recomputed for every line.
    #[arg(short, long)]
    kg: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();
    let pricing = OffsetPricing::default();

    match cli.kg {
        Some(kg) => println!("${}", format_cost(offset_cost(kg, &pricing))),
        None => {
            // unparseable input prices as zero, as an empty amount field would
            for line in std::io::stdin().lock().lines() {
                let amount: f64 = line?.trim().parse().unwrap_or(0.0);
                println!("${}", format_cost(offset_cost(amount, &pricing)));
            }
        }
    }

    Ok(())
}
