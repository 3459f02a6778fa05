use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::routes::{DistanceProvider, RouteTable};

/// One flight option of the eco-route catalog, as stored in
/// `src/eco_routes.csv`. Fixed literal data, rendered as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOption {
    pub airline: String,
    pub flight_no: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub aircraft: String,
    pub stops: String,
    pub emissions: String,
    pub price: String,
}

/// Loads the eco-route catalog from `src/eco_routes.csv`, in catalog order.
/// # Error
/// Errors if the file cannot be read
pub fn load_route_options() -> Result<Vec<RouteOption>, Box<dyn Error>> {
    crate::csv::load_list("src/eco_routes.csv")
}

/// The results of one eco-route search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub departure: String,
    pub destination: String,
    /// long-form travel date, when one was supplied
    pub travel_date: Option<String>,
    /// distance of the searched pair according to the route table
    pub distance_km: i64,
    pub options: Vec<RouteOption>,
}

/// Searches eco-friendly options for flying `departure` -> `destination`.
/// The catalog itself is fixed; only the header data depends on the query.
pub async fn search(
    departure: &str,
    destination: &str,
    travel_date: Option<time::Date>,
    table: &RouteTable,
) -> Result<SearchResults, Box<dyn Error>> {
    let distance = table.resolve(departure, destination).await?;
    let travel_date = travel_date.map(format_travel_date).transpose()?;

    Ok(SearchResults {
        departure: departure.to_string(),
        destination: destination.to_string(),
        travel_date,
        distance_km: distance.round() as i64,
        options: load_route_options()?,
    })
}

/// Formats a travel date in long form, e.g. `Monday, June 1, 2026`.
pub fn format_travel_date(date: time::Date) -> Result<String, Box<dyn Error>> {
    let format = time::format_description::parse(
        "[weekday repr:long], [month repr:long] [day padding:none], [year]",
    )?;
    Ok(date.format(&format)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::load_routes;
    use time::macros::date;

    #[test]
    fn catalog_order_is_preserved() {
        let options = load_route_options().unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].airline, "EcoAir");
        assert_eq!(options[1].flight_no, "GW 456");
        assert_eq!(options[2].stops, "1 stop (DXB)");
    }

    #[test]
    fn travel_dates_render_long_form() {
        assert_eq!(
            format_travel_date(date!(2026 - 06 - 01)).unwrap(),
            "Monday, June 1, 2026"
        );
    }

    #[tokio::test]
    async fn search_annotates_the_query() {
        let table = load_routes().unwrap();
        let results = search("SFO", "DXB", Some(date!(2026 - 06 - 01)), &table)
            .await
            .unwrap();

        assert_eq!(results.distance_km, 13000);
        assert_eq!(results.travel_date.as_deref(), Some("Monday, June 1, 2026"));
        assert_eq!(results.options.len(), 3);
    }
}
