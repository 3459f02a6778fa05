use std::collections::HashMap;
use std::convert::Infallible;
use std::error::Error;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};

/// Distance in km returned for ordered pairs absent from the route table.
/// An average medium-haul flight; the table deliberately has no geodesic
/// fallback for unknown pairs.
pub const DEFAULT_DISTANCE_KM: f64 = 2500.0;

/// One direction of a known route, as stored in `src/routes.csv`.
#[derive(Debug, serde::Deserialize, Clone)]
pub struct Route {
    /// IATA code of the departure airport (e.g. `LHR`)
    pub departure: String,
    /// IATA code of the arrival airport (e.g. `JFK`)
    pub arrival: String,
    pub distance_km: f64,
}

/// Known distances keyed by `"FROM-TO"`. Both directions of a route are
/// stored as separate entries; symmetry is a convention of the data, not
/// enforced here.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, f64>,
}

impl RouteTable {
    /// Returns the distance in km of flying `departure` -> `arrival`.
    /// Codes must be uppercased by the caller. Unknown pairs resolve to
    /// [`DEFAULT_DISTANCE_KM`]; this operation is total.
    pub fn distance(&self, departure: &str, arrival: &str) -> f64 {
        let key = format!("{departure}-{arrival}");
        match self.routes.get(&key) {
            Some(distance) => {
                log::info!("{key} - route hit");
                *distance
            }
            None => {
                log::info!("{key} - route miss, default distance");
                DEFAULT_DISTANCE_KM
            }
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        RouteTable {
            routes: iter
                .into_iter()
                .map(|r| (format!("{}-{}", r.departure, r.arrival), r.distance_km))
                .collect(),
        }
    }
}

/// Loads known routes from `src/routes.csv` into memory as a map `"FROM-TO": km`.
/// # Error
/// Errors if the file cannot be read
pub fn load_routes() -> Result<RouteTable, Box<dyn Error>> {
    let routes = super::csv::load("src/routes.csv", |r: Route| {
        (format!("{}-{}", r.departure, r.arrival), r.distance_km)
    })?;
    Ok(RouteTable { routes })
}

/// An object that can resolve the flown distance of an ordered pair of
/// airport codes. The contract is asynchronous so that a network-backed
/// lookup service can be substituted for the in-memory table without
/// changing callers.
#[async_trait]
pub trait DistanceProvider {
    type Error: std::error::Error + Send;
    async fn resolve(&self, departure: &str, arrival: &str) -> Result<f64, Self::Error>;
}

#[async_trait]
impl DistanceProvider for RouteTable {
    type Error = Infallible;

    async fn resolve(&self, departure: &str, arrival: &str) -> Result<f64, Self::Error> {
        Ok(self.distance(departure, arrival))
    }
}

/// Resolves every ordered pair in `pairs` against `provider`, preserving
/// input order. Requests are independent; none is deduplicated or cancelled.
pub async fn resolve_all<P: DistanceProvider + Sync>(
    pairs: &[(String, String)],
    provider: &P,
) -> Result<Vec<f64>, P::Error> {
    let tasks = pairs
        .iter()
        .map(|(departure, arrival)| provider.resolve(departure, arrival));

    futures::stream::iter(tasks)
        // limit concurrent requests against a future remote provider
        .buffered(5)
        .try_collect()
        .await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_pairs_resolve_exactly() {
        let table = load_routes().unwrap();
        assert_eq!(table.distance("LHR", "JFK"), 5550.0);
        assert_eq!(table.distance("JFK", "LHR"), 5550.0);
        assert_eq!(table.distance("SYD", "MEL"), 705.0);
    }

    #[test]
    fn unknown_pair_resolves_to_default() {
        let table = load_routes().unwrap();
        assert_eq!(table.distance("AAA", "ZZZ"), DEFAULT_DISTANCE_KM);
    }

    #[test]
    fn table_has_both_directions() {
        let table = load_routes().unwrap();
        assert_eq!(table.len(), 10);
    }
}
