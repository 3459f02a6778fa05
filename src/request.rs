use std::fmt;

use crate::emissions::CabinClass;

/// A validated calculation request, ready for the resolver and estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationRequest {
    pub departure: String,
    pub arrival: String,
    pub class: CabinClass,
    pub passengers: u32,
}

/// A rejected form submission. Each variant carries the single user-visible
/// message shown for that failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    MissingAirport,
    SameAirport,
    InvalidPassengers,
}

impl std::error::Error for RequestError {}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingAirport => "Please enter both departure and arrival airports",
            Self::SameAirport => "Departure and arrival airports cannot be the same",
            Self::InvalidPassengers => "Please enter a valid number of passengers",
        };
        f.write_str(message)
    }
}

impl CalculationRequest {
    /// Validates and normalizes raw form values. Airport codes are trimmed
    /// and uppercased; both are required and must differ. Passengers must
    /// parse as a positive integer. The cabin class never fails: an
    /// unrecognized identifier falls back to economy.
    pub fn parse(
        departure: &str,
        arrival: &str,
        class: &str,
        passengers: &str,
    ) -> Result<Self, RequestError> {
        let departure = departure.trim().to_uppercase();
        let arrival = arrival.trim().to_uppercase();

        if departure.is_empty() || arrival.is_empty() {
            return Err(RequestError::MissingAirport);
        }
        if departure == arrival {
            return Err(RequestError::SameAirport);
        }

        let passengers: u32 = passengers
            .trim()
            .parse()
            .map_err(|_| RequestError::InvalidPassengers)?;
        if passengers < 1 {
            return Err(RequestError::InvalidPassengers);
        }

        Ok(CalculationRequest {
            departure,
            arrival,
            class: CabinClass::parse(class),
            passengers,
        })
    }
}
