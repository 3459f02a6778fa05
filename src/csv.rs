use std::{collections::HashMap, error::Error, hash::Hash};

use serde::de::DeserializeOwned;

/// Loads a CSV from disk into a HashMap keyed by `key` applied to each record
/// # Error
/// Errors if the file cannot be read or a record does not deserialize
pub(crate) fn load<H, D, V, K>(path: &str, key: K) -> Result<HashMap<H, V>, Box<dyn Error>>
where
    H: Hash + Eq,
    D: DeserializeOwned,
    K: Fn(D) -> (H, V),
{
    let data = std::fs::read(path)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(std::io::Cursor::new(data));
    rdr.deserialize::<D>()
        .map(|r| r.map(&key).map_err(Into::into))
        .collect()
}

/// Loads a CSV from disk into a Vec, preserving record order
/// # Error
/// Errors if the file cannot be read or a record does not deserialize
pub(crate) fn load_list<D: DeserializeOwned>(path: &str) -> Result<Vec<D>, Box<dyn Error>> {
    let data = std::fs::read(path)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(std::io::Cursor::new(data));
    rdr.deserialize::<D>()
        .map(|r| r.map_err(Into::into))
        .collect()
}
