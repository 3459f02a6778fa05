#![forbid(unsafe_code)]
mod comparisons;
mod csv;
mod emissions;
mod finder;
mod offset;
mod request;
mod routes;
mod settings;
mod summary;

pub use comparisons::*;
pub use emissions::*;
pub use finder::*;
pub use offset::*;
pub use request::*;
pub use routes::*;
pub use settings::{load_theme, save_theme, LocalDisk, PreferenceStore, Theme, THEME_KEY};
pub use summary::*;
