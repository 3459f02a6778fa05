use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Key under which the dark-mode preference is persisted.
pub const THEME_KEY: &str = "darkMode";

/// An object that can durably get and put preference values.
#[async_trait]
pub trait PreferenceStore {
    type Error: std::error::Error + Send;
    async fn maybe_get(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;
    async fn put(&self, key: &str, contents: Vec<u8>) -> Result<(), Self::Error>;
}

/// A [`PreferenceStore`] backed by one file per key under a root directory
pub struct LocalDisk {
    root: std::path::PathBuf,
}

impl LocalDisk {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        LocalDisk { root: root.into() }
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl PreferenceStore for LocalDisk {
    type Error = std::io::Error;

    async fn maybe_get(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        let path = self.path(key);
        if path.try_exists()? {
            Ok(Some(std::fs::read(path)?))
        } else {
            Ok(None)
        }
    }

    async fn put(&self, key: &str, contents: Vec<u8>) -> Result<(), Self::Error> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path(key), contents)?;
        Ok(())
    }
}

/// Visual mode of the site. `Light` unless the user opted into dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug)]
pub enum Error<E: std::error::Error + Send> {
    /// An error originating from the backing store
    Store(E),
    /// The persisted value is not a boolean
    Decode(serde_json::Error),
}

impl<E: std::error::Error + Send> std::error::Error for Error<E> {}

impl<E: std::error::Error + Send> std::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(e) => std::fmt::Display::fmt(&e, f),
            Self::Decode(e) => std::fmt::Display::fmt(&e, f),
        }
    }
}

/// Reads the persisted theme; performed once at startup.
/// A missing value is the light default.
pub async fn load_theme<P: PreferenceStore>(store: &P) -> Result<Theme, Error<P::Error>> {
    match store.maybe_get(THEME_KEY).await.map_err(Error::Store)? {
        Some(data) => {
            let dark: bool = serde_json::from_slice(&data).map_err(Error::Decode)?;
            Ok(Theme::from_dark(dark))
        }
        None => Ok(Theme::default()),
    }
}

/// Persists the theme as a boolean under [`THEME_KEY`]; called on every toggle.
pub async fn save_theme<P: PreferenceStore>(
    store: &P,
    theme: Theme,
) -> Result<(), Error<P::Error>> {
    let data = serde_json::to_vec(&theme.dark()).map_err(Error::Decode)?;
    store.put(THEME_KEY, data).await.map_err(Error::Store)
}
