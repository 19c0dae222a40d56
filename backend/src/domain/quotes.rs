//! The motivational quote source.
//!
//! Quotes are read once at startup from a JSON array of strings and kept in
//! an immutable [`QuoteBook`] for the life of the process.

use rand::seq::IndexedRandom;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read quotes file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("quotes file {} is not a JSON array of strings: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no quotes available")]
    NoQuotes,
}

/// Pick one quote uniformly at random
pub fn pick_quote(quotes: &[String]) -> Result<&str, ConfigError> {
    quotes
        .choose(&mut rand::rng())
        .map(String::as_str)
        .ok_or(ConfigError::NoQuotes)
}

/// Non-empty, read-only list of quotes
#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<String>,
}

impl QuoteBook {
    /// Build from in-memory quotes. Blank entries are dropped; nothing left is an error.
    pub fn new<I, S>(quotes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let quotes: Vec<String> = quotes
            .into_iter()
            .map(Into::into)
            .filter(|q| !q.trim().is_empty())
            .collect();

        if quotes.is_empty() {
            return Err(ConfigError::NoQuotes);
        }
        Ok(Self { quotes })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let quotes: Vec<String> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let book = Self::new(quotes)?;
        info!("Loaded {} quotes from {}", book.len(), path.display());
        Ok(book)
    }

    pub fn random_quote(&self) -> &str {
        // Construction guarantees at least one quote
        pick_quote(&self.quotes).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
