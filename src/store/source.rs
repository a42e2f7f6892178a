// src/store/source.rs

//! Where the recipe dataset comes from

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

/// Location of a recipe dataset
///
/// `http://` and `https://` strings are fetched over the network, `file://`
/// URLs and bare strings are read from the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote JSON document
    Url(Url),
    /// Local JSON file
    Path(PathBuf),
}

impl DataSource {
    /// Parse a configured source string
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ConfigError("Data source cannot be empty".to_string()));
        }

        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s)
                .map_err(|e| Error::ConfigError(format!("Invalid data source URL '{}': {}", s, e)))?;
            return Ok(Self::Url(url));
        }

        if s.starts_with("file://") {
            let url = Url::parse(s)
                .map_err(|e| Error::ConfigError(format!("Invalid data source URL '{}': {}", s, e)))?;
            let path = url
                .to_file_path()
                .map_err(|()| Error::ConfigError(format!("Not a local file URL: {}", s)))?;
            return Ok(Self::Path(path));
        }

        Ok(Self::Path(PathBuf::from(s)))
    }

    /// Local path, if this source is a file
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            Self::Url(_) => None,
        }
    }

    /// Whether loading this source needs the network
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl FromStr for DataSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
