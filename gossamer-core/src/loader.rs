// Loading serialized internets from disk

use gossamer_crawler::{Internet, Page};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// On-disk document shape: a flat list of pages.
#[derive(Debug, Deserialize)]
struct InternetFile {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read internet file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse internet description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate page address in input: {0}")]
    DuplicateAddress(String),
}

/// Parse an internet description from JSON text. The first page in the
/// document becomes the default crawl entry; a document without a `pages`
/// field parses as an empty internet.
pub fn parse_internet(json: &str) -> Result<Internet, LoadError> {
    let document: InternetFile = serde_json::from_str(json)?;

    let mut internet = Internet::new();
    for page in document.pages {
        let address = page.address.clone();
        if !internet.insert(page) {
            return Err(LoadError::DuplicateAddress(address));
        }
    }
    Ok(internet)
}

/// Read and parse an internet description file.
pub fn load_internet(path: &Path) -> Result<Internet, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_internet(&json)
}
