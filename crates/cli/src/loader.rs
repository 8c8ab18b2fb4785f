//! JSON input loading.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use theater_billing::{Invoice, PlayCatalog, PricingConfig};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_invoice(path: &Path) -> Result<Invoice, LoadError> {
    load_json(path)
}

pub fn load_catalog(path: &Path) -> Result<PlayCatalog, LoadError> {
    load_json(path)
}

pub fn load_pricing(path: &Path) -> Result<PricingConfig, LoadError> {
    load_json(path)
}
