//!
//! Represents a single results file in a set of many.
//!

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

///
/// Represents a single results file in a set of many.
///
#[derive(Debug, Clone)]
pub struct File {
    /// Path to this file relative to the run directory.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
}

impl File {
    ///
    /// Serializes the map into a file named `<prefix>-<timestamp>.json`.
    ///
    pub fn new<T>(prefix: &str, timestamp: i64, map: &BTreeMap<String, T>) -> anyhow::Result<Self>
    where
        T: Serialize,
    {
        let path = PathBuf::from(format!("{prefix}-{timestamp}.json"));
        let contents = serde_json::to_string(&Contents { map })
            .map_err(|error| anyhow::anyhow!("Results file {path:?} serializing: {error}"))?;
        Ok(Self { path, contents })
    }
}

///
/// The results file contents.
///
#[derive(Debug, Serialize, Deserialize)]
pub struct Contents<M> {
    /// The operation name or receipt hash mapping.
    pub map: M,
}
