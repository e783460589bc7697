//!
//! The contract build artifact.
//!

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Error;

///
/// The contract build artifact.
///
/// Only the fields required to deploy and call the contract are read.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The contract name.
    pub contract_name: String,
    /// The contract ABI.
    pub abi: web3::ethabi::Contract,
    /// The hexadecimal deploy bytecode.
    #[serde(default)]
    pub bytecode: String,
}

impl Artifact {
    ///
    /// Returns the decoded deploy bytecode.
    ///
    pub fn bytecode(&self) -> anyhow::Result<Vec<u8>> {
        let bytecode = self.bytecode.trim();
        let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);
        if bytecode.is_empty() {
            anyhow::bail!("Contract `{}` has no deploy bytecode", self.contract_name);
        }
        hex::decode(bytecode).map_err(|error| {
            anyhow::anyhow!(
                "Contract `{}` bytecode decoding: {error}",
                self.contract_name
            )
        })
    }
}

///
/// The directory containing one `<Contract>.json` artifact per contract.
///
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// The artifacts directory.
    directory: PathBuf,
}

impl Artifacts {
    /// The artifact file extension.
    pub const EXTENSION: &'static str = "json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    ///
    /// Returns the artifacts directory.
    ///
    pub fn directory(&self) -> &Path {
        self.directory.as_path()
    }

    ///
    /// Loads the artifact of the specified contract.
    ///
    pub fn load(&self, contract: &str) -> Result<Artifact, Error> {
        let mut path = self.directory.join(contract);
        path.set_extension(Self::EXTENSION);

        let text = std::fs::read_to_string(path.as_path()).map_err(|error| {
            Error::configuration(format!("artifact {path:?} reading: {error}"))
        })?;
        let artifact: Artifact = serde_json::from_str(text.as_str()).map_err(|error| {
            Error::configuration(format!("artifact {path:?} parsing: {error}"))
        })?;
        Ok(artifact)
    }
}
