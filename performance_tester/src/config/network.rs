//!
//! The performance tester network configuration.
//!

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Error;

///
/// The performance tester network configuration.
///
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Network {
    /// The RPC endpoint. May contain `${VARIABLE}` placeholders resolved from the environment.
    pub rpc: Option<String>,
    /// The deployed contract addresses, keyed by the contract name.
    #[serde(default)]
    pub contracts: BTreeMap<String, String>,
    /// The constructor arguments used when contracts are deployed by the tester.
    #[serde(default)]
    pub arguments: BTreeMap<String, Vec<String>>,
}

impl Network {
    ///
    /// Returns the RPC endpoint with the environment placeholders resolved.
    ///
    pub fn rpc_url(&self) -> Result<Option<String>, Error> {
        let rpc = match self.rpc {
            Some(ref rpc) => rpc,
            None => return Ok(None),
        };
        crate::utils::substitute(rpc.as_str(), |name| std::env::var(name).ok())
            .map(Some)
            .map_err(|error| Error::configuration(format!("RPC endpoint: {error}")))
    }

    ///
    /// Returns the deployed address of the specified contract.
    ///
    pub fn contract_address(&self, contract: &str) -> Result<web3::types::Address, Error> {
        let address = self.contracts.get(contract).ok_or_else(|| {
            Error::configuration(format!("address of contract `{contract}` is missing"))
        })?;
        crate::utils::parse_address(address.as_str()).map_err(|error| {
            Error::configuration(format!("address of contract `{contract}`: {error}"))
        })
    }

    ///
    /// Returns the constructor arguments of the specified contract.
    ///
    pub fn constructor_arguments(&self, contract: &str) -> &[String] {
        self.arguments
            .get(contract)
            .map(|arguments| arguments.as_slice())
            .unwrap_or_default()
    }
}
