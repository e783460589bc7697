//!
//! The performance tester configuration file.
//!

pub mod network;
pub mod owner;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

use self::network::Network;
use self::owner::Owner;

///
/// The performance tester configuration file.
///
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    /// The networks, keyed by the target name.
    #[serde(default)]
    pub networks: BTreeMap<String, Network>,
    /// The account owner role, which provides callers on remote networks.
    pub owner: Option<Owner>,
}

impl Config {
    ///
    /// Returns the network entry of the specified target.
    ///
    pub fn network(&self, name: &str) -> Result<&Network, Error> {
        self.networks.get(name).ok_or_else(|| {
            Error::configuration(format!(
                "network `{name}` is not configured. Configured networks: {}",
                self.networks
                    .keys()
                    .map(|name| name.as_str())
                    .collect::<Vec<&str>>()
                    .join(", ")
            ))
        })
    }

    ///
    /// Returns the owner accounts in the configured order.
    ///
    pub fn owner_accounts(&self) -> Result<Vec<web3::types::Address>, Error> {
        self.owner
            .as_ref()
            .ok_or_else(|| Error::configuration("the `owner` section is missing"))?
            .accounts()
    }
}

impl TryFrom<&Path> for Config {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path)
            .map_err(|error| Error::configuration(format!("file {path:?} opening: {error}")))?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .map_err(|error| Error::configuration(format!("file {path:?} parsing: {error}")))?;
        Ok(config)
    }
}

impl std::str::FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(string)
            .map_err(|error| Error::configuration(format!("parsing: {error}")).into())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Config;
    use crate::error::Error;

    const CONFIG: &str = r#"{
        "networks": {
            "goerli": {
                "rpc": "https://goerli.example/${PERFORMANCE_TESTER_UNSET_VARIABLE}",
                "contracts": {
                    "Swap": "0x1111111111111111111111111111111111111111"
                }
            },
            "development": {
                "arguments": { "Swap": ["${sBNB}", "${sTSLA}"] }
            }
        },
        "owner": {
            "accounts": "0x2222222222222222222222222222222222222222, 0x3333333333333333333333333333333333333333"
        }
    }"#;

    #[test]
    fn parse() {
        let config = Config::from_str(CONFIG).expect("Always valid");
        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.owner_accounts().expect("Always valid").len(), 2);
        assert_eq!(
            config
                .network("development")
                .expect("Always exists")
                .arguments
                .get("Swap")
                .map(|arguments| arguments.len()),
            Some(2)
        );
    }

    #[test]
    fn missing_network() {
        let config = Config::from_str(CONFIG).expect("Always valid");
        let error = config.network("mainnet").expect_err("Must be missing");
        assert!(matches!(error, Error::Configuration(_)));
        assert!(error.to_string().contains("goerli"));
    }

    #[test]
    fn missing_owner() {
        let config = Config::from_str(r#"{ "networks": {} }"#).expect("Always valid");
        assert!(matches!(
            config.owner_accounts(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn malformed() {
        let error = Config::from_str("{ networks").expect_err("Must be malformed");
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Configuration(_))
        ));
    }
}
