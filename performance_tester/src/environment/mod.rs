//!
//! The environment the plan is executed in.
//!

pub mod deployer;
pub mod instance;
pub mod target;

use std::collections::BTreeMap;

use colored::Colorize;

use crate::artifact::Artifacts;
use crate::config::Config;
use crate::error::Error;

use self::deployer::Deployer;
use self::instance::Instance;
use self::target::Target;

///
/// The environment the plan is executed in.
///
/// Resolved once per run and never modified afterwards.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// The target the environment was resolved for.
    pub target: Target,
    /// The caller accounts, in the configured order.
    pub accounts: Vec<web3::types::Address>,
    /// The contract instances, keyed by the contract name.
    pub instances: BTreeMap<String, Instance>,
}

impl Environment {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        target: Target,
        accounts: Vec<web3::types::Address>,
        instances: BTreeMap<String, Instance>,
    ) -> Self {
        Self {
            target,
            accounts,
            instances,
        }
    }

    ///
    /// Resolves the environment of `target` for the specified `contracts`.
    ///
    /// The development target deploys every contract anew, whereas named networks
    /// bind the addresses from the config without touching the node.
    ///
    pub async fn resolve<D>(
        target: &Target,
        config: &Config,
        artifacts: &Artifacts,
        contracts: &[String],
        deployer: &D,
        quiet: bool,
    ) -> anyhow::Result<Self>
    where
        D: Deployer,
    {
        match target {
            Target::Development => {
                Self::resolve_local(config, artifacts, contracts, deployer, quiet).await
            }
            Target::Network(name) => Ok(Self::resolve_network(
                name.as_str(),
                config,
                artifacts,
                contracts,
            )?),
        }
    }

    ///
    /// Deploys the contracts to the development node in the specified order.
    ///
    /// A `${Contract}` constructor argument is replaced with the address of an
    /// already deployed contract.
    ///
    pub async fn resolve_local<D>(
        config: &Config,
        artifacts: &Artifacts,
        contracts: &[String],
        deployer: &D,
        quiet: bool,
    ) -> anyhow::Result<Self>
    where
        D: Deployer,
    {
        let accounts = deployer
            .accounts()
            .await
            .map_err(|error| anyhow::anyhow!("Development accounts requesting: {error}"))?;
        let caller = accounts
            .first()
            .copied()
            .ok_or_else(|| Error::configuration("the development node has no accounts"))?;
        let network = config
            .networks
            .get(Target::DEVELOPMENT)
            .cloned()
            .unwrap_or_default();

        let mut instances: BTreeMap<String, Instance> = BTreeMap::new();
        for contract in contracts.iter() {
            let artifact = artifacts.load(contract.as_str())?;
            let arguments = network
                .constructor_arguments(contract.as_str())
                .iter()
                .map(|argument| {
                    crate::utils::substitute(argument.as_str(), |name| {
                        instances
                            .get(name)
                            .map(|instance| crate::utils::address_as_string(&instance.address))
                    })
                    .map_err(|error| {
                        Error::configuration(format!(
                            "constructor argument of contract `{contract}`: {error}"
                        ))
                    })
                })
                .collect::<Result<Vec<String>, Error>>()?;

            let address = deployer
                .deploy(&artifact, arguments.as_slice(), caller)
                .await
                .map_err(|error| anyhow::anyhow!("Contract `{contract}` deploying: {error}"))?;
            if !quiet {
                println!(
                    "   {} contract `{}` at {}",
                    "Deploying".bright_green().bold(),
                    contract,
                    crate::utils::address_as_string(&address),
                );
            }

            instances.insert(
                contract.to_owned(),
                Instance::new(contract.to_owned(), address, artifact.abi),
            );
        }

        Ok(Self::new(Target::Development, accounts, instances))
    }

    ///
    /// Binds the contracts of the named network to their configured addresses.
    ///
    pub fn resolve_network(
        name: &str,
        config: &Config,
        artifacts: &Artifacts,
        contracts: &[String],
    ) -> Result<Self, Error> {
        let network = config.network(name)?;
        let accounts = config.owner_accounts()?;

        let mut instances = BTreeMap::new();
        for contract in contracts.iter() {
            let address = network.contract_address(contract.as_str())?;
            let artifact = artifacts.load(contract.as_str())?;
            instances.insert(
                contract.to_owned(),
                Instance::new(contract.to_owned(), address, artifact.abi),
            );
        }

        Ok(Self::new(
            Target::Network(name.to_owned()),
            accounts,
            instances,
        ))
    }

    ///
    /// Returns the instance of the specified contract.
    ///
    pub fn instance(&self, name: &str) -> Result<&Instance, Error> {
        self.instances.get(name).ok_or_else(|| {
            Error::configuration(format!(
                "contract `{name}` is not resolved on `{}`",
                self.target
            ))
        })
    }

    ///
    /// Returns the account with the specified index.
    ///
    pub fn account(&self, index: usize) -> Result<web3::types::Address, Error> {
        self.accounts.get(index).copied().ok_or_else(|| {
            Error::configuration(format!(
                "account #{index} is not available on `{}`: only {} accounts are configured",
                self.target,
                self.accounts.len()
            ))
        })
    }

    ///
    /// Returns the caller used by steps that do not specify one.
    ///
    pub fn default_caller(&self) -> Option<web3::types::Address> {
        self.accounts.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::artifact::Artifacts;
    use crate::config::Config;
    use crate::error::Error;

    use super::target::Target;
    use super::Environment;

    const CONFIG: &str = r#"{
        "networks": {
            "goerli": {
                "contracts": {
                    "sBNB": "0x1111111111111111111111111111111111111111",
                    "Swap": "0x2222222222222222222222222222222222222222"
                }
            },
            "partial": {
                "contracts": {
                    "Swap": "0x2222222222222222222222222222222222222222"
                }
            }
        },
        "owner": {
            "accounts": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa, 0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
        }
    }"#;

    fn artifacts(directory: &std::path::Path) -> Artifacts {
        for name in ["sBNB", "Swap"] {
            std::fs::write(
                directory.join(format!("{name}.json")),
                format!(r#"{{ "contractName": "{name}", "abi": [], "bytecode": "0x00" }}"#),
            )
            .expect("Artifact writing failed");
        }
        Artifacts::new(directory.to_path_buf())
    }

    fn contracts() -> Vec<String> {
        vec!["sBNB".to_owned(), "Swap".to_owned()]
    }

    #[test]
    fn resolve_network() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = Config::from_str(CONFIG).expect("Always valid");

        let environment = Environment::resolve_network(
            "goerli",
            &config,
            &artifacts(directory.path()),
            contracts().as_slice(),
        )
        .expect("Resolution failed");

        assert_eq!(environment.target, Target::Network("goerli".to_owned()));
        assert_eq!(
            environment.accounts,
            vec![
                web3::types::Address::repeat_byte(0xaa),
                web3::types::Address::repeat_byte(0xbb)
            ]
        );
        assert_eq!(
            environment.instance("Swap").expect("Always exists").address,
            web3::types::Address::repeat_byte(0x22)
        );
        assert_eq!(
            environment.default_caller(),
            Some(web3::types::Address::repeat_byte(0xaa))
        );
    }

    #[test]
    fn resolve_network_idempotent() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = Config::from_str(CONFIG).expect("Always valid");
        let artifacts = artifacts(directory.path());

        let first =
            Environment::resolve_network("goerli", &config, &artifacts, contracts().as_slice())
                .expect("Resolution failed");
        let second =
            Environment::resolve_network("goerli", &config, &artifacts, contracts().as_slice())
                .expect("Resolution failed");

        assert_eq!(first, second);
    }

    #[test]
    fn resolve_network_missing_address() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = Config::from_str(CONFIG).expect("Always valid");

        let error = Environment::resolve_network(
            "partial",
            &config,
            &artifacts(directory.path()),
            contracts().as_slice(),
        )
        .expect_err("Must fail");
        assert!(matches!(error, Error::Configuration(_)));
        assert!(error.to_string().contains("sBNB"));
    }

    #[test]
    fn resolve_network_missing_entry() {
        let directory = tempfile::tempdir().expect("Temporary directory creation failed");
        let config = Config::from_str(CONFIG).expect("Always valid");

        assert!(matches!(
            Environment::resolve_network(
                "mainnet",
                &config,
                &artifacts(directory.path()),
                contracts().as_slice(),
            ),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn account_out_of_range() {
        let environment = Environment::new(
            Target::Development,
            vec![web3::types::Address::zero()],
            Default::default(),
        );
        assert!(environment.account(0).is_ok());
        assert!(matches!(
            environment.account(1),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            environment.instance("Swap"),
            Err(Error::Configuration(_))
        ));
    }
}
