//!
//! The owner role configuration.
//!

use serde::Deserialize;

use crate::error::Error;

///
/// The owner role configuration.
///
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Owner {
    /// The comma-separated list of owner accounts.
    pub accounts: String,
}

impl Owner {
    /// The account list delimiter.
    pub const DELIMITER: char = ',';

    ///
    /// Splits the account list, preserving the order.
    ///
    pub fn accounts(&self) -> Result<Vec<web3::types::Address>, Error> {
        self.accounts
            .split(Self::DELIMITER)
            .map(str::trim)
            .filter(|account| !account.is_empty())
            .enumerate()
            .map(|(index, account)| {
                crate::utils::parse_address(account).map_err(|error| {
                    Error::configuration(format!("owner account #{index}: {error}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Owner;

    #[test]
    fn ordered() {
        let owner = Owner {
            accounts: "0x3333333333333333333333333333333333333333, 0x1111111111111111111111111111111111111111,0x2222222222222222222222222222222222222222".to_owned(),
        };
        let accounts = owner.accounts().expect("Always valid");
        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0], web3::types::Address::repeat_byte(0x33));
        assert_eq!(accounts[1], web3::types::Address::repeat_byte(0x11));
        assert_eq!(accounts[2], web3::types::Address::repeat_byte(0x22));
    }

    #[test]
    fn empty() {
        let owner = Owner::default();
        assert!(owner.accounts().expect("Always valid").is_empty());
    }

    #[test]
    fn invalid() {
        let owner = Owner {
            accounts: "0x1111111111111111111111111111111111111111, 0xdead".to_owned(),
        };
        assert!(owner.accounts().is_err());
    }
}
