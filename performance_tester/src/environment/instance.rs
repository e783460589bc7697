//!
//! The contract instance bound to an address.
//!

use std::sync::Arc;

///
/// The contract instance bound to an address.
///
#[derive(Debug, Clone)]
pub struct Instance {
    /// The contract name.
    pub name: String,
    /// The contract address.
    pub address: web3::types::Address,
    /// The contract ABI.
    pub abi: Arc<web3::ethabi::Contract>,
}

impl Instance {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, address: web3::types::Address, abi: web3::ethabi::Contract) -> Self {
        Self {
            name,
            address,
            abi: Arc::new(abi),
        }
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.address == other.address
    }
}

impl Eq for Instance {}
