//!
//! The contract deployer.
//!

use crate::artifact::Artifact;

///
/// The contract deployer.
///
/// Only used for targets where the contracts are deployed by the tester.
///
#[allow(async_fn_in_trait)]
pub trait Deployer {
    ///
    /// Returns the accounts managed by the node, in the node order.
    ///
    async fn accounts(&self) -> anyhow::Result<Vec<web3::types::Address>>;

    ///
    /// Deploys the contract and returns its address.
    ///
    /// `arguments` are tokenized against the constructor parameter types.
    ///
    async fn deploy(
        &self,
        artifact: &Artifact,
        arguments: &[String],
        caller: web3::types::Address,
    ) -> anyhow::Result<web3::types::Address>;
}
