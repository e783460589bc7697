//!
//! The JSON-RPC node client.
//!

use std::time::Duration;

use crate::artifact::Artifact;
use crate::environment::deployer::Deployer;
use crate::invoker::call::Call;
use crate::invoker::completion::Completion;
use crate::invoker::input::Input;
use crate::invoker::kind::Kind;
use crate::invoker::receipt::Receipt;
use crate::invoker::Invoker;

///
/// The JSON-RPC node client.
///
/// Transactions are signed by the node with `eth_sendTransaction`, and their receipts
/// are polled until they appear. There is no timeout: the transport is the only bound.
///
/// No keys are held here, so the endpoint must manage the caller accounts. Public
/// endpoints reject `eth_sendTransaction`, and remote networks need a signing proxy
/// in front of them.
///
#[derive(Debug, Clone)]
pub struct Node {
    /// The `web3` client.
    web3: web3::Web3<web3::transports::Http>,
    /// The receipt polling interval.
    poll_interval: Duration,
}

impl Node {
    /// The default development node endpoint.
    pub const DEFAULT_DEVELOPMENT_URL: &'static str = "http://127.0.0.1:8545";

    /// The default receipt polling interval in milliseconds.
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(url: &str, poll_interval: Duration) -> anyhow::Result<Self> {
        let transport = web3::transports::Http::new(url)
            .map_err(|error| anyhow::anyhow!("RPC endpoint `{url}` connecting: {error}"))?;
        Ok(Self {
            web3: web3::Web3::new(transport),
            poll_interval,
        })
    }

    ///
    /// Sends the transaction and waits for its receipt.
    ///
    async fn send(
        &self,
        request: web3::types::TransactionRequest,
    ) -> anyhow::Result<web3::types::TransactionReceipt> {
        let hash = self
            .web3
            .eth()
            .send_transaction(request)
            .await
            .map_err(|error| anyhow::anyhow!("Transaction sending: {error}"))?;

        let receipt = loop {
            match self
                .web3
                .eth()
                .transaction_receipt(hash)
                .await
                .map_err(|error| anyhow::anyhow!("Transaction receipt requesting: {error}"))?
            {
                Some(receipt) => break receipt,
                None => tokio::time::sleep(self.poll_interval).await,
            }
        };

        Self::check_status(&receipt)?;
        Ok(receipt)
    }

    ///
    /// Checks that the transaction has not been reverted.
    ///
    /// Receipts without status predate the Byzantium fork and are accepted.
    ///
    fn check_status(receipt: &web3::types::TransactionReceipt) -> anyhow::Result<()> {
        if receipt.status == Some(web3::types::U64::zero()) {
            anyhow::bail!(
                "Transaction {} reverted",
                crate::utils::h256_as_string(&receipt.transaction_hash)
            );
        }
        Ok(())
    }

    ///
    /// Returns the deploy bytecode followed by the encoded constructor arguments.
    ///
    fn deploy_data(artifact: &Artifact, arguments: &[String]) -> anyhow::Result<Vec<u8>> {
        let bytecode = artifact.bytecode()?;
        let inputs: Vec<Input> = arguments
            .iter()
            .map(|argument| Input::Literal(argument.to_owned()))
            .collect();
        match artifact.abi.constructor() {
            Some(constructor) => {
                let tokens = Input::tokenize_all(inputs.as_slice(), constructor.inputs.as_slice())?;
                constructor
                    .encode_input(bytecode, tokens.as_slice())
                    .map_err(|error| anyhow::anyhow!("Constructor arguments encoding: {error}"))
            }
            None if inputs.is_empty() => Ok(bytecode),
            None => anyhow::bail!(
                "Contract `{}` has no constructor, but {} arguments are provided",
                artifact.contract_name,
                inputs.len()
            ),
        }
    }
}

impl Invoker for Node {
    async fn invoke(&self, call: Call<'_>) -> anyhow::Result<Completion> {
        let calldata = web3::types::Bytes(call.calldata()?);

        match call.kind {
            Kind::Query => {
                let request = web3::types::CallRequest {
                    from: call.caller,
                    to: Some(call.instance.address),
                    data: Some(calldata),
                    ..Default::default()
                };
                let output = self
                    .web3
                    .eth()
                    .call(request, None)
                    .await
                    .map_err(|error| anyhow::anyhow!("Query: {error}"))?;
                let output = call
                    .function()?
                    .decode_output(output.0.as_slice())
                    .map_err(|error| anyhow::anyhow!("Query output decoding: {error}"))?;
                Ok(Completion::query(output))
            }
            Kind::Transaction => {
                let from = call
                    .caller
                    .ok_or_else(|| anyhow::anyhow!("Transactions require a caller account"))?;
                let request = web3::types::TransactionRequest {
                    from,
                    to: Some(call.instance.address),
                    data: Some(calldata),
                    ..Default::default()
                };
                let receipt = self.send(request).await?;
                Ok(Completion::transaction(Receipt::try_from(receipt)?))
            }
        }
    }
}

impl Deployer for Node {
    async fn accounts(&self) -> anyhow::Result<Vec<web3::types::Address>> {
        self.web3
            .eth()
            .accounts()
            .await
            .map_err(|error| anyhow::anyhow!("Accounts requesting: {error}"))
    }

    async fn deploy(
        &self,
        artifact: &Artifact,
        arguments: &[String],
        caller: web3::types::Address,
    ) -> anyhow::Result<web3::types::Address> {
        let data = Self::deploy_data(artifact, arguments)?;

        let request = web3::types::TransactionRequest {
            from: caller,
            to: None,
            data: Some(web3::types::Bytes(data)),
            ..Default::default()
        };
        let receipt = self.send(request).await?;
        receipt.contract_address.ok_or_else(|| {
            anyhow::anyhow!(
                "Deploy receipt {} has no contract address",
                crate::utils::h256_as_string(&receipt.transaction_hash)
            )
        })
    }
}
