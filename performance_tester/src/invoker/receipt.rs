//!
//! The transaction receipt.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The transaction receipt.
///
/// The identifier and the gas used are typed, and every other field reported by the
/// node is kept as is, so the persisted receipt mirrors the node response.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// The transaction hash.
    pub transaction_hash: String,
    /// The gas used by the transaction.
    pub gas_used: u64,
    /// The remaining receipt fields.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Receipt {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(transaction_hash: String, gas_used: u64) -> Self {
        Self {
            transaction_hash,
            gas_used,
            fields: serde_json::Map::new(),
        }
    }
}

impl TryFrom<web3::types::TransactionReceipt> for Receipt {
    type Error = anyhow::Error;

    fn try_from(receipt: web3::types::TransactionReceipt) -> Result<Self, Self::Error> {
        let transaction_hash = crate::utils::h256_as_string(&receipt.transaction_hash);
        let gas_used = receipt
            .gas_used
            .ok_or_else(|| anyhow::anyhow!("Receipt {transaction_hash} has no gas used"))?;
        if gas_used > web3::types::U256::from(u64::MAX) {
            anyhow::bail!("Receipt {transaction_hash} gas used {gas_used} overflows");
        }

        let mut fields = match serde_json::to_value(&receipt)? {
            serde_json::Value::Object(fields) => fields,
            _ => anyhow::bail!("Receipt {transaction_hash} is not an object"),
        };
        fields.remove("transactionHash");
        fields.remove("gasUsed");

        Ok(Self {
            transaction_hash,
            gas_used: gas_used.low_u64(),
            fields,
        })
    }
}
