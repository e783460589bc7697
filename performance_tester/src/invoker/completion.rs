//!
//! The invocation completion.
//!

use crate::invoker::receipt::Receipt;

///
/// The invocation completion.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// The decoded return values, if the invocation is a query.
    pub output: Option<Vec<web3::ethabi::Token>>,
    /// The receipt, if the invocation is a mined transaction.
    pub receipt: Option<Receipt>,
}

impl Completion {
    ///
    /// A shortcut constructor for a query completion.
    ///
    pub fn query(output: Vec<web3::ethabi::Token>) -> Self {
        Self {
            output: Some(output),
            receipt: None,
        }
    }

    ///
    /// A shortcut constructor for a transaction completion.
    ///
    pub fn transaction(receipt: Receipt) -> Self {
        Self {
            output: None,
            receipt: Some(receipt),
        }
    }

    ///
    /// Returns the gas used, if there is a receipt.
    ///
    pub fn gas_used(&self) -> Option<u64> {
        self.receipt.as_ref().map(|receipt| receipt.gas_used)
    }
}
