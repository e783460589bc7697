//!
//! The invocation kind.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The invocation kind.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// A state-changing transaction, which is mined and yields a receipt.
    #[default]
    Transaction,
    /// A read-only call, which yields the decoded return values and no receipt.
    Query,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transaction => write!(f, "transaction"),
            Self::Query => write!(f, "query"),
        }
    }
}
