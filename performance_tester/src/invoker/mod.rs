//!
//! The contract method invoker.
//!

pub mod call;
pub mod completion;
pub mod input;
pub mod kind;
pub mod receipt;

use self::call::Call;
use self::completion::Completion;

///
/// The contract method invoker.
///
/// The future resolves once: either to the completion, or to the failure reported
/// by the node.
///
#[allow(async_fn_in_trait)]
pub trait Invoker {
    ///
    /// Invokes the method and waits for the completion.
    ///
    async fn invoke(&self, call: Call<'_>) -> anyhow::Result<Completion>;
}
