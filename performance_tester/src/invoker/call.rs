//!
//! The contract method call.
//!

use crate::environment::instance::Instance;
use crate::invoker::input::Input;
use crate::invoker::kind::Kind;

///
/// The contract method call.
///
#[derive(Debug, Clone)]
pub struct Call<'a> {
    /// The operation name, which is also the contract method name.
    pub name: &'a str,
    /// The called contract instance.
    pub instance: &'a Instance,
    /// The method arguments.
    pub inputs: Vec<Input>,
    /// The caller account.
    pub caller: Option<web3::types::Address>,
    /// The invocation kind.
    pub kind: Kind,
}

impl<'a> Call<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        name: &'a str,
        instance: &'a Instance,
        inputs: Vec<Input>,
        caller: Option<web3::types::Address>,
        kind: Kind,
    ) -> Self {
        Self {
            name,
            instance,
            inputs,
            caller,
            kind,
        }
    }

    ///
    /// Returns the ABI function of the called method.
    ///
    pub fn function(&self) -> anyhow::Result<&'a web3::ethabi::Function> {
        self.instance.abi.function(self.name).map_err(|error| {
            anyhow::anyhow!(
                "Contract `{}` method `{}`: {error}",
                self.instance.name,
                self.name
            )
        })
    }

    ///
    /// Returns the ABI-encoded calldata.
    ///
    pub fn calldata(&self) -> anyhow::Result<Vec<u8>> {
        let function = self.function()?;
        let tokens = Input::tokenize_all(self.inputs.as_slice(), function.inputs.as_slice())?;
        function
            .encode_input(tokens.as_slice())
            .map_err(|error| anyhow::anyhow!("Calldata encoding: {error}"))
    }
}
