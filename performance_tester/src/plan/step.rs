//!
//! The plan step.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::invoker::kind::Kind;
use crate::plan::argument::Argument;

///
/// The plan step.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The operation name, which is also the contract method name.
    pub name: String,
    /// The target contract instance name.
    pub target: String,
    /// The invocation kind.
    #[serde(default)]
    pub kind: Kind,
    /// The method arguments.
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// The caller account index. The first account is used if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<usize>,
    /// The human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Step {
    ///
    /// A shortcut constructor for a transaction step.
    ///
    pub fn transaction(name: &str, target: &str, arguments: Vec<Argument>) -> Self {
        Self::new(name, target, Kind::Transaction, arguments)
    }

    ///
    /// A shortcut constructor for a query step.
    ///
    pub fn query(name: &str, target: &str, arguments: Vec<Argument>) -> Self {
        Self::new(name, target, Kind::Query, arguments)
    }

    ///
    /// Sets the caller account index.
    ///
    pub fn with_caller(mut self, caller: usize) -> Self {
        self.caller = Some(caller);
        self
    }

    ///
    /// Sets the description.
    ///
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    fn new(name: &str, target: &str, kind: Kind, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.to_owned(),
            target: target.to_owned(),
            kind,
            arguments,
            caller: None,
            description: None,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments: Vec<String> = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect();
        write!(
            f,
            "{} {}.{}({})",
            self.kind,
            self.target,
            self.name,
            arguments.join(", ")
        )?;
        if let Some(caller) = self.caller {
            write!(f, " from account #{caller}")?;
        }
        if let Some(ref description) = self.description {
            write!(f, " `{description}`")?;
        }
        Ok(())
    }
}
