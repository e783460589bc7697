//!
//! The performance tester target to run the plan on.
//!

///
/// The performance tester target to run the plan on.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The local development node, where contracts are deployed anew on every run.
    Development,
    /// The remote network with pre-deployed contracts.
    Network(String),
}

impl Target {
    /// The development target name.
    pub const DEVELOPMENT: &'static str = "development";

    ///
    /// Returns the target name.
    ///
    pub fn name(&self) -> &str {
        match self {
            Self::Development => Self::DEVELOPMENT,
            Self::Network(name) => name.as_str(),
        }
    }

    ///
    /// Whether the contracts are deployed by the tester.
    ///
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::str::FromStr for Target {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim() {
            "" => anyhow::bail!("Target name cannot be empty"),
            Self::DEVELOPMENT => Ok(Self::Development),
            name if name.contains(std::path::is_separator) => {
                anyhow::bail!("Target name `{name}` cannot contain path separators")
            }
            name => Ok(Self::Network(name.to_owned())),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
