//!
//! The performance tester error.
//!

///
/// The performance tester error.
///
/// Every variant is fatal: the run stops and no results are written.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target, its contracts, or its accounts are not configured properly.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The node reported a failure for a step.
    #[error("Operation `{name}` failed: {description}")]
    Invocation {
        /// The operation name.
        name: String,
        /// The failure description.
        description: String,
    },
    /// A step references an output that has not been produced.
    #[error("Dependency error: {0}")]
    Dependency(String),
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn configuration<S>(message: S) -> Self
    where
        S: ToString,
    {
        Self::Configuration(message.to_string())
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn invocation<S>(name: &str, description: S) -> Self
    where
        S: ToString,
    {
        Self::Invocation {
            name: name.to_owned(),
            description: description.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn dependency<S>(message: S) -> Self
    where
        S: ToString,
    {
        Self::Dependency(message.to_string())
    }
}
