//!
//! The single operation measurement.
//!

///
/// The single operation measurement.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// The operation name.
    pub name: String,
    /// The elapsed time in milliseconds.
    pub elapsed: f64,
    /// The gas used, if the operation yielded a receipt.
    pub gas_used: Option<u64>,
}

impl Sample {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, elapsed: f64, gas_used: Option<u64>) -> Self {
        Self {
            name,
            elapsed,
            gas_used,
        }
    }
}
