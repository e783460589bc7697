//!
//! The per-operation statistics of a run.
//!

///
/// The per-operation statistics of a run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// The number of invocations.
    pub count: usize,
    /// The mean elapsed time in milliseconds.
    pub mean_elapsed: f64,
    /// The mean gas used, if at least one invocation yielded a receipt.
    pub mean_gas_used: Option<f64>,
}

impl Statistics {
    ///
    /// Computes the statistics of the samples.
    ///
    pub fn new(elapsed_times: &[f64], gas_used: Option<&[u64]>) -> Self {
        let count = elapsed_times.len();
        let mean_elapsed = if count == 0 {
            0.0
        } else {
            elapsed_times.iter().sum::<f64>() / count as f64
        };
        let mean_gas_used = gas_used
            .filter(|gas_used| !gas_used.is_empty())
            .map(|gas_used| {
                gas_used.iter().map(|gas| *gas as f64).sum::<f64>() / gas_used.len() as f64
            });

        Self {
            count,
            mean_elapsed,
            mean_gas_used,
        }
    }
}
