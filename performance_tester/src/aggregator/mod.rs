//!
//! The run results aggregator.
//!

pub mod sample;
pub mod statistics;

use std::collections::BTreeMap;

use crate::invoker::receipt::Receipt;

use self::sample::Sample;
use self::statistics::Statistics;

///
/// The run results aggregator.
///
/// Every list is append-only, so the i-th elapsed time and the i-th gas value of an
/// operation belong to its i-th invocation.
///
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    /// The elapsed times in milliseconds, keyed by the operation name.
    elapsed_times: BTreeMap<String, Vec<f64>>,
    /// The gas used, keyed by the operation name.
    gas_used: BTreeMap<String, Vec<u64>>,
    /// The receipts, keyed by the transaction hash.
    receipts: BTreeMap<String, Receipt>,
}

impl Aggregator {
    ///
    /// Appends a measurement of the operation.
    ///
    /// The gas list is only extended if `gas_used` is present.
    ///
    pub fn record(&mut self, name: &str, elapsed: f64, gas_used: Option<u64>) {
        self.elapsed_times
            .entry(name.to_owned())
            .or_default()
            .push(elapsed);
        if let Some(gas_used) = gas_used {
            self.gas_used
                .entry(name.to_owned())
                .or_default()
                .push(gas_used);
        }
    }

    ///
    /// Appends the sample.
    ///
    pub fn push(&mut self, sample: Sample) {
        self.record(sample.name.as_str(), sample.elapsed, sample.gas_used);
    }

    ///
    /// Stores the receipt, replacing the one with the same hash.
    ///
    pub fn record_receipt(&mut self, receipt: Receipt) {
        self.receipts
            .insert(receipt.transaction_hash.clone(), receipt);
    }

    ///
    /// Returns the elapsed times.
    ///
    pub fn elapsed_times(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.elapsed_times
    }

    ///
    /// Returns the gas used.
    ///
    pub fn gas_used(&self) -> &BTreeMap<String, Vec<u64>> {
        &self.gas_used
    }

    ///
    /// Returns the receipts.
    ///
    pub fn receipts(&self) -> &BTreeMap<String, Receipt> {
        &self.receipts
    }

    ///
    /// Returns the statistics of every operation.
    ///
    pub fn statistics(&self) -> BTreeMap<&str, Statistics> {
        self.elapsed_times
            .iter()
            .map(|(name, elapsed_times)| {
                let gas_used = self.gas_used.get(name).map(|gas_used| gas_used.as_slice());
                (
                    name.as_str(),
                    Statistics::new(elapsed_times.as_slice(), gas_used),
                )
            })
            .collect()
    }
}
