//!
//! The measured operation runner.
//!

use colored::Colorize;

use crate::aggregator::sample::Sample;
use crate::aggregator::Aggregator;
use crate::error::Error;
use crate::invoker::call::Call;
use crate::invoker::completion::Completion;
use crate::invoker::Invoker;
use crate::utils::timer::Timer;

///
/// The measured operation runner.
///
/// Times every invocation and reports the sample to the aggregator, whatever the outcome.
///
#[derive(Debug)]
pub struct Runner<'a, I>
where
    I: Invoker,
{
    /// The invocation backend.
    invoker: &'a I,
    /// The run results aggregator.
    aggregator: &'a mut Aggregator,
    /// The number of operations run so far.
    counter: usize,
    /// The output verbosity.
    verbose: bool,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl<'a, I> Runner<'a, I>
where
    I: Invoker,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(invoker: &'a I, aggregator: &'a mut Aggregator, verbose: bool, quiet: bool) -> Self {
        Self {
            invoker,
            aggregator,
            counter: 0,
            verbose,
            quiet,
        }
    }

    ///
    /// Runs the call and waits for its single outcome.
    ///
    /// `label` replaces the operation name in the step line.
    ///
    /// # Errors
    ///
    /// `Error::Invocation` if the node reports a failure. The elapsed time is recorded anyway.
    ///
    pub async fn run(
        &mut self,
        call: Call<'_>,
        label: Option<&str>,
    ) -> anyhow::Result<Completion> {
        let index = self.counter;
        self.counter += 1;
        let name = call.name;

        let mut timer = Timer::default();
        timer.start()?;
        let result = self.invoker.invoke(call).await;
        timer.stop()?;
        let elapsed = timer.elapsed_milliseconds()?;

        match result {
            Ok(completion) => {
                let gas_used = completion.gas_used();
                self.aggregator
                    .push(Sample::new(name.to_owned(), elapsed, gas_used));
                if let Some(receipt) = completion.receipt.as_ref() {
                    self.aggregator.record_receipt(receipt.to_owned());
                }
                if self.verbose && !self.quiet {
                    println!(
                        "{}",
                        Self::format(index, label.unwrap_or(name), elapsed, gas_used)
                    );
                }
                Ok(completion)
            }
            Err(error) => {
                self.aggregator
                    .push(Sample::new(name.to_owned(), elapsed, None));
                eprintln!(
                    "{:>12} step #{index} `{name}` after {elapsed:.3} ms: {error:#}",
                    "Failed".bright_red().bold(),
                );
                Err(Error::invocation(name, format!("{error:#}")).into())
            }
        }
    }

    ///
    /// Formats the successful step line.
    ///
    fn format(index: usize, label: &str, elapsed: f64, gas_used: Option<u64>) -> String {
        let mut details = vec![format!("{elapsed:.3} ms").bright_white().to_string()];
        if let Some(gas_used) = gas_used {
            details.push(format!("gas {gas_used}").bright_white().to_string());
        }

        format!(
            "{:>12} step #{index:<3} {label} ({})",
            "Done".green(),
            details.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Runner;
    use crate::tests::Scripted;

    #[test]
    fn format() {
        colored::control::set_override(false);
        let line = Runner::<Scripted>::format(3, "query Swap.getReserves()", 1.5, None);
        assert!(line.ends_with("step #3   query Swap.getReserves() (1.500 ms)"));

        let line = Runner::<Scripted>::format(4, "transaction Swap.init(1, 1)", 2.0, Some(46000));
        assert!(line.ends_with("(2.000 ms, gas 46000)"));
    }
}
