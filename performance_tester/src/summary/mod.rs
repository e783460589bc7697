//!
//! The performance tester summary.
//!

use colored::Colorize;

use crate::aggregator::statistics::Statistics;
use crate::aggregator::Aggregator;

///
/// The performance tester summary.
///
/// Only describes the current run. Cross-run analysis is done by separate tooling
/// over the written files.
///
#[derive(Debug, Clone)]
pub struct Summary {
    /// The target name.
    target: String,
    /// The environment setup time in milliseconds.
    setup: f64,
    /// The per-operation statistics, ordered by the operation name.
    operations: Vec<(String, Statistics)>,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl Summary {
    /// The maximal operation name width that fits into the box.
    const NAME_WIDTH: usize = 20;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(target: String, setup: f64, aggregator: &Aggregator, quiet: bool) -> Self {
        let operations = aggregator
            .statistics()
            .into_iter()
            .map(|(name, statistics)| (name.to_owned(), statistics))
            .collect();
        Self {
            target,
            setup,
            operations,
            quiet,
        }
    }

    ///
    /// Returns the total number of invocations.
    ///
    pub fn invocations(&self) -> usize {
        self.operations
            .iter()
            .map(|(_, statistics)| statistics.count)
            .sum()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔═════════════════════╡ PERFORMANCE TESTING ╞══════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                                  ║"
        )?;
        writeln!(
            f,
            "║  {}  {}  {}  {}  ║",
            format!("{:20}", "OPERATION").bright_white(),
            format!("{:>6}", "COUNT").bright_white(),
            format!("{:>14}", "MEAN MS").bright_white(),
            format!("{:>14}", "MEAN GAS").bright_white(),
        )?;
        for (name, statistics) in self.operations.iter() {
            let name = if name.chars().count() > Self::NAME_WIDTH {
                let prefix: String = name.chars().take(Self::NAME_WIDTH - 1).collect();
                format!("{prefix}~")
            } else {
                name.to_owned()
            };
            let gas = match statistics.mean_gas_used {
                Some(gas) => format!("{gas:>14.0}").cyan(),
                None => format!("{:>14}", "-").bright_black(),
            };
            writeln!(
                f,
                "║  {:20}  {:>6}  {}  {}  ║",
                name,
                statistics.count,
                format!("{:>14.3}", statistics.mean_elapsed).green(),
                gas,
            )?;
        }
        writeln!(
            f,
            "║                                                                  ║"
        )?;
        writeln!(
            f,
            "║  {:20}  {:>6}  {:>14.3}  {:14}  ║",
            "setup", "", self.setup, "",
        )?;
        writeln!(
            f,
            "║  {:20}  {:>6}  {:>14}  {:14}  ║",
            format!("{} invocations", self.invocations()),
            "",
            "",
            "",
        )?;
        writeln!(
            f,
            "║  {:60}  ║",
            format!("target `{}`", self.target),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
