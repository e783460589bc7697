//!
//! The performance tester library.
//!

pub(crate) mod aggregator;
pub(crate) mod artifact;
pub(crate) mod config;
pub(crate) mod environment;
pub(crate) mod error;
pub(crate) mod invoker;
pub(crate) mod node;
pub(crate) mod plan;
pub(crate) mod recorder;
pub(crate) mod runner;
pub(crate) mod summary;
pub(crate) mod utils;


pub use self::aggregator::Aggregator;
pub use self::artifact::Artifacts;
pub use self::config::Config;
pub use self::environment::deployer::Deployer;
pub use self::environment::target::Target;
pub use self::environment::Environment;
pub use self::error::Error;
pub use self::invoker::Invoker;
pub use self::node::Node;
pub use self::plan::Plan;
pub use self::recorder::Recorder;
pub use self::runner::Runner;
pub use self::summary::Summary;

use std::path::PathBuf;

use colored::Colorize;

use crate::utils::timer::Timer;

/// The default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "./configs/networks.json";

/// The default build artifacts directory.
pub const DEFAULT_ARTIFACTS_DIRECTORY: &str = "./build/contracts";

///
/// The performance tester.
///
#[derive(Debug)]
pub struct PerformanceTester {
    /// The plan to run.
    plan: Plan,
    /// The results recorder.
    recorder: Recorder,
    /// The output verbosity.
    verbose: bool,
    /// Whether the output is suppressed.
    quiet: bool,
}

impl PerformanceTester {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(plan: Plan, data_directory: PathBuf, verbose: bool, quiet: bool) -> Self {
        Self {
            plan,
            recorder: Recorder::new(data_directory),
            verbose,
            quiet,
        }
    }

    ///
    /// Resolves the environment, runs the plan, and writes the results.
    ///
    /// Returns the paths of the written files. Configuration errors stop the run before
    /// the first step, and nothing is written if any step fails.
    ///
    pub async fn run<B>(
        &self,
        backend: &B,
        target: &Target,
        config: &Config,
        artifacts: &Artifacts,
    ) -> anyhow::Result<Vec<PathBuf>>
    where
        B: Invoker + Deployer,
    {
        self.plan.validate()?;

        if !self.quiet {
            println!(
                "   {} `{}` with {} contracts from {:?}",
                "Resolving".bright_green().bold(),
                target,
                self.plan.contracts.len(),
                artifacts.directory(),
            );
        }
        let mut timer = Timer::started();
        let environment = Environment::resolve(
            target,
            config,
            artifacts,
            self.plan.contracts.as_slice(),
            backend,
            self.quiet,
        )
        .await?;
        timer.stop()?;
        let setup = timer.elapsed_milliseconds()?;
        self.plan.check(&environment)?;
        if self.verbose && !self.quiet {
            println!(
                "{:>12} setup ({})",
                "Done".green(),
                format!("{setup:.3} ms").bright_white(),
            );
        }

        if !self.quiet {
            println!(
                "     {} {} steps",
                "Running".bright_green().bold(),
                self.plan.steps.len(),
            );
        }
        let mut aggregator = Aggregator::default();
        let mut runner = Runner::new(backend, &mut aggregator, self.verbose, self.quiet);
        self.plan.execute(&environment, &mut runner).await?;

        let paths = self.recorder.flush(&aggregator, &environment)?;
        if !self.quiet {
            for path in paths.iter() {
                println!("     {} {path:?}", "Writing".bright_green().bold());
            }
        }

        let summary = Summary::new(target.to_string(), setup, &aggregator, self.quiet);
        print!("{summary}");

        Ok(paths)
    }
}
