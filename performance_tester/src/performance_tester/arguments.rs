//!
//! The performance tester arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The performance tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The target to run the plan on: `development` or a network from the config file.
    #[arg(short, long, env = "network", default_value = performance_tester::Target::DEVELOPMENT)]
    pub network: performance_tester::Target,

    /// The network configuration file path.
    #[arg(short, long, default_value = performance_tester::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// The directory containing one `<Contract>.json` build artifact per contract.
    #[arg(short, long, default_value = performance_tester::DEFAULT_ARTIFACTS_DIRECTORY)]
    pub artifacts: PathBuf,

    /// The directory where the `data_<network>` results directory is created.
    #[arg(short, long, default_value = ".")]
    pub data_directory: PathBuf,

    /// The JSON plan file. The token swap workload is run if unset.
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// The RPC endpoint, which overrides the one from the config file.
    #[arg(short, long)]
    pub rpc: Option<String>,

    /// The transaction receipt polling interval in milliseconds.
    #[arg(long, default_value_t = performance_tester::Node::DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval: u64,

    /// Prints every step with its elapsed time and gas.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely, except for errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("The `--verbose` and `--quiet` options are mutually exclusive");
        }
        if arguments.poll_interval == 0 {
            anyhow::bail!("The receipt polling interval must be positive");
        }

        Ok(arguments)
    }
}
