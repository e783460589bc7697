//!
//! The performance tester executable.
//!

pub(crate) mod arguments;

use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    if !arguments.quiet {
        println!(
            "    {} {} v{} on `{}`",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
            arguments.network,
        );
    }

    let config = if arguments.network.is_local() && !arguments.config.exists() {
        performance_tester::Config::default()
    } else {
        performance_tester::Config::try_from(arguments.config.as_path())?
    };
    let plan = match arguments.plan {
        Some(path) => performance_tester::Plan::try_from(path.as_path())?,
        None => performance_tester::Plan::default(),
    };
    let artifacts = performance_tester::Artifacts::new(arguments.artifacts);

    let configured_rpc = match config.networks.get(arguments.network.name()) {
        Some(network) => network.rpc_url()?,
        None => None,
    };
    let rpc = match (arguments.rpc, configured_rpc) {
        (Some(rpc), _) => rpc,
        (None, Some(rpc)) => rpc,
        (None, None) if arguments.network.is_local() => {
            performance_tester::Node::DEFAULT_DEVELOPMENT_URL.to_owned()
        }
        (None, None) => anyhow::bail!(
            "No RPC endpoint is configured for network `{}`",
            arguments.network
        ),
    };
    let node =
        performance_tester::Node::new(rpc.as_str(), Duration::from_millis(arguments.poll_interval))?;

    let tester = performance_tester::PerformanceTester::new(
        plan,
        arguments.data_directory,
        arguments.verbose,
        arguments.quiet,
    );

    let run_time_start = Instant::now();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| anyhow::anyhow!("Async runtime building: {error}"))?;
    runtime.block_on(tester.run(&node, &arguments.network, &config, &artifacts))?;

    if !arguments.quiet {
        println!(
            "    {} running the plan in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    Ok(())
}
