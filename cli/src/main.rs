/*!

This is the command line interface for managing Amazon EMR clusters declaratively: drive the
cluster matching a name pattern toward a `present` or `absent` state, or list clusters with
filtering and sorting. Results are printed to stdout as JSON; logs go to stderr.

!*/

mod cluster;
mod error;
mod info;

use env_logger::Builder;
use error::Result;
use log::LevelFilter;
use structopt::StructOpt;

/// The command line interface for declaring and inspecting Amazon EMR clusters.
#[derive(Debug, StructOpt)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[structopt(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    /// The AWS region to call. When omitted, the region is resolved from the environment.
    #[structopt(long = "region")]
    region: Option<String>,
    /// The arn of an IAM role to assume for all AWS calls.
    #[structopt(long = "assume-role")]
    assume_role: Option<String>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Drive a cluster toward its desired state.
    Cluster(cluster::Cluster),
    /// List clusters with optional filtering and sorting.
    Info(info::Info),
}

#[tokio::main]
async fn main() {
    let args = Args::from_args();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = emrctl_model::aws::emr_sdk_config(&args.region, &args.assume_role).await;
    let client = emrctl_model::Client::new(&config);
    match args.command {
        Command::Cluster(cluster) => cluster.run(client).await,
        Command::Info(info) => info.run(client).await,
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; set the default level for this crate and the library.
            Builder::new()
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("emrctl_model"), level)
                .init();
        }
    }
}
