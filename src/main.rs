use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pxc_version_resolver::cli::{ResolveArgs, run_resolve};
use pxc_version_resolver::config::ResolverConfig;
use pxc_version_resolver::logging;
use pxc_version_resolver::version::client::VersionServiceClient;

#[derive(Parser)]
#[command(name = "pxc-version-resolver")]
#[command(version, about = "Resolve PXC component images from the version service")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one version and image per component
    Resolve(ResolveArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Command::Resolve(args) => {
            let config = args.apply_overrides(ResolverConfig::load(args.config.as_deref())?);
            let client = VersionServiceClient::from_config(&config);
            let meta = args.version_meta();

            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(run_resolve(
                    &client,
                    &config.endpoint,
                    &meta,
                    &mut std::io::stdout().lock(),
                ))
        }
    }
}
