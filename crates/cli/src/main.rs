use clap::Parser;
use rlookup_domain::{AddressParseMode, CliOverrides, DomainError, USAGE_MESSAGE};
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rlookup")]
#[command(version)]
#[command(about = "Resolve an IPv4 address to a hostname using the system resolver")]
struct Cli {
    /// IPv4 address in dotted-decimal form, e.g. 8.8.8.8
    address: Option<String>,

    /// Anything after the address is ignored
    #[arg(hide = true)]
    _rest: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Accept inet_aton-style short forms such as 127.1 or 0x7f.0.0.1
    #[arg(long)]
    legacy_parse: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(address) = cli.address else {
        println!("{USAGE_MESSAGE}");
        return Ok(ExitCode::FAILURE);
    };

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        parse_mode: cli.legacy_parse.then_some(AddressParseMode::Legacy),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    let use_cases = di::UseCases::new(&config);

    match use_cases.resolve_hostname.execute(&address).await {
        Ok(lookup) => {
            debug!(found = lookup.is_found(), "Lookup complete");
            println!("{lookup}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ DomainError::InvalidIpAddress(_)) => {
            println!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
