use clap::Parser;
use tracing_subscriber::EnvFilter;

use mobile_e2e::cli::commands::{cmd_crawl, cmd_list, cmd_run};
use mobile_e2e::cli::config::{Cli, Commands, load_config, resolve_driver_config, resolve_retries};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            suite,
            format,
            output,
            retries,
        } => {
            let driver_config = resolve_driver_config(cli.profile, &config);
            let retries = resolve_retries(retries, &config, &driver_config);
            let format = format.unwrap_or(config.run.format);
            let output = output.or_else(|| config.run.output.clone());

            let all_passed = cmd_run(&driver_config, &suite, format, output.as_deref(), retries)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Crawl { page, out_dir } => {
            let driver_config = resolve_driver_config(cli.profile, &config);
            let out_dir = out_dir.unwrap_or_else(|| config.crawl.out_dir.clone());
            cmd_crawl(&driver_config, page.as_deref(), &out_dir)?;
        }
        Commands::List => cmd_list(),
    }

    Ok(())
}
