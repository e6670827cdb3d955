use bidintel::cli::commands::{Cli, Commands};
use bidintel::domain::error::DomainError;
use bidintel::infrastructure::config::Config;
use bidintel::infrastructure::{demo, loader};
use bidintel::BidIntel;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config);

    let engine = BidIntel::from_config(&config);
    if let Err(e) = run_command(&engine, cli.command) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(bidintel::infrastructure::config::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_command(engine: &BidIntel, cmd: Commands) -> Result<(), DomainError> {
    match cmd {
        Commands::Analyze { json } => {
            let opportunity = loader::parse_opportunity(&json)?;
            let analysis = engine.analyze_opportunity(&opportunity);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Portfolio {
            json,
            file,
            summary_only,
        } => {
            let opportunities = match (file, json) {
                (Some(path), _) => loader::load_opportunities(&path)?,
                (None, Some(json)) => loader::parse_opportunities(&json)?,
                (None, None) => return Err("Provide a JSON array or --file".into()),
            };
            let mut summary = engine.analyze_opportunity_portfolio(&opportunities);
            if summary_only {
                summary.analyses.clear();
            }
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Competitors => {
            println!(
                "{}",
                serde_json::to_string_pretty(engine.competitor_profiles())?
            );
        }
        Commands::Demo => {
            let opportunities = demo::demo_opportunities(engine.clock().now());
            let summary = engine.analyze_opportunity_portfolio(&opportunities);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
