use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use newsimpact::app::App;
use newsimpact::cli::{output, report, Cli, Commands, ConfigCommand};
use newsimpact::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    match &cli.command {
        Commands::Run(args) => {
            if args.json_logs {
                config.logging.format = "json".to_string();
            }
            config.init_logging();
            info!("newsimpact starting");

            if let Err(e) = App::run_once(&config).await {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        Commands::Watch(args) => {
            if args.json_logs {
                config.logging.format = "json".to_string();
            }
            config.init_logging();
            info!("newsimpact starting in watch mode");

            tokio::select! {
                result = App::watch(config) => {
                    if let Err(e) = result {
                        error!(error = %e, "Fatal error");
                        std::process::exit(1);
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
            }
        }
        Commands::Report => {
            if let Err(e) = report::execute(&config) {
                output::error(&format!("{e}"));
                std::process::exit(1);
            }
        }
        Commands::Config(ConfigCommand::Validate) => match Config::load(&cli.config) {
            Ok(_) => output::ok("configuration is valid"),
            Err(e) => {
                output::error(&format!("{e}"));
                std::process::exit(1);
            }
        },
    }
}
