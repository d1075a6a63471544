use clap::Parser;

use typeq::cli::{CheckArgs, Cli, Commands};
use typeq::commands::{handle_check, handle_settings, handle_usage, handle_version};
use typeq::config::{self, Config};

fn main() {
    let cli = Cli::parse();

    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            config::print_config_error(&err);
            Config::default()
        }
    };

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Check(CheckArgs::default()));

    let result = match command {
        Commands::Check(args) => handle_check(&config, &args),
        Commands::Usage => {
            handle_usage();
            Ok(())
        }
        Commands::Settings(args) => handle_settings(&args),
        Commands::Version => {
            handle_version();
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
