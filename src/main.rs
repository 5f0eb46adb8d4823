//! VeduInput CLI entry point

use std::process::ExitCode;

use clap::Parser;

use vedu_input::cli::{
    app::{load_merged_config, run_input, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    InputOptions,
};
use vedu_input::domain::config::AppConfig;
use vedu_input::infrastructure::{InjectorBackend, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    let command = match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Commands::Input(command) => command,
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        backend: cli.backend,
        scan_code: cli.scan_code,
        ..Default::default()
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let backend = match config.backend_or_default().parse::<InjectorBackend>() {
        Ok(b) => b,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let scan_code = match config.parse_scan_code() {
        Ok(code) => code,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let click_delay = match config.parse_click_delay() {
        Ok(d) => d,
        Err(e) => {
            presenter.error(&format!("Invalid click_delay: {}", e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let key_delay = match config.parse_key_delay() {
        Ok(d) => d,
        Err(e) => {
            presenter.error(&format!("Invalid key_delay: {}", e));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = InputOptions {
        backend,
        scan_code,
        click_delay,
        key_delay,
    };

    run_input(command, options).await
}
