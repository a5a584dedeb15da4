use anyhow::{Context, Result};
use clap::Parser;
use stayzy::cli::{self, Cli, NO_COLOR_ENV};
use stayzy::tui::{install_panic_hook, Tui};
use stayzy::utils::get_log_dir;
use stayzy::{App, Config};

fn main() -> Result<()> {
    let mut args = Cli::parse();
    let config_path = args.config_path();

    if let Some(command) = args.command.take() {
        if let Err(e) = cli::execute(command, &config_path) {
            cli::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    install_panic_hook();

    // Log to a file; the terminal belongs to the TUI
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "stayzy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let saved_config =
        Config::load_or_create(&config_path).context("Failed to load configuration")?;
    let mut config = saved_config.clone();
    let no_color = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
    args.apply_overrides(&mut config, no_color);

    let mut tui = Tui::new(config.mouse)?;
    let mut app = App::with_session(saved_config, config, config_path);
    let result = app.run(&mut tui);

    drop(tui);
    drop(guard);
    result
}
