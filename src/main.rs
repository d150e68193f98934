use anyhow::{Context, Result};
use clap::Parser;
use profilegate::app::App;
use profilegate::cli::{resolve_theme, Cli};
use profilegate::styles::Theme;
use profilegate::tui::{setup_panic_hook, Tui};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to `<cache dir>/profilegate/profilegate.log`; stdout belongs to the TUI.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = profilegate::paths::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "profilegate.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let guard = init_logging()?;

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let config = cli.load_config()?;
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme = resolve_theme(no_color, cli.theme.as_deref(), &config.theme)?;

    let mut tui = Tui::new()?;
    let mut app = App::new(&config, Theme::new(theme));
    let result = app.run(&mut tui);

    drop(guard);
    result
}
