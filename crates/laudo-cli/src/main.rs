use clap::Parser;
use eyre::Result;
use laudo_cli::cli::Cli;
use laudo_cli::commands::App;
use laudo_cli::config::{default_config_path, load_config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;

    let app = App::new(config, config_path);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&cli.command, &mut out)
}

/// Logs go to stderr so report text on stdout stays pipeable.
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
