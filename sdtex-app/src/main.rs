mod app;
mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app = App::new(cli.command);
    app.run(&mut std::io::stdout().lock())?;

    Ok(())
}
