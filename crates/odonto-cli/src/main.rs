use clap::Parser;
use eyre::Result;

mod commands;

#[derive(Parser)]
#[command(name = "odonto")]
#[command(about = "Dental epidemiological survey: odontogram, def-t / DMF-T, shared records")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: commands::Command,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    odonto_chart::topology::validate()?;

    commands::run(cli.command).await
}
