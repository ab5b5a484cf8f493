use crate::quote::{run_estimate, EstimateCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use insurance_guide::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Insurance Guide",
    about = "Serve or run the illustrative insurance premium calculators",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate a premium from the command line; omitted fields use the form defaults
    Estimate {
        #[command(subcommand)]
        command: EstimateCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate { command } => run_estimate(command),
    }
}
