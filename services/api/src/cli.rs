use crate::demo::{run_assess, run_demo, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use surgical_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Surgical Readiness",
    about = "Score surgical readiness and general health risk from the command line",
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
    /// Score every assessment in a marker CSV export
    Assess(AssessArgs),
    /// Run a built-in sample patient through the full scoring pipeline
    Demo,
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
        Command::Assess(args) => run_assess(args),
        Command::Demo => run_demo(),
    }
}
