use crate::commands::{run_content, run_search, ContentArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vot_romania::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Vot Romania",
    about = "Find your polling station and read the voter's guide",
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
    /// Resolve an address to polling stations using the configured dataset
    Search(SearchArgs),
    /// Print the general information and voter's guide for a language
    Content(ContentArgs),
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
        Command::Search(args) => run_search(args),
        Command::Content(args) => run_content(args),
    }
}
