use crate::demo::{run_demo, run_humanize, DemoArgs, HumanizeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use textify::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Textify Humanizer",
    about = "Run the text humanizer service or exercise the pipeline from the command line",
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
    /// Humanize a single text on the local engine and print the result
    Humanize(HumanizeArgs),
    /// Run an end-to-end CLI demo covering every tone and the history store
    Demo(DemoArgs),
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
        Command::Humanize(args) => run_humanize(args),
        Command::Demo(args) => run_demo(args),
    }
}
