use crate::infra::load_catalog;
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use traitharbor::config::AppConfig;
use traitharbor::error::AppError;
use traitharbor::quiz::InventoryVariant;
use traitharbor::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "TraitHarbor",
    about = "Serve and validate the TraitHarbor Big Five scoring core",
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
    /// Check item bank and facet map integrity without starting the service
    Validate(ValidateArgs),
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

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Directory containing items.csv and facets.csv (defaults to the bundled data)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Validate(args) => run_validate(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let data_dir = args.data_dir.or(config.quiz.data_dir);
    let catalog = load_catalog(data_dir.as_deref())?;

    match &data_dir {
        Some(dir) => println!("Quiz data: {}", dir.display()),
        None => println!("Quiz data: bundled IPIP-NEO-120"),
    }
    println!("Facets: {}", catalog.facets().len());
    for variant in InventoryVariant::ordered() {
        println!("- {}: {} items", variant.label(), catalog.items(variant).len());
    }

    Ok(())
}
