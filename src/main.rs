use anyhow::Result;
use clap::Parser;
use larder::{
    Session,
    cli::{Command, Request, finish, nothing_to_do, prepare, shell},
};
use larder_spoonacular::Client;
use larder_store::JsonStore;

/// larder - recipe search, favorites, shopping lists and meal plans
#[derive(Parser)]
#[command(name = "larder", version)]
#[command(about = "Find recipes by ingredient and plan your meals", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = larder::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    larder::observability::init_observability(
        "larder",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let client = Client::new(config.api.client_config())?;
    let mut session = Session::open(client, JsonStore::new(&config.data.dir));

    match cli.command {
        Command::Shell => shell(&mut session).await,
        command => run_command(&mut session, command).await,
    }
}

#[tracing::instrument(skip(session))]
async fn run_command(session: &mut Session, command: Command) -> Result<()> {
    let Request::Fetch(job, followup) = prepare(session, command)? else {
        return Ok(());
    };

    let message = nothing_to_do(&job);
    match session.run(job).await? {
        Some(event) => finish(session, event, followup),
        None => {
            println!("{message}");
            Ok(())
        }
    }
}
