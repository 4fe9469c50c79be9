use agenda_digest::app;
use agenda_digest::ports::ItemStorePort;
use agenda_digest::{AppConfig, SummaryOutcome};
use anyhow::Context;
use clap::{Parser, Subcommand};

/// Fetch, deduplicate and summarize Minneapolis City Council agenda items
#[derive(Parser, Debug)]
#[command(name = "agenda-digest")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the pipeline once (default)
    Run,

    /// Print processed agenda items as JSON
    List,

    /// Print ids of items that were committed with a placeholder summary
    Placeholders,

    /// Print stored batch summaries as JSON, newest first
    Summaries {
        /// Maximum number of summaries to print
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config;
    config.validate()?;

    let store = app::initialize_store(&config).context("item store unavailable")?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            log::info!("Starting agenda pipeline");
            let orchestrator = app::build_orchestrator(&config, store)?;
            let report = orchestrator.run().await?;
            log::info!(
                "Run complete: {} fetched ({} source), {} skipped, {} batches committed, {} with placeholder summaries",
                report.fetched,
                report.origin,
                report.skipped,
                report.batches.len(),
                report.placeholder_batches()
            );
        }
        Command::List => {
            let records = store.list_processed(None).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Placeholders => {
            for record in store.list_processed(Some(SummaryOutcome::Placeholder)).await? {
                println!("{}", record.id);
            }
        }
        Command::Summaries { limit } => {
            let summaries = store.list_summaries(limit).await?;
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }

    Ok(())
}
