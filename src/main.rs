//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use pl_stats::{
    cli::{Commands, PlStats},
    commands::{
        import::{handle_import, ImportParams},
        players::handle_players,
        remove::handle_remove,
        seasons::handle_seasons,
        show::handle_show,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = PlStats::parse();

    match app.command {
        Commands::Import {
            source,
            season,
            replace,
            dry_run,
            json,
        } => {
            handle_import(ImportParams {
                source,
                season,
                replace,
                dry_run,
                as_json: json,
            })
            .await?
        }

        Commands::Players {
            filters,
            season,
            json,
        } => handle_players(filters, season, json)?,

        Commands::Show { name, season, json } => handle_show(&name, season, json)?,

        Commands::Remove { name, season } => handle_remove(&name, season)?,

        Commands::Seasons { json } => handle_seasons(json)?,
    }

    Ok(())
}
