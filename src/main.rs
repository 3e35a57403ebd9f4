//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use cricket_stats::{
    cli::{Commands, CricketStats},
    commands::{
        open_database,
        player::{handle_add, handle_ban, handle_show},
        update_innings::handle_update_innings,
    },
};
use tracing::Level;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = CricketStats::parse();

    tracing_subscriber::fmt()
        .with_max_level(if app.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let mut db = open_database(app.db)?;

    match app.command {
        Commands::Add {
            name,
            country,
            role,
        } => handle_add(&mut db, &name, country, role)?,

        Commands::UpdateInnings { scorecard, json } => {
            handle_update_innings(&mut db, &scorecard, json)?;
        }

        Commands::Show { name, json } => handle_show(&db, &name, json)?,

        Commands::Ban { name } => handle_ban(&mut db, &name)?,
    }

    Ok(())
}
