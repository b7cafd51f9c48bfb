mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            input,
            json,
            raw,
            tag,
            countable_tags,
            players,
        } => {
            commands::show::handle(
                &input,
                json,
                raw,
                tag.as_deref(),
                countable_tags.as_deref(),
                players,
            )?;
        }

        Commands::Counts {
            input,
            json,
            countable_tags,
            players,
        } => {
            commands::counts::handle(&input, json, countable_tags.as_deref(), players)?;
        }
    }

    Ok(())
}
