mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            input,
            output,
            include_fuzzy,
            big_endian,
        } => {
            commands::compile::handle(&input, &output, include_fuzzy, big_endian)?;
        }

        Commands::Inspect {
            input,
            format,
            big_endian,
        } => {
            commands::inspect::handle(&input, format, big_endian)?;
        }

        Commands::Lookup {
            input,
            text,
            context,
            big_endian,
        } => {
            commands::lookup::handle(&input, &text, context.as_deref(), big_endian)?;
        }
    }

    Ok(())
}
