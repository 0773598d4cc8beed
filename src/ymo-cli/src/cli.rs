//! CLI argument definitions for ymo

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ymo")]
#[command(about = "PO to YMO translation catalog compiler", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the inspect command
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a PO catalog into a YMO file
    #[command(visible_alias = "c")]
    Compile {
        /// Path to the .po input file
        input: PathBuf,

        /// Path to the .ymo output file
        output: PathBuf,

        /// Include entries flagged fuzzy
        #[arg(long)]
        include_fuzzy: bool,

        /// Encode keys and payloads as UTF-16BE instead of UTF-16LE
        #[arg(long)]
        big_endian: bool,
    },

    /// Show the index and translations of a YMO file
    #[command(visible_alias = "i")]
    Inspect {
        /// Path to the .ymo file
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Decode payloads as UTF-16BE instead of UTF-16LE
        #[arg(long)]
        big_endian: bool,
    },

    /// Look up the translation for a source string in a YMO file
    #[command(visible_alias = "l")]
    Lookup {
        /// Path to the .ymo file
        input: PathBuf,

        /// Source string to translate
        text: String,

        /// Disambiguating msgctxt for the lookup key
        #[arg(short, long)]
        context: Option<String>,

        /// Decode payloads as UTF-16BE instead of UTF-16LE
        #[arg(long)]
        big_endian: bool,
    },
}
