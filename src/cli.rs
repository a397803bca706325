use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enriches the meaning field of each kanji with its Hán Việt readings.
    Enrich {
        /// The path to the input kanji bank dictionary file.
        #[arg(short, long)]
        dictionary: PathBuf,
        /// The path to the input kanji file.
        #[arg(short, long)]
        kanji: PathBuf,
        /// The path to the output kanji file.
        #[arg(short, long)]
        output: PathBuf,
        /// A pause in milliseconds between kanji entries.
        #[arg(long, default_value_t = 0)]
        delay: u64,
    },
    /// Splits a kanji file into five files by JLPT level category.
    Split {
        /// The path to the input kanji file.
        #[arg(short, long)]
        kanji: PathBuf,
        /// The directory to write the per-level kanji files into.
        #[arg(short, long)]
        output_dir: PathBuf,
    },
}
