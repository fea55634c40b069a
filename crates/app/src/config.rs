//! Configuration for the huffpack command line.
//!
//! Arguments are parsed with clap and resolved into a [`Config`] that the
//! rest of the binary reads. There are exactly three actions: `load`,
//! `encode` and `decode`.

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// huffpack: static Huffman compression for single files
#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(author, version, about = "Compress and restore files with a static Huffman code", long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the symbol table or summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print statistics as key=value lines
    #[arg(long, global = true)]
    pub metrics: bool,

    /// List all 256 byte values, not only those present
    #[arg(long, global = true)]
    pub all: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Read a file and show its byte frequencies and codes.
    Load {
        /// File to inspect
        input: PathBuf,
    },

    /// Compress a file into a huffpack container.
    Encode {
        /// File to compress
        input: PathBuf,

        /// Container to write (conventionally *.huf)
        output: PathBuf,
    },

    /// Restore a file from a huffpack container.
    Decode {
        /// Container to read
        input: PathBuf,

        /// Where to write the restored bytes
        output: PathBuf,
    },
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub log_level: LevelFilter,
    pub print_table: bool,
    pub print_summary: bool,
    pub print_metrics: bool,
    pub show_all: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let log_level = match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Config {
            command: cli.command,
            log_level,
            print_table: !cli.quiet,
            print_summary: !cli.quiet,
            print_metrics: cli.metrics,
            show_all: cli.all,
        }
    }
}

impl Config {
    /// Parse the process arguments.
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}
