use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Item list to pack, `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder the placements JSON and page SVGs are written to
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    /// JSON config; falls back to the default config if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
