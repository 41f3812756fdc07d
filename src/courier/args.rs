use clap::Parser;
use std::path::PathBuf;

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(about = "An interactive delivery book for small courier businesses", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use this delivery book file instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
