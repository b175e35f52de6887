use std::path::PathBuf;

use censor_core::{Category, CategorySet};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "censor")]
#[command(about = "Censor sensitive information in text documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Glob patterns selecting input files
    #[arg(long, value_name = "PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Directory to store censored files
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,

    /// File to write statistics to, or the special names stdout / stderr
    #[arg(long, value_name = "PATH")]
    pub stats: Option<String>,

    /// Censor names
    #[arg(long)]
    pub names: bool,

    /// Censor dates
    #[arg(long)]
    pub dates: bool,

    /// Censor phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Censor addresses
    #[arg(long)]
    pub addresses: bool,

    /// Recognizer model file (defaults to the built-in English model)
    #[arg(long, value_name = "PATH", env = "CENSOR_MODEL")]
    pub model: Option<PathBuf>,

    /// Config file
    #[arg(long, value_name = "PATH", env = "CENSOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip files that cannot be censored instead of aborting
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    /// Categories selected on the command line
    pub fn flags(&self) -> CategorySet {
        [
            (self.names, Category::Names),
            (self.dates, Category::Dates),
            (self.addresses, Category::Addresses),
            (self.phones, Category::Phones),
        ]
        .into_iter()
        .filter_map(|(enabled, category)| enabled.then_some(category))
        .collect()
    }
}
