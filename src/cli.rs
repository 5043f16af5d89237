use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "barhop", version, about = "Community-curated bar guide backend")]
pub struct Args {
    /// Configuration file (defaults to barhop.toml in the working directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
