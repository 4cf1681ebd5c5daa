use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fired", about = "Interactive terminal file manager")]
pub struct Cli {
    /// Print listings as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Directory to start the session in
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,
}
