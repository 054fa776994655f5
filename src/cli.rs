use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexiscore",
    version,
    about = "Naming and comment understandability scoring for source files"
)]
pub struct Cli {
    /// Run root holding the input directory, dictionary and report
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
