use clap::Parser;

use crate::application::dto::OutputFormat;
use crate::project_model::services::PathLayout;

/// Extract the IDE project model of a multi-module build tree
#[derive(Parser, Debug)]
#[command(name = "build-model")]
#[command(version)]
#[command(
    about = "Extract tasks, dependencies, source layout and diagnostics from a build tree",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Build tree snapshot, or a directory containing one (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file (defaults to build-model.config.yml next to the snapshot)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Skip the sources pass
    #[arg(long)]
    pub no_sources: bool,

    /// Source layout: paired or grouped [default: paired]
    #[arg(long)]
    pub layout: Option<PathLayout>,

    /// Run tasks, dependencies and source layout phases in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Exit with code 1 when the model carries diagnostics
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parses the process arguments, leaving the exit decision to the caller
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
