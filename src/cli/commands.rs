use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bidintel",
    about = "Competitive opportunity scoring and pricing optimization"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single opportunity
    Analyze {
        /// JSON opportunity (customer_grade, category, estimated_value, urgency_level, ...)
        json: String,
    },
    /// Analyze a portfolio of opportunities
    Portfolio {
        /// JSON array of opportunities
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        json: Option<String>,
        /// Read the JSON array from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Omit per-opportunity analyses from the output
        #[arg(long)]
        summary_only: bool,
    },
    /// Show the competitor reference table
    Competitors,
    /// Run the built-in demonstration portfolio
    Demo,
}
