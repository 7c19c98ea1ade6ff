use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-ner")]
#[command(about = "Interpret NER output over recipe ingredient lines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging and per-category counts
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print a Prometheus metrics snapshot when the command finishes
    #[arg(long, global = true)]
    pub metrics: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the recipe tree and save it to the database
    Load {
        /// Recipe tree root (default: RECIPES_DIR)
        #[arg(short, long)]
        recipes_dir: Option<PathBuf>,

        /// Store machine-inferred triples for lines that classify cleanly
        #[arg(long)]
        infer: bool,
    },

    /// Classify every ingredient of the collection and report the results
    Check {
        /// Recipe tree root (default: RECIPES_DIR)
        #[arg(short, long)]
        recipes_dir: Option<PathBuf>,

        /// Also list the lines that need review
        #[arg(long)]
        show_invalid: bool,
    },

    /// Show the annotator output for typed lines
    Annotate {
        /// Walk the recipe collection instead of reading lines
        #[arg(long)]
        collection: bool,
    },

    /// Review unverified ingredients stored in the database
    Verify,

    /// List foods without any price
    Prices {
        /// Price list (default: PRICES_PATH)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Recompute the price of every recipe
    UpdatePrices {
        /// Price list (default: PRICES_PATH)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
