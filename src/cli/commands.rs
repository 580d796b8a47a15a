use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// `logograde` - AI-assisted grading of student logo designs.
#[derive(Parser, Debug)]
#[command(name = "logograde")]
#[command(version)]
#[command(about = "Grade student logo designs with Gemini and keep a local record.", long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a logo image and save the evaluation
    Evaluate {
        /// Student's full name
        #[arg(short, long)]
        name: String,

        /// Student's class section (paralelo), e.g. "4to B"
        #[arg(short, long)]
        parallel: String,

        /// Path to the logo image (PNG, JPEG, WebP, GIF...)
        #[arg(short, long)]
        image: PathBuf,

        /// The student's description of the logo's concept
        #[arg(short, long, default_value = "")]
        context: String,

        /// Also write the text report into this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },

    /// List saved evaluations, newest first
    List,

    /// Show one evaluation in full
    Show {
        /// Evaluation id or a unique prefix of it
        id: String,
    },

    /// Write the text report for an evaluation
    Report {
        /// Evaluation id or a unique prefix of it
        id: String,

        /// Directory for the report file (default: current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Delete an evaluation
    Delete {
        /// Evaluation id or a unique prefix of it
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show configuration and store status
    Status,
}
