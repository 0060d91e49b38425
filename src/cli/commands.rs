//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "souvenir")]
#[command(about = "Travel journal in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Compose and save a new entry
    New {
        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Free-text narrative
        #[arg(short, long, default_value = "")]
        content: String,

        /// Attach a photo captured from this JPEG file
        #[arg(long, value_name = "JPEG_FILE")]
        photo: Option<PathBuf>,

        /// Record a voice memo from this audio file
        #[arg(long, value_name = "AUDIO_FILE")]
        voice: Option<PathBuf>,

        /// Detect current coordinates (reads SOUVENIR_LOCATION)
        #[arg(long)]
        locate: bool,
    },

    /// List stored entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show {
        /// Entry id
        id: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
