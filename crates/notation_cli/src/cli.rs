use std::path::PathBuf;

use clap::{Parser, Subcommand};
use notation_client::{BASE_ADDRESS_ENV, DEFAULT_BASE_ADDRESS, SESSION_TOKEN_ENV};

use crate::logging::LogDestination;

/// Publish notation files to the score-hosting service.
#[derive(Parser, Debug)]
#[command(name = "notation")]
#[command(version)]
pub struct Args {
    /// Session cookie value of a logged-in account
    #[arg(long, env = SESSION_TOKEN_ENV, hide_env_values = true)]
    pub session: String,

    /// Service base address
    #[arg(long, env = BASE_ADDRESS_ENV, default_value = DEFAULT_BASE_ADDRESS)]
    pub base_address: String,

    /// Per-call timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Log every call at debug level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List scores on the account's listing page
    List,
    /// Create, upload, enable embedding and print the embed URL
    Publish {
        file: PathBuf,
        /// Slice left over from an earlier publish; deleted first, failures ignored
        #[arg(long)]
        replace: Option<String>,
    },
    /// Create an empty slice and print its id
    Create,
    /// Upload a file into an existing slice
    Upload { slice_id: String, file: PathBuf },
    /// Print the score slug of a slice
    ScoreId { slice_id: String },
    /// Enable or disable embedding of a score
    Embed {
        score_id: String,
        #[arg(long)]
        disable: bool,
    },
    /// Delete a slice
    Delete { slice_id: String },
}
