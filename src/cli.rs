use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::metadata::{PKG_DESCRIPTION, PKG_NAME, PKG_VERSION};

#[derive(Parser, Debug, Clone)]
#[command(name = PKG_NAME)]
#[command(version = PKG_VERSION)]
#[command(about = PKG_DESCRIPTION, long_about = None)]
pub struct Cli {
    /// Directory holding the persisted dashboard state
    #[arg(long, env = "RONIN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive ronin terminal
    Terminal,
    /// Summarize the dashboard state and session
    Status,
    /// Unlock the hidden area with the passphrase
    Login {
        passphrase: String,
    },
    /// Lock the hidden area again
    Logout,
    /// Print version information
    Version,
}
