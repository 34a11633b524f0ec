use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zj", version, about = "zj: jump around, backed by z.lua")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Jump to the best match for the keywords (flags go to z.lua)
    #[command(disable_help_flag = true)]
    Z {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,
    },

    /// Record a visited directory in z.lua's history
    #[command(visible_alias = "hook")]
    Add { path: PathBuf },

    /// Show the resolved interpreter, script and data file
    Info,

    /// Print the shell integration snippet
    Init {
        #[arg(default_value = "zsh")]
        shell: String,
    },
}

/// `zj z ...` skips clap entirely so `-h` and `--` reach z.lua untouched.
pub fn passthrough_args(argv: &[OsString]) -> Option<Vec<OsString>> {
    match argv.get(1).and_then(|a| a.to_str()) {
        Some("z") => Some(argv.iter().skip(2).cloned().collect()),
        _ => None,
    }
}
