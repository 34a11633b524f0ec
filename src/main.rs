mod cli;
mod config;
mod handlers;
mod host;
mod hooks;
mod logger;
mod mode;
mod resolver;
mod zlua;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;
use cli::{Cli, Commands};
use handlers::{Session, hook, info, init, jump};

fn main() -> ExitCode {
    logger::init();
    let argv: Vec<OsString> = env::args_os().collect();

    let command = match cli::passthrough_args(&argv) {
        Some(args) => Commands::Z { args },
        None => Cli::parse_from(&argv).command,
    };

    if let Commands::Init { shell } = &command {
        return report(init::handle_init(shell));
    }

    // Nothing works without lua and z.lua, so this is fatal.
    let session = match Session::start() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("zj: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    report(match command {
        Commands::Z { args } => jump::handle_jump(&session, args),
        Commands::Add { path } => hook::handle_hook(&session, path),
        Commands::Info => info::handle_info(&session),
        Commands::Init { .. } => Ok(()),
    })
}

fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "❌".red(), e);
            ExitCode::FAILURE
        }
    }
}
