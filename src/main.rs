#![deny(clippy::mod_module_files)]
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

mod bits;
mod commands;
mod config;
mod describe;
mod error;
mod git;
mod logging;

use config::DescribeConfig;
use git::GitCli;

/// Without arguments, prints a fingerprint of which submodules moved away
/// from their recorded commit. Given a fingerprint, prints what it says
/// about each submodule of the current work tree.
#[derive(Parser, Debug)]
#[command(name = "git-submodule-describe", disable_help_flag = true)]
struct Cli {
    /// Fingerprint printed by an earlier run
    fingerprint: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = DescribeConfig::load()?;
    let git = GitCli::from_config(&config);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.fingerprint {
        Some(fingerprint) => commands::decode::handle(&git, &mut output, &fingerprint)?,
        None => commands::encode::handle(&git, &mut output)?,
    }

    output.flush()?;
    Ok(())
}
