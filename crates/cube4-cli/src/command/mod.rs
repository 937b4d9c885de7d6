use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging;

use self::{play::PlayArg, script::ScriptArg};

mod play;
mod script;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write trace output to this file (filter with `RUST_LOG`)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Drop pieces into the given columns and print the resulting board
    Script(#[clap(flatten)] ScriptArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Script(arg) => script::run(&arg)?,
    }
    Ok(())
}
