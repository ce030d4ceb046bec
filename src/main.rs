//! cnab-publish - CNAB bundle publisher
//!
//! Loads a CNAB bundle template, runs `cnab-to-oci fixup` to pin image
//! digests for a target registry and `cnab-to-oci push` to upload the result.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod process;
mod publisher;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Publish(args) => commands::publish::run(&cli.config, args, cli.quiet),
        Commands::Load(args) => commands::load::run(&cli.config, &args),
        Commands::Fixup(args) => commands::fixup::run(&cli.config, &args),
        Commands::Push(args) => commands::push::run(&cli.config, &args, cli.quiet),
        Commands::Version => commands::version::run(&cli.config),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("{}", error::render(&e));
        std::process::exit(1);
    }
}
