//! bundlemap - vendor bundle resolver
//!
//! Command line entry point; see the library crate for the resolver itself.

use clap::Parser;

use bundlemap::cli::{Cli, Commands};
use bundlemap::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.registry, args),
        Commands::List(args) => commands::list::run(cli.registry, args),
        Commands::Show(args) => commands::show::run(cli.registry, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        log::debug!("{e:?}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
