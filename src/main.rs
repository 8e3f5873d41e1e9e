use clap::Parser;
use itscan::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{fetch, scan, taxonomy},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Scan(_) => "scan",
        Command::Fetch(_) => "fetch",
        Command::Taxonomy(_) => "taxonomy",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Scan(args) => scan::scan(args)?,
        Command::Fetch(args) => fetch::fetch(args)?,
        Command::Taxonomy(args) => taxonomy::taxonomy(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
