//! CLI entry point. Argument parsing, error reporting, and exit codes; the
//! actual simulation lives in the `routesim` library crate.

use clap::{CommandFactory, Parser};

use routesim::cli::Cli;
use routesim::driver;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == clap::error::ErrorKind::DisplayHelp
                || err.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            print!("{err}");
            std::process::exit(0);
        }
        Err(_) => {
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    let default_level = if cli.verbose { "trace" } else { "info" };
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_level));

    match driver::run(&cli.topology, &cli.messages, &cli.changes, &cli.output, cli.engine) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
