use clap::Parser;
use log::LevelFilter;

use docs_lint::cli::{Cli, Commands};
use docs_lint::commands::{run_check, run_config, run_init, run_rules};

const fn verbosity_to_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(verbosity_to_level(cli.verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
        Commands::Rules => run_rules(),
    };

    std::process::exit(exit_code);
}
