use clap::Parser;

use review_figures::cli::{Cli, Commands};
use review_figures::commands::{run_figures, run_init, run_rank, run_table, run_validate};
use review_figures::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Figures(args) => run_figures(args, &cli),
        Commands::Table(args) => run_table(args, &cli),
        Commands::Rank(args) => run_rank(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
