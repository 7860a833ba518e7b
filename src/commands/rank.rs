use crate::cli::{Cli, RankArgs, RankKey};
use crate::output::{RankBy, RankingFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, load_dataset, write_output};

pub(crate) const fn rank_key_to_order(key: RankKey) -> RankBy {
    match key {
        RankKey::Growth => RankBy::Growth,
        RankKey::Count => RankBy::Count,
    }
}

#[must_use]
pub fn run_rank(args: &RankArgs, cli: &Cli) -> i32 {
    match run_rank_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print clusters ranked by growth or document count.
///
/// # Errors
/// Returns an error if configuration or dataset loading fails.
pub fn run_rank_impl(args: &RankArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = load_dataset(cli, &config)?;
    let by = rank_key_to_order(args.by);
    let ranked = by.rank(&dataset.corpus, args.limit);
    let output = RankingFormatter::new(args.format).format(by, &ranked)?;
    write_output(None, &output, cli.quiet)
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
