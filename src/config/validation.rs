//! Configuration semantic validation.
//!
//! Range checks on values that parse fine but make no sense.

use indexmap::IndexSet;

use crate::config::Config;
use crate::{Result, ReviewError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a tolerance is negative or non-finite, the figure
/// width is not positive, `top_growth` is zero, or a figure is listed twice.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    config.validation.check()?;
    validate_figures_section(config)
}

fn validate_figures_section(config: &Config) -> Result<()> {
    let figures = &config.figures;

    if !figures.width.is_finite() || figures.width <= 0.0 {
        return Err(ReviewError::Config(format!(
            "figures.width must be a positive number, got {}",
            figures.width
        )));
    }

    if figures.top_growth == 0 {
        return Err(ReviewError::Config(
            "figures.top_growth must be at least 1".to_string(),
        ));
    }

    let mut seen = IndexSet::new();
    for kind in &figures.enabled {
        if !seen.insert(kind) {
            return Err(ReviewError::Config(format!(
                "figures.enabled lists '{kind}' more than once"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
