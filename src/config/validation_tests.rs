use super::*;
use crate::figures::FigureKind;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn zero_width_is_rejected() {
    let mut config = Config::default();
    config.figures.width = 0.0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("figures.width"));
}

#[test]
fn zero_top_growth_is_rejected() {
    let mut config = Config::default();
    config.figures.top_growth = 0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("top_growth"));
}

#[test]
fn duplicate_figure_is_rejected() {
    let mut config = Config::default();
    config.figures.enabled = vec![FigureKind::GrowthRate, FigureKind::GrowthRate];
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("growth_rate"));
}

#[test]
fn infinite_tolerance_is_rejected() {
    let mut config = Config::default();
    config.validation.percent_sum_tolerance = f64::INFINITY;
    assert!(validate_config_semantics(&config).is_err());
}
