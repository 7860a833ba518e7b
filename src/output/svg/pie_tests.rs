//! Tests for the pie chart.

use super::*;

fn quarter_split() -> PieChart {
    PieChart::new(
        "Share",
        vec![DataPoint::new("A", 1.0), DataPoint::new("B", 3.0)],
    )
}

#[test]
fn slices_start_at_twelve_o_clock_and_run_clockwise() {
    let svg = quarter_split().render();

    // radius 160 centered at (180, 228)
    assert!(svg.contains(r#"d="M180,228 L180.00,68.00 A160,160 0 0 1 340.00,228.00 Z""#));
    // The 75% slice needs the large-arc flag
    assert!(svg.contains(" 0 1 1 180.00,68.00 Z\""));
}

#[test]
fn legend_lists_percentages() {
    let svg = quarter_split().render();
    assert!(svg.contains(">A (25%)</text>"));
    assert!(svg.contains(">B (75%)</text>"));
}

#[test]
fn slice_titles_carry_value_and_share() {
    let svg = quarter_split().render();
    assert!(svg.contains("<title>B: 3 (75%)</title>"));
}

#[test]
fn default_colors_follow_categorical_palette() {
    let svg = quarter_split().render();
    assert!(svg.contains(&format!("fill=\"{}\"", ChartColor::categorical(0).to_css())));
    assert!(svg.contains(&format!("fill=\"{}\"", ChartColor::categorical(1).to_css())));
}

#[test]
fn single_slice_is_a_full_circle() {
    let svg = PieChart::new("Whole", vec![DataPoint::new("Only", 5.0)]).render();
    assert!(svg.contains("<circle"));
    assert!(!svg.contains("<path"));
    assert!(svg.contains(">Only (100%)</text>"));
}

#[test]
fn tiny_slices_have_no_inline_label() {
    let data = vec![DataPoint::new("Big", 99.0), DataPoint::new("Tiny", 1.0)];
    let svg = PieChart::new("Labels", data).render();
    assert!(svg.contains(">99%</text>"));
    assert!(!svg.contains(">1%</text>"));
    // Still listed in the legend
    assert!(svg.contains(">Tiny (1%)</text>"));
}

#[test]
fn non_positive_values_get_no_slice() {
    let data = vec![
        DataPoint::new("Zero", 0.0),
        DataPoint::new("Negative", -4.0),
        DataPoint::new("Real", 2.0),
    ];
    let chart = PieChart::new("Filtered", data);
    assert!((chart.total() - 2.0).abs() < f64::EPSILON);

    let svg = chart.render();
    assert!(!svg.contains("Zero"));
    assert!(!svg.contains("Negative"));
}

#[test]
fn empty_pie_shows_message() {
    let chart = PieChart::new("Nothing", vec![DataPoint::new("Zero", 0.0)]);
    assert!(chart.render().contains("No data available"));
}

#[test]
fn custom_size() {
    let svg = quarter_split()
        .with_size(900.0, 520.0)
        .with_legend_width(320.0)
        .with_subtitle("Share of corpus")
        .render();
    assert!(svg.contains("viewBox=\"0 0 900 520\""));
    assert!(svg.contains(">Share of corpus</text>"));
}
