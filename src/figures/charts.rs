//! Bar and pie figures (Figures 1 to 5).

use crate::config::FiguresConfig;
use crate::output::svg::{
    BarChart, ChartColor, DataPoint, GroupedBarChart, HorizontalBarChart, PieChart, Series,
    SvgElement, format_decimal, format_growth, format_thousands,
};
use crate::stats::{
    ClusterRecord, GrowthBand, ReviewDataset, rank_by_count, rank_by_growth, top_by_growth,
};

const START_YEAR_COLOR: &str = "#3182bd";
const END_YEAR_COLOR: &str = "#31a354";
const TOP_START_COLOR: &str = "#9ecae1";
const TOP_END_COLOR: &str = "#de2d26";

/// Room under vertical charts for labels rotated by [`LABEL_ROTATION`].
const ROTATED_LABEL_SPACE: f64 = 190.0;
const LABEL_ROTATION: f64 = -40.0;
const VERTICAL_CHART_HEIGHT: f64 = 600.0;

fn band_color(band: GrowthBand) -> ChartColor {
    match band {
        GrowthBand::Explosive => ChartColor::hex("#e31a1c"),
        GrowthBand::High => ChartColor::hex("#fd8d3c"),
        GrowthBand::Moderate => ChartColor::hex("#3182bd"),
    }
}

fn period_span(dataset: &ReviewDataset) -> String {
    let period = dataset.corpus.period();
    format!("{}-{}", period.start, period.end)
}

fn documents(total: u64) -> String {
    format_thousands(i64::try_from(total).unwrap_or(i64::MAX))
}

fn count_label(record: &ClusterRecord) -> String {
    format!(
        "{} ({}%)",
        format_thousands(i64::from(record.count)),
        format_decimal(record.percent)
    )
}

/// Start-year and end-year series over `records`, in the given order.
fn year_series(
    dataset: &ReviewDataset,
    records: &[&ClusterRecord],
    colors: (&str, &str),
) -> Vec<Series> {
    let period = dataset.corpus.period();
    vec![
        Series::new(
            period.start.to_string(),
            ChartColor::hex(colors.0),
            records.iter().map(|r| f64::from(r.count_year_start)).collect(),
        ),
        Series::new(
            period.end.to_string(),
            ChartColor::hex(colors.1),
            records.iter().map(|r| f64::from(r.count_year_end)).collect(),
        ),
    ]
}

/// Figure 1: documents per cluster as horizontal bars, largest on top.
#[must_use]
pub fn distribution(dataset: &ReviewDataset, settings: &FiguresConfig) -> String {
    let ranked = rank_by_count(&dataset.corpus);
    // Darkest end of the map for the largest cluster
    let colors = ChartColor::viridis_range(ranked.len(), 0.2, 0.9);
    let data = ranked
        .iter()
        .zip(colors)
        .map(|(record, color)| {
            DataPoint::new(record.name.as_str(), f64::from(record.count))
                .with_color(color)
                .with_annotation(count_label(record))
        })
        .collect();

    HorizontalBarChart::new("Figure 1. Distribution of documents by thematic cluster", data)
        .with_width(settings.width)
        .with_subtitle(format!(
            "(N = {} documents, period {})",
            documents(dataset.total_documents),
            period_span(dataset)
        ))
        .with_margins(240.0, 110.0, 64.0, 40.0)
        .with_x_label("Number of documents (N)")
        .render()
}

/// Figure 2: start-year vs end-year publications per cluster, corpus order.
#[must_use]
pub fn temporal_evolution(dataset: &ReviewDataset, settings: &FiguresConfig) -> String {
    let records: Vec<&ClusterRecord> = dataset.corpus.iter().collect();
    let period = dataset.corpus.period();
    let categories = records.iter().map(|r| r.name.clone()).collect();

    GroupedBarChart::new(
        "Figure 2. Temporal evolution of publications by cluster",
        categories,
        year_series(dataset, &records, (START_YEAR_COLOR, END_YEAR_COLOR)),
    )
    .with_size(settings.width, VERTICAL_CHART_HEIGHT)
    .with_subtitle(format!("Publications in {} vs {}", period.start, period.end))
    .with_rotated_labels(LABEL_ROTATION, ROTATED_LABEL_SPACE)
    .with_y_label("Number of publications")
    .render()
}

/// Figure 3: growth per cluster, highest first, colored by growth band.
#[must_use]
pub fn growth_rate(dataset: &ReviewDataset, settings: &FiguresConfig) -> String {
    let data = rank_by_growth(&dataset.corpus)
        .into_iter()
        .map(|record| {
            DataPoint::new(record.name.as_str(), record.growth_percent)
                .with_color(band_color(GrowthBand::classify(record.growth_percent)))
                .with_annotation(format_growth(record.growth_percent))
        })
        .collect();
    let legend = GrowthBand::ALL
        .into_iter()
        .map(|band| (band.label().to_string(), band_color(band)))
        .collect();

    BarChart::new(
        format!("Figure 3. Growth rate by cluster ({})", period_span(dataset)),
        data,
    )
    .with_size(settings.width, VERTICAL_CHART_HEIGHT)
    .with_subtitle("Ordered from highest to lowest growth")
    .with_rotated_labels(LABEL_ROTATION, ROTATED_LABEL_SPACE)
    .with_y_label("Growth (%)")
    .with_legend(legend)
    .render()
}

/// Figure 4: the `settings.top_growth` fastest-growing clusters.
#[must_use]
pub fn top_growth(dataset: &ReviewDataset, settings: &FiguresConfig) -> String {
    let top = top_by_growth(&dataset.corpus, settings.top_growth);
    let categories = top.iter().map(|r| r.name.clone()).collect();
    let annotations = top
        .iter()
        .map(|r| Some(format_growth(r.growth_percent)))
        .collect();

    GroupedBarChart::new(
        format!(
            "Figure 4. Fastest-growing clusters ({})",
            period_span(dataset)
        ),
        categories,
        year_series(dataset, &top, (TOP_START_COLOR, TOP_END_COLOR)),
    )
    .with_size(settings.width, 420.0)
    .with_subtitle(format!("Top {} emerging areas", top.len()))
    .with_rotated_labels(0.0, 40.0)
    .with_y_label("Number of publications")
    .with_group_annotations(annotations)
    .with_values(true)
    .render()
}

/// Figure 5: each cluster's share of the clustered documents.
#[must_use]
pub fn corpus_share(dataset: &ReviewDataset, settings: &FiguresConfig) -> String {
    let data = dataset
        .corpus
        .iter()
        .map(|record| DataPoint::new(record.name.as_str(), f64::from(record.count)))
        .collect();

    PieChart::new("Figure 5. Thematic distribution of the corpus", data)
        .with_size(settings.width, 560.0)
        .with_subtitle(format!(
            "(N = {} documents, period {})",
            documents(dataset.total_documents),
            period_span(dataset)
        ))
        .with_legend_width(340.0)
        .render()
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
