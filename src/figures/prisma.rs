//! PRISMA-ScR flow diagram.

use crate::output::svg::{
    ChartColor, FlowBox, Label, SvgBuilder, TextAnchor, connector, format_growth, format_thousands,
};
use crate::stats::{PrismaFlow, ReviewCorpus, rank_by_count, top_by_growth};

const WIDTH: f64 = 820.0;
const HEIGHT: f64 = 880.0;

const MAIN_X: f64 = 150.0;
const SIDE_X: f64 = 490.0;
const BOX_WIDTH: f64 = 280.0;
const BOX_HEIGHT: f64 = 84.0;
/// Top edge of each stage row: identification, screening, eligibility, included.
const STAGE_Y: [f64; 4] = [110.0, 260.0, 410.0, 560.0];
const SUMMARY_Y: f64 = 710.0;

const FLOW_BLUE: &str = "#3182bd";
const EXCLUDED_GRAY: &str = "#969696";
const INCLUDED_GREEN: &str = "#31a354";

fn n(value: u64) -> String {
    format!("(n = {})", format_thousands(i64::try_from(value).unwrap_or(i64::MAX)))
}

fn main_box(stage: usize, color: &str, lines: [String; 3]) -> FlowBox {
    FlowBox::new(MAIN_X, STAGE_Y[stage], BOX_WIDTH, BOX_HEIGHT)
        .with_color(ChartColor::hex(color))
        .with_lines(lines)
}

fn side_box(stage: usize, lines: [String; 3]) -> FlowBox {
    FlowBox::new(SIDE_X, STAGE_Y[stage], BOX_WIDTH, BOX_HEIGHT)
        .with_color(ChartColor::hex(EXCLUDED_GRAY))
        .with_lines(lines)
}

fn stage_label(stage: usize, text: &str, color: &str) -> Label {
    Label::new(MAIN_X, STAGE_Y[stage] - 12.0, text)
        .with_size(12.0)
        .with_color(ChartColor::hex(color))
        .bold()
}

/// Summary of the clustering step: the two largest and two fastest-growing clusters.
fn clustering_lines(corpus: &ReviewCorpus) -> Vec<String> {
    let largest: Vec<String> = rank_by_count(corpus)
        .into_iter()
        .take(2)
        .map(|r| format!("{} {}", r.name, n(u64::from(r.count))))
        .collect();
    let fastest: Vec<String> = top_by_growth(corpus, 2)
        .into_iter()
        .map(|r| format!("{} ({})", r.name, format_growth(r.growth_percent)))
        .collect();

    vec![
        format!("Thematic clustering (k = {})", corpus.len()),
        format!("Largest clusters: {}", largest.join(", ")),
        format!("Highest growth: {}", fastest.join(", ")),
    ]
}

fn heading(corpus: &ReviewCorpus) -> [Label; 2] {
    let period = corpus.period();
    [
        Label::new(WIDTH / 2.0, 34.0, "PRISMA-ScR Flow Diagram")
            .with_size(18.0)
            .with_anchor(TextAnchor::Middle)
            .bold(),
        Label::new(
            WIDTH / 2.0,
            58.0,
            format!("Scoping review, {}-{}", period.start, period.end),
        )
        .with_size(12.0)
        .with_anchor(TextAnchor::Middle)
        .with_color(ChartColor::css_var("text-muted"))
        .italic(),
    ]
}

/// Render the screening flow, from identified records down to the clustered corpus.
#[must_use]
pub fn flow_diagram(flow: &PrismaFlow, corpus: &ReviewCorpus) -> String {
    let blue = ChartColor::hex(FLOW_BLUE);
    let gray = ChartColor::hex(EXCLUDED_GRAY);
    let green = ChartColor::hex(INCLUDED_GREEN);

    let identified = main_box(
        0,
        FLOW_BLUE,
        [
            "Records identified".to_string(),
            format!("from {}", flow.source),
            n(flow.identified),
        ],
    );
    let duplicates = side_box(
        0,
        [
            "Duplicate records".to_string(),
            "removed".to_string(),
            n(flow.duplicates_removed),
        ],
    );
    let screened = main_box(
        1,
        FLOW_BLUE,
        ["Records screened".to_string(), "on title and abstract".to_string(), n(flow.screened)],
    );
    let no_abstract = side_box(
        1,
        [
            "Records excluded:".to_string(),
            "no valid abstract".to_string(),
            n(flow.excluded_no_abstract),
        ],
    );
    let assessed = main_box(
        2,
        FLOW_BLUE,
        [
            "Full-text articles".to_string(),
            "assessed for eligibility".to_string(),
            n(flow.assessed),
        ],
    );
    let ineligible = side_box(
        2,
        [
            "Articles excluded:".to_string(),
            format!("non-English {}", n(flow.excluded_non_english)),
            format!("non-research {}", n(flow.excluded_non_research)),
        ],
    );
    let included = main_box(
        3,
        INCLUDED_GREEN,
        ["Studies included".to_string(), "in analysis".to_string(), n(flow.included)],
    )
    .with_heading();
    let summary = FlowBox::new(MAIN_X, SUMMARY_Y, SIDE_X + BOX_WIDTH - MAIN_X, 110.0)
        .with_color(green.clone())
        .with_lines(clustering_lines(corpus))
        .with_heading();

    let [title, subtitle] = heading(corpus);
    let side = |from, to| connector(from, to, gray.clone(), 1.5);
    let down = |from, to| connector(from, to, blue.clone(), 2.0);
    let summary_top = (included.bottom_center().0, SUMMARY_Y);

    SvgBuilder::new(WIDTH, HEIGHT)
        .with_title("PRISMA-ScR Flow Diagram")
        .push_element(&title)
        .push_element(&subtitle)
        .push_element(&stage_label(0, "IDENTIFICATION", FLOW_BLUE))
        .push_element(&stage_label(1, "SCREENING", FLOW_BLUE))
        .push_element(&stage_label(2, "ELIGIBILITY", FLOW_BLUE))
        .push_element(&stage_label(3, "INCLUDED", INCLUDED_GREEN))
        .push_element(&identified)
        .push_element(&duplicates)
        .push_element(&screened)
        .push_element(&no_abstract)
        .push_element(&assessed)
        .push_element(&ineligible)
        .push_element(&included)
        .push_element(&summary)
        .push_element(&side(identified.right_middle(), duplicates.left_middle()))
        .push_element(&side(screened.right_middle(), no_abstract.left_middle()))
        .push_element(&side(assessed.right_middle(), ineligible.left_middle()))
        .push_element(&down(identified.bottom_center(), screened.top_center()))
        .push_element(&down(screened.bottom_center(), assessed.top_center()))
        .push_element(&down(assessed.bottom_center(), included.top_center()))
        .push_element(&connector(included.bottom_center(), summary_top, green, 2.0))
        .build()
}

#[cfg(test)]
#[path = "prisma_tests.rs"]
mod tests;
