//! SVG chart generation primitives for standalone figure files.
//!
//! Provides building blocks for accessible, print-ready SVG documents:
//! - viewBox-based scaling with explicit width/height for standalone viewing
//! - CSS variable integration (`var(--color-*)` with hex fallbacks)
//! - Accessibility: `<title>` elements for screen readers and hover tooltips

mod builder;
mod chart;
mod data;
mod element;
mod flow;
mod format;
mod grouped;
mod pie;
mod style;

pub use builder::SvgBuilder;
pub use chart::{BarChart, HorizontalBarChart};
pub use data::{DataPoint, Series};
pub use element::{Axis, Bar, Label, Legend, Line, SvgElement};
pub use flow::{FlowBox, connector};
pub use format::{format_decimal, format_growth, format_thousands, html_escape};
pub use grouped::GroupedBarChart;
pub use pie::PieChart;
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
