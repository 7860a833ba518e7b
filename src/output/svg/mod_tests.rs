//! Tests for SVG module exports.

use super::*;

#[test]
fn exports_are_available() {
    let _: ChartColor = ChartColor::hex("#000");
    let _: TextAnchor = TextAnchor::Middle;
    let _: DataPoint = DataPoint::new("test", 100.0);
    let _: Series = Series::new("2023", ChartColor::hex("#000"), Vec::new());
}

#[test]
fn charts_compose_into_documents() {
    let data = vec![DataPoint::new("A", 2.0), DataPoint::new("B", 6.0)];
    let documents = [
        BarChart::new("bar", data.clone()).render(),
        HorizontalBarChart::new("hbar", data.clone()).render(),
        PieChart::new("pie", data).render(),
        SvgBuilder::new(100.0, 100.0)
            .push_element(&FlowBox::new(0.0, 0.0, 50.0, 20.0).with_lines(["box"]))
            .build(),
    ];

    for svg in documents {
        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(svg.ends_with("</svg>"), "{svg}");
        assert_eq!(svg.matches("<svg").count(), 1);
    }
}
