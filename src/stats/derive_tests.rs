use super::*;
use crate::stats::model::StudyPeriod;

fn corpus_of(records: Vec<ClusterRecord>) -> ReviewCorpus {
    ReviewCorpus::new(StudyPeriod::default(), records)
}

mod total_tests {
    use super::*;

    #[test]
    fn sums_counts() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("A", 10, 0.0, 1, 2, 100.0),
            ClusterRecord::new("B", 32, 0.0, 1, 2, 100.0),
        ]);
        assert_eq!(total(&corpus), 42);
    }

    #[test]
    fn empty_corpus_totals_zero() {
        assert_eq!(total(&corpus_of(Vec::new())), 0);
    }
}

mod derived_percent_tests {
    use super::*;

    #[test]
    fn computes_share() {
        let record = ClusterRecord::new("A", 25, 25.0, 1, 2, 100.0);
        let pct = derived_percent(&record, 200).unwrap();
        assert!((pct - 12.5).abs() < 1e-9);
    }

    #[test]
    fn zero_total_is_division_by_zero() {
        let record = ClusterRecord::new("Lonely", 0, 0.0, 1, 2, 100.0);
        let err = derived_percent(&record, 0).unwrap_err();
        assert!(matches!(
            err,
            ReviewError::DivisionByZero {
                ref record,
                divisor: Divisor::CorpusTotal,
            } if record == "Lonely"
        ));
    }
}

mod derived_growth_tests {
    use super::*;

    #[test]
    fn computes_percent_change() {
        let record = ClusterRecord::new("NLP & LLMs", 458, 5.5, 70, 238, 240.0);
        let growth = derived_growth(&record).unwrap();
        assert!((growth - 240.0).abs() < 1e-9);
    }

    #[test]
    fn decline_is_negative() {
        let record = ClusterRecord::new("Shrinking", 10, 1.0, 200, 150, -25.0);
        let growth = derived_growth(&record).unwrap();
        assert!((growth + 25.0).abs() < 1e-9);
    }

    #[test]
    fn zero_baseline_is_division_by_zero() {
        let record = ClusterRecord::new("New Topic", 12, 1.0, 0, 12, 0.0);
        let err = derived_growth(&record).unwrap_err();
        assert!(matches!(
            err,
            ReviewError::DivisionByZero {
                ref record,
                divisor: Divisor::BaselineCount,
            } if record == "New Topic"
        ));
    }
}

mod ranking_tests {
    use super::*;

    fn names<'a>(records: &[&'a ClusterRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn rank_by_growth_descending() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("Slow", 1, 0.0, 1, 2, 10.0),
            ClusterRecord::new("Fast", 1, 0.0, 1, 2, 300.0),
            ClusterRecord::new("Medium", 1, 0.0, 1, 2, 120.0),
        ]);
        assert_eq!(names(&rank_by_growth(&corpus)), ["Fast", "Medium", "Slow"]);
    }

    #[test]
    fn rank_by_growth_ties_keep_table_order() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("First", 1, 0.0, 1, 2, 89.0),
            ClusterRecord::new("Top", 1, 0.0, 1, 2, 150.0),
            ClusterRecord::new("Second", 1, 0.0, 1, 2, 89.0),
            ClusterRecord::new("Third", 1, 0.0, 1, 2, 89.0),
        ]);
        assert_eq!(
            names(&rank_by_growth(&corpus)),
            ["Top", "First", "Second", "Third"]
        );
    }

    #[test]
    fn rank_by_count_descending_and_stable() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("Small", 5, 0.0, 1, 2, 0.0),
            ClusterRecord::new("TieA", 20, 0.0, 1, 2, 0.0),
            ClusterRecord::new("Big", 50, 0.0, 1, 2, 0.0),
            ClusterRecord::new("TieB", 20, 0.0, 1, 2, 0.0),
        ]);
        assert_eq!(
            names(&rank_by_count(&corpus)),
            ["Big", "TieA", "TieB", "Small"]
        );
    }

    #[test]
    fn ranking_does_not_reorder_corpus() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("Low", 1, 0.0, 1, 2, 1.0),
            ClusterRecord::new("High", 1, 0.0, 1, 2, 2.0),
        ]);
        let _ = rank_by_growth(&corpus);
        assert_eq!(corpus.records()[0].name, "Low");
    }

    #[test]
    fn top_by_growth_truncates() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("A", 1, 0.0, 1, 2, 1.0),
            ClusterRecord::new("B", 1, 0.0, 1, 2, 3.0),
            ClusterRecord::new("C", 1, 0.0, 1, 2, 2.0),
        ]);
        assert_eq!(names(&top_by_growth(&corpus, 2)), ["B", "C"]);
        assert_eq!(top_by_growth(&corpus, 10).len(), 3);
    }
}

mod year_totals_tests {
    use super::*;

    #[test]
    fn sums_both_years() {
        let corpus = corpus_of(vec![
            ClusterRecord::new("A", 1, 0.0, 10, 30, 0.0),
            ClusterRecord::new("B", 1, 0.0, 5, 7, 0.0),
        ]);
        assert_eq!(year_totals(&corpus), YearTotals { start: 15, end: 37 });
    }
}

mod growth_band_tests {
    use super::*;

    #[test]
    fn classifies_boundaries() {
        assert_eq!(GrowthBand::classify(240.0), GrowthBand::Explosive);
        assert_eq!(GrowthBand::classify(200.0), GrowthBand::Explosive);
        assert_eq!(GrowthBand::classify(199.9), GrowthBand::High);
        assert_eq!(GrowthBand::classify(100.0), GrowthBand::High);
        assert_eq!(GrowthBand::classify(99.0), GrowthBand::Moderate);
        assert_eq!(GrowthBand::classify(-20.0), GrowthBand::Moderate);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<_> = GrowthBand::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(labels, ["Growth ≥200%", "Growth ≥100%", "Growth <100%"]);
    }
}
