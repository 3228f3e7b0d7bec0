//! Tests for the scenario data model.

use super::*;
use crate::error::TradeoffError;

mod metric_descriptor {
    use super::*;

    #[test]
    fn test_qualitative_range_spans_options() {
        let m = MetricDescriptor::qualitative("tier", "Tier", ["low", "mid", "high"]);
        assert_eq!(m.range_min, 0.0);
        assert_eq!(m.range_max, 2.0);
        assert_eq!(m.slider_step(), 1.0);
        assert!(m.is_qualitative());
    }

    #[test]
    fn test_validate() {
        let inverted = MetricDescriptor::quantitative("x", "X", 2.0, 1.0);
        assert!(matches!(
            inverted.validate(),
            Err(TradeoffError::InvalidDescriptor { .. })
        ));

        let empty = MetricDescriptor::qualitative("q", "Q", Vec::<String>::new());
        assert!(empty.validate().is_err());

        let nan = MetricDescriptor::quantitative("n", "N", f64::NAN, 1.0);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_validate_decimals_limit() {
        let fine = MetricDescriptor::quantitative("fpr", "FPR", 0.0, 1.0).with_decimals(MAX_DECIMALS);
        assert!(fine.validate().is_ok());

        let excessive = MetricDescriptor::quantitative("fpr", "FPR", 0.0, 1.0).with_decimals(400);
        assert!(matches!(
            excessive.validate(),
            Err(TradeoffError::InvalidDescriptor { metric, .. }) if metric == "fpr"
        ));
    }

    #[test]
    fn test_format_value() {
        let latency = MetricDescriptor::quantitative("latency", "Latency", 0.0, 100.0);
        assert_eq!(latency.format_value(12.6), "13");

        let tier = MetricDescriptor::qualitative("tier", "Tier", ["low", "mid"]);
        assert_eq!(tier.format_value(1.0), "mid");
        assert_eq!(tier.format_value(7.0), "7");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_higher_is_better(true), Direction::HigherIsBetter);
        assert_eq!(Direction::LowerIsBetter.best(3.0, 1.0), 1.0);
        assert_eq!(Direction::HigherIsBetter.best(3.0, 1.0), 3.0);
    }
}

mod bound {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let b = Bound::new(0.1, 0.2);
        assert!(b.contains(0.1));
        assert!(b.contains(0.2));
        assert!(!b.contains(0.25));
    }

    #[test]
    fn test_active_edge() {
        let b = Bound::new(1.0, 5.0);
        assert_eq!(b.active_edge(Direction::HigherIsBetter), 1.0);
        assert_eq!(b.active_edge(Direction::LowerIsBetter), 5.0);
    }

    #[test]
    fn test_tightening_past_other_edge_inverts() {
        let b = Bound::new(3.0, 3.0).tightened(Direction::HigherIsBetter, 1.0, None);
        assert!(b.is_inverted());
    }

    #[test]
    fn test_widened_to() {
        let b = Bound::new(1.0, 2.0);
        assert_eq!(b.widened_to(3.0), Bound::new(1.0, 3.0));
        assert_eq!(b.widened_to(0.5), Bound::new(0.5, 2.0));
        assert_eq!(b.widened_to(1.5), b);
    }

    #[test]
    fn test_with_bound_leaves_original() {
        let original: ConstraintMapping = [("a", Bound::new(0.0, 1.0))].into_iter().collect();
        let changed = original.with_bound("a", Bound::new(0.5, 1.0));

        assert_eq!(original.get("a"), Some(Bound::new(0.0, 1.0)));
        assert_eq!(changed.get("a"), Some(Bound::new(0.5, 1.0)));
    }
}

mod candidate_store {
    use super::*;

    fn metrics() -> MetricSet {
        MetricSet::new()
            .with(MetricDescriptor::quantitative("auc", "AUC", 0.0, 1.0))
            .with(MetricDescriptor::qualitative("tier", "Tier", ["low", "mid"]))
    }

    #[test]
    fn test_ids_follow_position() {
        let store = CandidateStore::new(
            metrics(),
            vec![
                Candidate::from_values(CandidateId(7), [("auc", 0.5)]),
                Candidate::from_values(CandidateId(7), [("auc", 0.6)]),
            ],
        )
        .unwrap();

        assert_eq!(store.candidates()[1].id, CandidateId(1));
        assert_eq!(store.require(CandidateId(0)).unwrap().get("auc"), Some(0.5));
        assert_eq!(store.require(CandidateId(2)), Err(TradeoffError::NoSuchCandidate(2)));
    }

    #[test]
    fn test_rejects_empty_population() {
        assert_eq!(
            CandidateStore::new(metrics(), Vec::new()).unwrap_err(),
            TradeoffError::EmptyCandidateSet
        );
    }

    #[test]
    fn test_rejects_bad_option_index() {
        let result = CandidateStore::new(
            metrics(),
            vec![Candidate::from_values(CandidateId(0), [("tier", 2.0)])],
        );
        assert!(matches!(result, Err(TradeoffError::InvalidValue { .. })));

        let fractional = CandidateStore::new(
            metrics(),
            vec![Candidate::from_values(CandidateId(0), [("tier", 0.5)])],
        );
        assert!(fractional.is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let result = CandidateStore::new(
            metrics(),
            vec![Candidate::from_values(CandidateId(0), [("auc", f64::INFINITY)])],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_keeps_undescribed_keys() {
        let store = CandidateStore::new(
            metrics(),
            vec![Candidate::from_values(CandidateId(0), [("auc", 0.5), ("owner", 3.0)])],
        )
        .unwrap();
        assert_eq!(store.candidates()[0].get("owner"), Some(3.0));
    }

    #[test]
    fn test_column() {
        let store = CandidateStore::new(
            metrics(),
            vec![
                Candidate::from_values(CandidateId(0), [("auc", 0.5)]),
                Candidate::from_values(CandidateId(1), [("tier", 1.0)]),
                Candidate::from_values(CandidateId(2), [("auc", 0.7)]),
            ],
        )
        .unwrap();
        assert_eq!(store.column("auc").collect::<Vec<_>>(), vec![0.5, 0.7]);
    }
}
