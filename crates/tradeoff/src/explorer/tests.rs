use super::*;
use tradeoff_core::{Candidate, MetricDescriptor, MetricSet, MissingKeyPolicy};
use tradeoff_test::{fpr_cost_store, model_zoo_store};

fn fpr_cost() -> Explorer {
    Explorer::new(fpr_cost_store(), &ExplorerConfig::default()).unwrap()
}

mod commit {
    use super::*;

    #[test]
    fn test_initial_view() {
        let explorer = fpr_cost();

        assert_eq!(explorer.version(), 0);
        assert_eq!(explorer.view().summary(), "2 of 2");
        assert_eq!(explorer.bound("fpr").unwrap(), Bound::new(0.0, 1.0));
        assert_eq!(explorer.bound("cost").unwrap(), Bound::new(2.0, 5.0));
        assert_eq!(explorer.view().best["fpr"], 0.1);
        assert_eq!(explorer.view().best["cost"], 2.0);
    }

    #[test]
    fn test_commit_narrows_and_updates_best() {
        let mut explorer = fpr_cost();

        let outcome = explorer.commit_bound("fpr", 0.0, 0.2).unwrap();
        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                version: 1,
                remaining: 1
            }
        );
        assert_eq!(explorer.view().filtered, vec![CandidateId(0)]);
        assert_eq!(explorer.view().best["fpr"], 0.1);
        assert_eq!(explorer.view().best["cost"], 5.0);
        assert_eq!(explorer.view().version, explorer.version());
    }

    #[test]
    fn test_commit_that_empties_the_set_is_rejected() {
        let mut explorer = fpr_cost();
        explorer.commit_bound("fpr", 0.0, 0.2).unwrap();
        let before = explorer.view().clone();

        let outcome = explorer.commit_bound("fpr", 0.0, 0.05).unwrap();
        assert_eq!(
            outcome,
            CommitOutcome::Rejected {
                attempted: Bound::new(0.0, 0.05),
                retained: Bound::new(0.0, 0.2),
            }
        );
        assert_eq!(explorer.bound("fpr").unwrap(), Bound::new(0.0, 0.2));
        assert_eq!(explorer.version(), 1);
        assert_eq!(explorer.view(), &before);
    }

    #[test]
    fn test_malformed_commits_are_errors() {
        let mut explorer = fpr_cost();

        assert!(matches!(
            explorer.commit_bound("nope", 0.0, 1.0),
            Err(TradeoffError::UnknownMetric(_))
        ));
        assert!(matches!(
            explorer.commit_bound("fpr", 0.5, 0.2),
            Err(TradeoffError::InvertedBound { .. })
        ));
        assert!(matches!(
            explorer.commit_bound("fpr", f64::NAN, 0.2),
            Err(TradeoffError::NonFinite(_))
        ));
        assert!(matches!(
            explorer.commit_bound("fpr", 0.0, 1.5),
            Err(TradeoffError::OutOfRange { min, max, .. }) if min == 0.0 && max == 1.0
        ));
        assert_eq!(explorer.version(), 0);
    }

    #[test]
    fn test_descriptor_range_is_permissible() {
        let mut explorer = fpr_cost();

        // the max range of cost is [2, 5], its descriptor range [0, 10]
        assert_eq!(explorer.permissible_range("cost").unwrap(), Bound::new(0.0, 10.0));
        assert!(explorer.commit_bound("cost", 0.0, 10.0).unwrap().is_committed());
    }

    #[test]
    fn test_reset() {
        let mut explorer = fpr_cost();
        explorer.commit_bound("fpr", 0.0, 0.2).unwrap();
        explorer.commit_bound("cost", 4.0, 5.0).unwrap();

        explorer.reset_bound("fpr").unwrap();
        assert_eq!(explorer.bound("fpr").unwrap(), Bound::new(0.0, 1.0));
        assert_eq!(explorer.view().remaining(), 1);

        explorer.reset_all().unwrap();
        assert_eq!(explorer.constraints(), &initialize_constraints(explorer.max_ranges()));
        assert_eq!(explorer.view().remaining(), 2);
        assert_eq!(explorer.version(), 4);
    }

    #[test]
    fn test_off_grid_extremes_start_in_view() {
        let metrics = || {
            MetricSet::new().with(
                MetricDescriptor::quantitative("fpr", "FPR", 0.0, 1.0)
                    .lower_is_better()
                    .with_decimals(2),
            )
        };
        let sum = 0.1 + 0.2;

        let store = CandidateStore::new(
            metrics(),
            vec![
                Candidate::from_values(CandidateId(0), [("fpr", 0.1)]),
                Candidate::from_values(CandidateId(1), [("fpr", sum)]),
            ],
        )
        .unwrap();
        let explorer = Explorer::new(store, &ExplorerConfig::default()).unwrap();
        assert_eq!(explorer.view().summary(), "2 of 2");
        assert_eq!(explorer.bound("fpr").unwrap(), Bound::new(0.1, 0.31));

        let single = CandidateStore::new(
            metrics(),
            vec![Candidate::from_values(CandidateId(0), [("fpr", sum)])],
        )
        .unwrap();
        let explorer = Explorer::new(single, &ExplorerConfig::default()).unwrap();
        assert_eq!(explorer.view().summary(), "1 of 1");
    }

    #[test]
    fn test_exclude_policy_from_config() {
        let json = r#"{
            "metadata": { "metrics": {
                "auc": { "range_min": 0, "range_max": 1, "decimals": 2 },
                "cost": { "higherIsBetter": false, "range_min": 0, "range_max": 10 }
            } },
            "candidates": [ { "auc": 0.7, "cost": 3 }, { "auc": 0.9 } ]
        }"#;

        let vacuous = Explorer::from_json_str(json, &ExplorerConfig::default()).unwrap();
        assert_eq!(vacuous.view().remaining(), 2);

        let config = ExplorerConfig::default().with_missing_key_policy(MissingKeyPolicy::Exclude);
        let exclude = Explorer::from_json_str(json, &config).unwrap();
        assert_eq!(exclude.view().filtered, vec![CandidateId(0)]);
    }
}

mod views {
    use super::*;

    #[test]
    fn test_metric_views() {
        let explorer = Explorer::new(model_zoo_store(), &ExplorerConfig::default()).unwrap();
        let views = explorer.metric_views().unwrap();

        let uids: Vec<&str> = views.iter().map(|v| &*v.uid).collect();
        assert_eq!(uids, ["accuracy", "latency", "license", "memory"]);

        let accuracy = &views[0];
        assert_eq!(accuracy.step, 0.01);
        assert_eq!(accuracy.max_range, Bound::new(0.8, 0.95));
        assert_eq!(accuracy.best_label.as_deref(), Some("0.95"));

        let license = explorer.metric_view("license").unwrap();
        assert_eq!(license.step, 1.0);
        assert_eq!(license.max_range, Bound::new(0.0, 2.0));
        assert_eq!(license.best_label.as_deref(), Some("open"));

        let latency = explorer.metric_view("latency").unwrap();
        assert_eq!(latency.best, Some(20.0));
        assert_eq!(latency.name, "Latency (ms)");
    }

    #[test]
    fn test_qualitative_best_follows_the_filter() {
        let mut explorer = Explorer::new(model_zoo_store(), &ExplorerConfig::default()).unwrap();
        explorer.commit_bound("accuracy", 0.95, 0.95).unwrap();

        let license = explorer.metric_view("license").unwrap();
        assert_eq!(license.best_label.as_deref(), Some("proprietary"));
    }
}

mod blocking {
    use super::*;

    #[test]
    fn test_blocking_requires_selection() {
        let explorer = fpr_cost();
        assert_eq!(explorer.blocking().unwrap(), BlockingStatus::NoSelection);
        assert_eq!(explorer.suggest_unblock().unwrap(), UnblockOutcome::NoSelection);
    }

    #[test]
    fn test_blocked_after_narrowing() {
        let mut explorer = fpr_cost();
        explorer.commit_bound("fpr", 0.0, 0.2).unwrap();

        assert!(explorer.is_blocked("fpr").unwrap());

        explorer.select("fpr").unwrap();
        let status = explorer.blocking().unwrap();
        assert!(status.is_blocked());
        // nothing beats fpr = 0.1
        assert_eq!(status.unblock(), Some(&UnblockOutcome::NoSuggestion));
    }

    #[test]
    fn test_clear_when_a_step_remains() {
        let mut explorer = Explorer::new(model_zoo_store(), &ExplorerConfig::default()).unwrap();
        explorer.select("latency").unwrap();

        assert_eq!(
            explorer.blocking().unwrap(),
            BlockingStatus::Clear {
                metric: "latency".into()
            }
        );
    }

    #[test]
    fn test_admit_suggested_candidate() {
        let mut explorer = fpr_cost();
        explorer.commit_bound("fpr", 0.0, 0.2).unwrap();
        explorer.select("cost").unwrap();

        let status = explorer.blocking().unwrap();
        let suggestion = status
            .unblock()
            .and_then(UnblockOutcome::suggestion)
            .cloned()
            .unwrap();
        assert_eq!(suggestion.ids().collect::<Vec<_>>(), vec![CandidateId(1)]);

        let applied = explorer.admit_candidate(CandidateId(1)).unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(&*applied[0].metric, "fpr");
        assert_eq!(applied[0].relaxed, Bound::new(0.0, 0.3));

        assert!(explorer.view().contains(CandidateId(1)));
        assert_eq!(explorer.view().remaining(), 2);
        assert_eq!(explorer.version(), 2);
    }

    #[test]
    fn test_admit_off_grid_candidate() {
        let metrics = MetricSet::new().with(
            MetricDescriptor::quantitative("fpr", "FPR", 0.0, 0.3)
                .lower_is_better()
                .with_decimals(2),
        );
        let sum = 0.1 + 0.2;
        let store = CandidateStore::new(
            metrics,
            vec![
                Candidate::from_values(CandidateId(0), [("fpr", 0.1)]),
                Candidate::from_values(CandidateId(1), [("fpr", sum)]),
            ],
        )
        .unwrap();
        let mut explorer = Explorer::new(store, &ExplorerConfig::default()).unwrap();
        explorer.commit_bound("fpr", 0.1, 0.2).unwrap();

        let applied = explorer.admit_candidate(CandidateId(1)).unwrap();
        assert_eq!(applied[0].relaxed, Bound::new(0.1, sum));
        assert_eq!(explorer.view().summary(), "2 of 2");
    }

    #[test]
    fn test_admit_passing_candidate_is_noop() {
        let mut explorer = fpr_cost();
        assert!(explorer.admit_candidate(CandidateId(0)).unwrap().is_empty());
        assert_eq!(explorer.version(), 0);
        assert!(matches!(
            explorer.admit_candidate(CandidateId(9)),
            Err(TradeoffError::NoSuchCandidate(9))
        ));
    }

    #[test]
    fn test_select_unknown_metric() {
        let mut explorer = fpr_cost();
        assert!(explorer.select("nope").is_err());
        assert_eq!(explorer.selection(), None);

        explorer.select("fpr").unwrap();
        explorer.clear_selection();
        assert_eq!(explorer.selection(), None);
    }
}

mod submit {
    use super::*;

    #[test]
    fn test_submit_hands_over_constraints() {
        let mut explorer = Explorer::new(model_zoo_store(), &ExplorerConfig::default()).unwrap();
        explorer.commit_bound("latency", 20.0, 80.0).unwrap();
        explorer.commit_bound("license", 2.0, 2.0).unwrap();

        let submission = explorer.submit();
        assert_eq!(submission.candidates, vec![CandidateId(0), CandidateId(2)]);
        assert_eq!(submission.labels, ["tiny", "base"]);
        assert_eq!(submission.version, 2);
        assert_eq!(submission.constraints.get("license"), Some(Bound::new(2.0, 2.0)));
    }

    #[test]
    fn test_preference_over_remaining() {
        let mut explorer = Explorer::new(model_zoo_store(), &ExplorerConfig::default()).unwrap();
        explorer.commit_bound("memory", 256.0, 512.0).unwrap();

        let session = explorer.preference_session();
        assert_eq!(
            session.candidates(),
            [CandidateId(0), CandidateId(1), CandidateId(2)]
        );
        assert_eq!(session.progress(), (0, 3));
    }
}
