use rstest::rstest;
use std::collections::BTreeMap;
use topoplan::config::ScoringWeights;
use topoplan::scorer::{rank_topologies, Criterion, Scorer};
use topoplan::topology::{standard_matches, MatchTable, ProfileSet};
use topoplan::{ClassificationResult, Level, ScaleCategory, TopologyType, WorkloadType};
use strum::IntoEnumIterator;

fn triple(scale: ScaleCategory, budget: Level, power: Level) -> ClassificationResult {
    ClassificationResult {
        scale,
        budget,
        power,
    }
}

fn standard_scorer() -> Scorer {
    Scorer::new(ScoringWeights::default(), ProfileSet::standard()).unwrap()
}

#[test]
fn test_scores_bounded_and_contributions_sum() {
    let scorer = standard_scorer();
    for c in ClassificationResult::all() {
        for w in WorkloadType::iter() {
            for s in scorer.rank(&c, w) {
                assert!(s.total >= 0.0 && s.total <= 1.0 + 1e-9, "{:?} {:?} {}", c, w, s.total);
                assert!((s.contribution_sum() - s.total).abs() < 1e-6);
                assert_eq!(s.criteria.len(), Criterion::ALL.len());
                for cs in &s.criteria {
                    assert!((0.0..=1.0).contains(&cs.raw));
                    assert!((cs.weighted - cs.raw * cs.weight).abs() < 1e-12);
                }
            }
        }
    }
}

#[rstest]
#[case(ScaleCategory::Small, Level::Low, Level::Low, WorkloadType::WebServices, 0.945)]
#[case(ScaleCategory::Large, Level::High, Level::High, WorkloadType::AiTraining, 1.0)]
#[case(ScaleCategory::Medium, Level::Medium, Level::Medium, WorkloadType::Mixed, 0.9075)]
fn test_top_score_for_scenarios(
    #[case] scale: ScaleCategory,
    #[case] budget: Level,
    #[case] power: Level,
    #[case] workload: WorkloadType,
    #[case] expected_top: f64,
) {
    let ranking = standard_scorer().rank(&triple(scale, budget, power), workload);
    assert!((ranking[0].total - expected_top).abs() < 1e-9);
}

#[test]
fn test_three_tier_breakdown_for_small_web() {
    let scorer = standard_scorer();
    let s = scorer.score(
        TopologyType::ThreeTier,
        &triple(ScaleCategory::Small, Level::Low, Level::Low),
        WorkloadType::WebServices,
    );
    let raw = |c| s.get(c).unwrap().raw;
    assert_eq!(raw(Criterion::ScaleMatch), 1.0);
    assert_eq!(raw(Criterion::BudgetMatch), 1.0);
    assert_eq!(raw(Criterion::PowerMatch), 1.0);
    assert_eq!(raw(Criterion::WorkloadSuitability), 0.7);
    assert_eq!(raw(Criterion::ScalabilityMatch), 0.9);
}

#[test]
fn test_ranking_sorted_descending() {
    let scorer = standard_scorer();
    for c in ClassificationResult::all() {
        let ranking = scorer.rank(&c, WorkloadType::Storage);
        assert_eq!(ranking.len(), 3);
        for pair in ranking.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }
}

#[test]
fn test_ties_break_by_topology_order() {
    let flat = standard_matches(TopologyType::LeafSpine);
    let tables: BTreeMap<TopologyType, MatchTable> =
        TopologyType::iter().map(|t| (t, flat.clone())).collect();
    let profiles = ProfileSet::with_match_tables(tables).unwrap();

    let ranking = rank_topologies(
        &triple(ScaleCategory::Medium, Level::High, Level::Low),
        WorkloadType::Mixed,
        &profiles,
        &ScoringWeights::default(),
    );
    let order: Vec<TopologyType> = ranking.iter().map(|s| s.topology).collect();
    assert_eq!(
        order,
        vec![TopologyType::ThreeTier, TopologyType::LeafSpine, TopologyType::FatTree]
    );
}

#[test]
fn test_weights_shift_ranking() {
    // All weight on workload: AI training favours Fat-Tree even when small.
    let weights = ScoringWeights {
        scale_match: 0.0,
        budget_match: 0.0,
        power_match: 0.0,
        workload_suitability: 1.0,
        scalability_match: 0.0,
    };
    let scorer = Scorer::new(weights, ProfileSet::standard()).unwrap();
    let ranking = scorer.rank(
        &triple(ScaleCategory::Small, Level::Low, Level::Low),
        WorkloadType::AiTraining,
    );
    assert_eq!(ranking[0].topology, TopologyType::FatTree);
    assert_eq!(ranking[0].total, 1.0);
}

#[test]
fn test_scorer_rejects_bad_weights() {
    let weights = ScoringWeights {
        scale_match: 0.29,
        ..Default::default()
    };
    let err = Scorer::new(weights, ProfileSet::standard()).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_match_table_out_of_range_rejected() {
    let mut bad = standard_matches(TopologyType::FatTree);
    bad.workload[0] = 1.2;
    let tables: BTreeMap<TopologyType, MatchTable> = TopologyType::iter()
        .map(|t| {
            let table = if t == TopologyType::FatTree {
                bad.clone()
            } else {
                standard_matches(t)
            };
            (t, table)
        })
        .collect();
    assert!(ProfileSet::with_match_tables(tables).unwrap_err().is_config());
}

#[test]
fn test_missing_match_table_rejected() {
    let mut tables = BTreeMap::new();
    tables.insert(TopologyType::ThreeTier, standard_matches(TopologyType::ThreeTier));
    assert!(ProfileSet::with_match_tables(tables).unwrap_err().is_config());
}
