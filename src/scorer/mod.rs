pub mod criteria;
pub mod types;

use self::criteria::{standard_criteria, ScoringContext};
pub use self::types::{Criterion, CriterionScore, ScoreBreakdown};
use crate::config::ScoringWeights;
use crate::error::TpResult;
use crate::models::{ClassificationResult, TopologyType, WorkloadType};
use crate::topology::{ProfileSet, TopologyProfile};
use std::cmp::Ordering;

/// Weights plus match tables, validated once and then shared read-only.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub weights: ScoringWeights,
    pub profiles: ProfileSet,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, profiles: ProfileSet) -> TpResult<Self> {
        weights.validate()?;
        profiles.validate()?;
        Ok(Self { weights, profiles })
    }

    pub fn score(
        &self,
        topology: TopologyType,
        classification: &ClassificationResult,
        workload: WorkloadType,
    ) -> ScoreBreakdown {
        score_topology(
            topology,
            classification,
            workload,
            self.profiles.get(topology),
            &self.weights,
        )
    }

    pub fn rank(
        &self,
        classification: &ClassificationResult,
        workload: WorkloadType,
    ) -> Vec<ScoreBreakdown> {
        rank_topologies(classification, workload, &self.profiles, &self.weights)
    }
}

pub fn score_topology(
    topology: TopologyType,
    classification: &ClassificationResult,
    workload: WorkloadType,
    profile: &TopologyProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    debug_assert_eq!(profile.topology, topology);

    let ctx = ScoringContext {
        classification,
        workload,
    };

    let criteria: Vec<CriterionScore> = standard_criteria()
        .iter()
        .map(|scorer| {
            let criterion = scorer.criterion();
            let raw = scorer.raw_score(&profile.matches, &ctx);
            let weight = weights.weight(criterion);
            CriterionScore {
                criterion,
                raw,
                weight,
                weighted: raw * weight,
            }
        })
        .collect();

    let total: f64 = criteria.iter().map(|c| c.weighted).sum();

    ScoreBreakdown {
        topology,
        criteria,
        total,
    }
}

/// Highest total first. Equal totals keep `TopologyType` declaration order.
pub fn rank_topologies(
    classification: &ClassificationResult,
    workload: WorkloadType,
    profiles: &ProfileSet,
    weights: &ScoringWeights,
) -> Vec<ScoreBreakdown> {
    let mut scores: Vec<ScoreBreakdown> = profiles
        .iter()
        .map(|p| score_topology(p.topology, classification, workload, p, weights))
        .collect();

    scores.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then(a.topology.cmp(&b.topology))
    });
    scores
}
