use crate::classifier::classify;
use crate::config::{ConfidenceParams, Config, ScoringWeights, ThresholdConfig};
use crate::error::TpResult;
use crate::explain::{compose_explanation, Explanation};
use crate::models::{ClassificationResult, TopologyType, UserInputs};
use crate::rules::select_by_rule;
use crate::scorer::{rank_topologies, ScoreBreakdown, Scorer};
use crate::topology::ProfileSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyRecommendation {
    pub primary: TopologyType,
    pub confidence: f64,
    pub rule_id: u8,
    pub classification: ClassificationResult,
    pub scores: BTreeMap<TopologyType, ScoreBreakdown>,
    pub ranked: Vec<TopologyType>,
    pub explanation: Explanation,
}

impl TopologyRecommendation {
    pub fn top_scored(&self) -> TopologyType {
        self.ranked.first().copied().unwrap_or(self.primary)
    }

    pub fn agreement(&self) -> bool {
        self.top_scored() == self.primary
    }
}

/// Classify, select by rule, rank by score, and merge the three.
pub fn recommend(
    inputs: &UserInputs,
    thresholds: &ThresholdConfig,
    weights: &ScoringWeights,
    profiles: &ProfileSet,
    confidence: &ConfidenceParams,
) -> TopologyRecommendation {
    let classification = classify(inputs, thresholds);
    let outcome = select_by_rule(&classification);
    let ranking = rank_topologies(&classification, inputs.workload(), profiles, weights);

    let ranked: Vec<TopologyType> = ranking.iter().map(|s| s.topology).collect();
    let top_scored = ranked.first().copied().unwrap_or(outcome.topology);
    let agreement = top_scored == outcome.topology;

    debug!(
        "classified {:?} -> rule {} ({}), top scored {} (agreement: {})",
        classification, outcome.rule_id, outcome.topology, top_scored, agreement
    );

    let explanation = compose_explanation(&outcome, &classification, top_scored);
    let scores = ranking.into_iter().map(|s| (s.topology, s)).collect();

    TopologyRecommendation {
        primary: outcome.topology,
        confidence: confidence.score(agreement),
        rule_id: outcome.rule_id,
        classification,
        scores,
        ranked,
        explanation,
    }
}

/// Validated configuration bundle. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Planner {
    config: Config,
    scorer: Scorer,
}

impl Planner {
    pub fn new(config: Config, profiles: ProfileSet) -> TpResult<Self> {
        config.validate()?;
        let scorer = Scorer::new(config.weights.clone(), profiles)?;
        Ok(Self { config, scorer })
    }

    pub fn standard() -> TpResult<Self> {
        Self::new(Config::default(), ProfileSet::standard())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.scorer.profiles
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn recommend(&self, inputs: &UserInputs) -> TopologyRecommendation {
        recommend(
            inputs,
            &self.config.thresholds,
            &self.scorer.weights,
            &self.scorer.profiles,
            &self.config.confidence,
        )
    }
}
