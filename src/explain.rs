use crate::models::{ClassificationResult, TopologyType};
use crate::rules::{Condition, Rule, RuleOutcome};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub fired_rule: u8,
    pub rule_name: String,
    pub matched_conditions: Vec<Condition>,
    pub summary: String,
    pub rejected: Vec<RejectedTopology>,
    pub scoring_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedTopology {
    pub topology: TopologyType,
    pub reason: String,
    /// Conditions that decided against this topology: the failing conditions
    /// of its own rule, or the higher-priority conditions that pre-empted it.
    pub deciding_conditions: Vec<Condition>,
}

fn list(conditions: &[Condition]) -> String {
    conditions
        .iter()
        .map(|c| c.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn compose_explanation(
    outcome: &RuleOutcome,
    classification: &ClassificationResult,
    top_scored: TopologyType,
) -> Explanation {
    let rejected = TopologyType::iter()
        .filter(|t| *t != outcome.topology)
        .map(|t| reject(t, outcome, top_scored))
        .collect();

    let scoring_note = if top_scored == outcome.topology {
        format!("Weighted scoring agrees: {} ranks first.", top_scored)
    } else {
        format!(
            "Weighted scoring ranks {} first; the rule-based pick {} is kept.",
            top_scored, outcome.topology
        )
    };

    Explanation {
        fired_rule: outcome.rule_id,
        rule_name: outcome.rule.to_string(),
        matched_conditions: outcome.matched_conditions.clone(),
        summary: summary(outcome.topology, classification),
        rejected,
        scoring_note,
    }
}

fn reject(topology: TopologyType, outcome: &RuleOutcome, top_scored: TopologyType) -> RejectedTopology {
    let own_failing = outcome
        .evaluation(Rule::for_topology(topology))
        .map(|e| e.failing.clone())
        .unwrap_or_default();

    let (mut reason, deciding_conditions) = match (topology, outcome.rule) {
        (TopologyType::ThreeTier, _) => (
            format!(
                "Not selected because none of [{}] holds, so the deployment exceeds Three-Tier's optimal range.",
                list(&own_failing)
            ),
            own_failing,
        ),
        (TopologyType::FatTree, Rule::ConstrainedDeployment) => (
            format!(
                "Not selected because rule 1 fires first ({}) and Fat-Tree additionally lacks [{}].",
                list(&outcome.matched_conditions),
                list(&own_failing)
            ),
            own_failing,
        ),
        (TopologyType::FatTree, _) => (
            format!(
                "Not selected because Fat-Tree requires large scale, high budget and high power together; missing [{}].",
                list(&own_failing)
            ),
            own_failing,
        ),
        (TopologyType::LeafSpine, Rule::HighPerformance) => (
            "Not selected because large scale, high budget and high power support Fat-Tree's higher capacity."
                .to_string(),
            outcome.matched_conditions.clone(),
        ),
        (TopologyType::LeafSpine, _) => (
            format!(
                "Not selected because [{}] favor a simpler topology.",
                list(&outcome.matched_conditions)
            ),
            outcome.matched_conditions.clone(),
        ),
    };

    if topology == top_scored {
        reason.push_str(" It ranked first by weighted score, but the rule-based pick takes precedence.");
    }

    RejectedTopology {
        topology,
        reason,
        deciding_conditions,
    }
}

fn summary(topology: TopologyType, c: &ClassificationResult) -> String {
    match topology {
        TopologyType::ThreeTier => format!(
            "Three-Tier topology is recommended because your deployment is classified as {} scale \
             with {} budget and {} power. This topology is cost-effective for smaller deployments \
             and provides adequate performance for traditional workloads.",
            c.scale, c.budget, c.power
        ),
        TopologyType::LeafSpine => format!(
            "Leaf-Spine topology is recommended as it balances performance, scalability, and cost \
             for your {} scale deployment with {} budget. It offers strong east-west traffic \
             performance and is the industry standard for medium to large data centers.",
            c.scale, c.budget
        ),
        TopologyType::FatTree => format!(
            "Fat-Tree topology is recommended for your {} scale deployment with {} budget and {} \
             power. It provides maximum scalability and performance for high-performance computing \
             and large-scale AI/ML workloads.",
            c.scale, c.budget, c.power
        ),
    }
}
