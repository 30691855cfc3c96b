use crate::models::{ClassificationResult, Level, ScaleCategory, TopologyType};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A single test against the classification triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    #[strum(to_string = "Small scale")]
    SmallScale,
    #[strum(to_string = "Low budget")]
    LowBudget,
    #[strum(to_string = "Low power")]
    LowPower,
    #[strum(to_string = "Large scale")]
    LargeScale,
    #[strum(to_string = "High budget")]
    HighBudget,
    #[strum(to_string = "High power")]
    HighPower,
}

impl Condition {
    pub fn holds(self, c: &ClassificationResult) -> bool {
        match self {
            Condition::SmallScale => c.scale == ScaleCategory::Small,
            Condition::LowBudget => c.budget == Level::Low,
            Condition::LowPower => c.power == Level::Low,
            Condition::LargeScale => c.scale == ScaleCategory::Large,
            Condition::HighBudget => c.budget == Level::High,
            Condition::HighPower => c.power == Level::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Any,
    All,
    Always,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rule {
    #[strum(to_string = "Constrained deployment")]
    ConstrainedDeployment,
    #[strum(to_string = "High-performance deployment")]
    HighPerformance,
    #[strum(to_string = "Balanced default")]
    Balanced,
}

/// Evaluation order. The first rule that matches decides.
pub const RULES: [Rule; 3] = [
    Rule::ConstrainedDeployment,
    Rule::HighPerformance,
    Rule::Balanced,
];

impl Rule {
    pub fn id(self) -> u8 {
        match self {
            Rule::ConstrainedDeployment => 1,
            Rule::HighPerformance => 2,
            Rule::Balanced => 3,
        }
    }

    pub fn topology(self) -> TopologyType {
        match self {
            Rule::ConstrainedDeployment => TopologyType::ThreeTier,
            Rule::HighPerformance => TopologyType::FatTree,
            Rule::Balanced => TopologyType::LeafSpine,
        }
    }

    pub fn for_topology(topology: TopologyType) -> Rule {
        match topology {
            TopologyType::ThreeTier => Rule::ConstrainedDeployment,
            TopologyType::FatTree => Rule::HighPerformance,
            TopologyType::LeafSpine => Rule::Balanced,
        }
    }

    pub fn conditions(self) -> &'static [Condition] {
        match self {
            Rule::ConstrainedDeployment => &[
                Condition::SmallScale,
                Condition::LowBudget,
                Condition::LowPower,
            ],
            Rule::HighPerformance => &[
                Condition::LargeScale,
                Condition::HighBudget,
                Condition::HighPower,
            ],
            Rule::Balanced => &[],
        }
    }

    pub fn combinator(self) -> Combinator {
        match self {
            Rule::ConstrainedDeployment => Combinator::Any,
            Rule::HighPerformance => Combinator::All,
            Rule::Balanced => Combinator::Always,
        }
    }

    pub fn matches(self, c: &ClassificationResult) -> bool {
        let mut conds = self.conditions().iter();
        match self.combinator() {
            Combinator::Any => conds.any(|cond| cond.holds(c)),
            Combinator::All => conds.all(|cond| cond.holds(c)),
            Combinator::Always => true,
        }
    }

    pub fn evaluate(self, c: &ClassificationResult) -> RuleEvaluation {
        let (holding, failing): (Vec<Condition>, Vec<Condition>) =
            self.conditions().iter().copied().partition(|cond| cond.holds(c));
        RuleEvaluation {
            rule: self,
            matched: self.matches(c),
            holding,
            failing,
        }
    }
}

/// Per-rule condition state, kept for explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    pub rule: Rule,
    pub matched: bool,
    pub holding: Vec<Condition>,
    pub failing: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub topology: TopologyType,
    pub rule: Rule,
    pub rule_id: u8,
    pub matched_conditions: Vec<Condition>,
    pub evaluations: Vec<RuleEvaluation>,
}

impl RuleOutcome {
    pub fn evaluation(&self, rule: Rule) -> Option<&RuleEvaluation> {
        self.evaluations.iter().find(|e| e.rule == rule)
    }
}

pub fn select_by_rule(c: &ClassificationResult) -> RuleOutcome {
    // `Balanced` always matches, so the fallback is never taken.
    let rule = RULES
        .iter()
        .copied()
        .find(|r| r.matches(c))
        .unwrap_or(Rule::Balanced);

    let evaluations: Vec<RuleEvaluation> = RULES.iter().map(|r| r.evaluate(c)).collect();
    let matched_conditions = evaluations
        .iter()
        .find(|e| e.rule == rule)
        .map(|e| e.holding.clone())
        .unwrap_or_default();

    RuleOutcome {
        topology: rule.topology(),
        rule,
        rule_id: rule.id(),
        matched_conditions,
        evaluations,
    }
}
