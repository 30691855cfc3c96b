use super::types::Criterion;
use crate::models::{ClassificationResult, WorkloadType};
use crate::topology::MatchTable;

pub struct ScoringContext<'a> {
    pub classification: &'a ClassificationResult,
    pub workload: WorkloadType,
}

/// A single scoring criterion. Implementations only look values up in the
/// match table; they never branch on the topology itself.
pub trait CriterionScorer: Send + Sync {
    fn criterion(&self) -> Criterion;
    fn raw_score(&self, table: &MatchTable, ctx: &ScoringContext) -> f64;
}

pub struct ScaleMatch;
pub struct BudgetMatch;
pub struct PowerMatch;
pub struct WorkloadSuitability;
pub struct ScalabilityMatch;

impl CriterionScorer for ScaleMatch {
    fn criterion(&self) -> Criterion {
        Criterion::ScaleMatch
    }

    fn raw_score(&self, table: &MatchTable, ctx: &ScoringContext) -> f64 {
        table.scale(ctx.classification.scale)
    }
}

impl CriterionScorer for BudgetMatch {
    fn criterion(&self) -> Criterion {
        Criterion::BudgetMatch
    }

    fn raw_score(&self, table: &MatchTable, ctx: &ScoringContext) -> f64 {
        table.budget(ctx.classification.budget)
    }
}

impl CriterionScorer for PowerMatch {
    fn criterion(&self) -> Criterion {
        Criterion::PowerMatch
    }

    fn raw_score(&self, table: &MatchTable, ctx: &ScoringContext) -> f64 {
        table.power(ctx.classification.power)
    }
}

impl CriterionScorer for WorkloadSuitability {
    fn criterion(&self) -> Criterion {
        Criterion::WorkloadSuitability
    }

    fn raw_score(&self, table: &MatchTable, ctx: &ScoringContext) -> f64 {
        table.workload(ctx.workload)
    }
}

impl CriterionScorer for ScalabilityMatch {
    fn criterion(&self) -> Criterion {
        Criterion::ScalabilityMatch
    }

    fn raw_score(&self, table: &MatchTable, ctx: &ScoringContext) -> f64 {
        table.scalability(ctx.classification.scale)
    }
}

pub fn standard_criteria() -> [&'static dyn CriterionScorer; 5] {
    [
        &ScaleMatch,
        &BudgetMatch,
        &PowerMatch,
        &WorkloadSuitability,
        &ScalabilityMatch,
    ]
}
