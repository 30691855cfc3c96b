use crate::models::TopologyType;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    #[strum(to_string = "Scale Match")]
    ScaleMatch,
    #[strum(to_string = "Budget Match")]
    BudgetMatch,
    #[strum(to_string = "Power Match")]
    PowerMatch,
    #[strum(to_string = "Workload Suitability")]
    WorkloadSuitability,
    #[strum(to_string = "Scalability Match")]
    ScalabilityMatch,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::ScaleMatch,
        Criterion::BudgetMatch,
        Criterion::PowerMatch,
        Criterion::WorkloadSuitability,
        Criterion::ScalabilityMatch,
    ];

    /// Config / JSON key of the matching weight.
    pub fn key(self) -> &'static str {
        match self {
            Criterion::ScaleMatch => "scale_match",
            Criterion::BudgetMatch => "budget_match",
            Criterion::PowerMatch => "power_match",
            Criterion::WorkloadSuitability => "workload_suitability",
            Criterion::ScalabilityMatch => "scalability_match",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub raw: f64,
    pub weight: f64,
    pub weighted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub topology: TopologyType,
    pub criteria: Vec<CriterionScore>,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, criterion: Criterion) -> Option<&CriterionScore> {
        self.criteria.iter().find(|c| c.criterion == criterion)
    }

    pub fn contribution_sum(&self) -> f64 {
        self.criteria.iter().map(|c| c.weighted).sum()
    }
}
