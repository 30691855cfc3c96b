use crate::error::{TopoPlanError, TpResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Supported network topology families.
///
/// Declaration order is also the tie-break priority used when ranking.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum TopologyType {
    #[strum(to_string = "Three-Tier", serialize = "three_tier", serialize = "three-tier")]
    ThreeTier,
    #[strum(to_string = "Leaf-Spine", serialize = "leaf_spine", serialize = "leaf-spine")]
    LeafSpine,
    #[strum(to_string = "Fat-Tree", serialize = "fat_tree", serialize = "fat-tree")]
    FatTree,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum WorkloadType {
    #[strum(to_string = "AI Training", serialize = "ai_training", serialize = "ai-training")]
    AiTraining,
    #[strum(to_string = "Web Services", serialize = "web_services", serialize = "web-services")]
    WebServices,
    #[strum(to_string = "Storage")]
    Storage,
    #[strum(to_string = "Mixed")]
    Mixed,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum ScaleCategory {
    Small,
    Medium,
    Large,
}

/// Shared three-level band for budget and power.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum Level {
    Low,
    Medium,
    High,
}

pub type BudgetCategory = Level;
pub type PowerCategory = Level;

impl TopologyType {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        self as usize
    }
}

impl WorkloadType {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        self as usize
    }
}

impl ScaleCategory {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Level {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Parses a workload name, listing the accepted values on failure.
pub fn parse_workload(raw: &str) -> TpResult<WorkloadType> {
    WorkloadType::from_str(raw.trim()).map_err(|_| {
        let allowed: Vec<String> = WorkloadType::iter().map(|w| w.to_string()).collect();
        TopoPlanError::InvalidInput(format!(
            "unknown workload '{}' (expected one of: {})",
            raw,
            allowed.join(", ")
        ))
    })
}

/// One analysis request. Values are domain values, not validated ranges:
/// zero and negative numbers are classified like any other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserInputs {
    racks: i64,
    servers: i64,
    budget_usd: f64,
    power_kw: f64,
    workload: WorkloadType,
}

impl UserInputs {
    pub fn new(
        racks: i64,
        servers: i64,
        budget_usd: f64,
        power_kw: f64,
        workload: WorkloadType,
    ) -> TpResult<Self> {
        if budget_usd.is_nan() {
            return Err(TopoPlanError::InvalidInput(
                "budget_usd must be a number, got NaN".to_string(),
            ));
        }
        if power_kw.is_nan() {
            return Err(TopoPlanError::InvalidInput(
                "power_kw must be a number, got NaN".to_string(),
            ));
        }

        Ok(Self {
            racks,
            servers,
            budget_usd,
            power_kw,
            workload,
        })
    }

    /// Builds inputs from raw text fields (forms, CSV cells, CLI strings).
    pub fn parse(
        racks: &str,
        servers: &str,
        budget_usd: &str,
        power_kw: &str,
        workload: &str,
    ) -> TpResult<Self> {
        Self::new(
            parse_int("racks", racks)?,
            parse_int("servers", servers)?,
            parse_float("budget_usd", budget_usd)?,
            parse_float("power_kw", power_kw)?,
            parse_workload(workload)?,
        )
    }

    pub fn racks(&self) -> i64 {
        self.racks
    }

    pub fn servers(&self) -> i64 {
        self.servers
    }

    pub fn budget_usd(&self) -> f64 {
        self.budget_usd
    }

    pub fn power_kw(&self) -> f64 {
        self.power_kw
    }

    pub fn workload(&self) -> WorkloadType {
        self.workload
    }
}

fn parse_int(field: &str, raw: &str) -> TpResult<i64> {
    raw.trim().parse().map_err(|_| {
        TopoPlanError::InvalidInput(format!("{} must be an integer, got '{}'", field, raw))
    })
}

fn parse_float(field: &str, raw: &str) -> TpResult<f64> {
    raw.trim().parse().map_err(|_| {
        TopoPlanError::InvalidInput(format!("{} must be a number, got '{}'", field, raw))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub scale: ScaleCategory,
    pub budget: BudgetCategory,
    pub power: PowerCategory,
}

impl ClassificationResult {
    /// All 27 classification triples, in enum order.
    pub fn all() -> Vec<ClassificationResult> {
        let mut out = Vec::with_capacity(27);
        for scale in ScaleCategory::iter() {
            for budget in Level::iter() {
                for power in Level::iter() {
                    out.push(ClassificationResult {
                        scale,
                        budget,
                        power,
                    });
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_parsing_accepts_common_spellings() {
        assert_eq!(parse_workload("AI_TRAINING").unwrap(), WorkloadType::AiTraining);
        assert_eq!(parse_workload("ai-training").unwrap(), WorkloadType::AiTraining);
        assert_eq!(parse_workload("AI Training").unwrap(), WorkloadType::AiTraining);
        assert_eq!(parse_workload(" mixed ").unwrap(), WorkloadType::Mixed);
    }

    #[test]
    fn unknown_workload_is_invalid_input() {
        let err = parse_workload("batch").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("Web Services"));
    }

    #[test]
    fn nan_budget_is_rejected() {
        let err = UserInputs::new(10, 10, f64::NAN, 1.0, WorkloadType::Mixed).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn negative_values_are_domain_values() {
        let inputs = UserInputs::new(-5, 0, -1.0, 0.0, WorkloadType::Storage).unwrap();
        assert_eq!(inputs.racks(), -5);
        assert_eq!(inputs.budget_usd(), -1.0);
    }

    #[test]
    fn display_names_match_catalogue() {
        assert_eq!(TopologyType::FatTree.to_string(), "Fat-Tree");
        assert_eq!(WorkloadType::WebServices.to_string(), "Web Services");
        assert_eq!(ScaleCategory::Large.to_string(), "Large");
    }

    #[test]
    fn classification_space_has_27_triples() {
        assert_eq!(ClassificationResult::all().len(), 27);
    }
}
