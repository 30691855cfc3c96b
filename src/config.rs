use crate::error::{TopoPlanError, TpResult};
use crate::scorer::Criterion;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Maximum distance of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub thresholds: ThresholdConfig,
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub confidence: ConfidenceParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    #[command(flatten)]
    pub scale: ScaleThresholds,
    #[command(flatten)]
    pub budget: BudgetThresholds,
    #[command(flatten)]
    pub power: PowerThresholds,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScaleThresholds {
    #[arg(long, default_value_t = 20)]
    pub small_max_racks: i64,
    #[arg(long, default_value_t = 200)]
    pub small_max_servers: i64,
    #[arg(long, default_value_t = 100)]
    pub large_min_racks: i64,
    #[arg(long, default_value_t = 1000)]
    pub large_min_servers: i64,
}

impl Default for ScaleThresholds {
    fn default() -> Self {
        Self {
            small_max_racks: 20,
            small_max_servers: 200,
            large_min_racks: 100,
            large_min_servers: 1000,
        }
    }
}

// Budget and power share field names, so their clap ids are namespaced.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BudgetThresholds {
    #[arg(id = "budget_low_max", long = "budget-low-max", default_value_t = 100_000.0)]
    pub low_max: f64,
    #[arg(id = "budget_high_min", long = "budget-high-min", default_value_t = 500_000.0)]
    pub high_min: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            low_max: 100_000.0,
            high_min: 500_000.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PowerThresholds {
    #[arg(id = "power_low_max", long = "power-low-max", default_value_t = 50.0)]
    pub low_max: f64,
    #[arg(id = "power_high_min", long = "power-high-min", default_value_t = 200.0)]
    pub high_min: f64,
}

impl Default for PowerThresholds {
    fn default() -> Self {
        Self {
            low_max: 50.0,
            high_min: 200.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    #[arg(long, default_value_t = 0.30)]
    pub scale_match: f64,
    #[arg(long, default_value_t = 0.25)]
    pub budget_match: f64,
    #[arg(long, default_value_t = 0.20)]
    pub power_match: f64,
    #[arg(long, default_value_t = 0.15)]
    pub workload_suitability: f64,
    #[arg(long, default_value_t = 0.10)]
    pub scalability_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            scale_match: 0.30,
            budget_match: 0.25,
            power_match: 0.20,
            workload_suitability: 0.15,
            scalability_match: 0.10,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfidenceParams {
    #[arg(id = "confidence_base", long = "confidence-base", default_value_t = 0.70)]
    pub base: f64,
    #[arg(long, default_value_t = 0.10)]
    pub agreement_bonus: f64,
    #[arg(id = "confidence_max", long = "confidence-max", default_value_t = 0.80)]
    pub max: f64,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            base: 0.70,
            agreement_bonus: 0.10,
            max: 0.80,
        }
    }
}

impl Config {
    /// Reads a JSON config. Missing sections fall back to defaults.
    /// The result is validated before it is returned.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TpResult<Self> {
        let path = path.as_ref();
        info!("Loading planner config from {:?}", path);
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TpResult<()> {
        self.thresholds.validate()?;
        self.weights.validate()?;
        self.confidence.validate()
    }

    /// Copies only the values the user typed on the command line onto `self`.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($($field:ident).+, $arg_id:expr) => {
                if matches.value_source($arg_id) == Some(ValueSource::CommandLine) {
                    self.$($field).+ = cli.$($field).+.clone();
                }
            };
        }

        update_if_present!(thresholds.scale.small_max_racks, "small_max_racks");
        update_if_present!(thresholds.scale.small_max_servers, "small_max_servers");
        update_if_present!(thresholds.scale.large_min_racks, "large_min_racks");
        update_if_present!(thresholds.scale.large_min_servers, "large_min_servers");

        update_if_present!(thresholds.budget.low_max, "budget_low_max");
        update_if_present!(thresholds.budget.high_min, "budget_high_min");
        update_if_present!(thresholds.power.low_max, "power_low_max");
        update_if_present!(thresholds.power.high_min, "power_high_min");

        update_if_present!(weights.scale_match, "scale_match");
        update_if_present!(weights.budget_match, "budget_match");
        update_if_present!(weights.power_match, "power_match");
        update_if_present!(weights.workload_suitability, "workload_suitability");
        update_if_present!(weights.scalability_match, "scalability_match");

        update_if_present!(confidence.base, "confidence_base");
        update_if_present!(confidence.agreement_bonus, "agreement_bonus");
        update_if_present!(confidence.max, "confidence_max");
    }
}

impl ThresholdConfig {
    pub fn validate(&self) -> TpResult<()> {
        let s = &self.scale;
        if s.small_max_racks > s.large_min_racks {
            return Err(TopoPlanError::Config(format!(
                "small_max_racks ({}) exceeds large_min_racks ({})",
                s.small_max_racks, s.large_min_racks
            )));
        }
        if s.small_max_servers > s.large_min_servers {
            return Err(TopoPlanError::Config(format!(
                "small_max_servers ({}) exceeds large_min_servers ({})",
                s.small_max_servers, s.large_min_servers
            )));
        }
        check_band("budget", self.budget.low_max, self.budget.high_min)?;
        check_band("power", self.power.low_max, self.power.high_min)
    }
}

fn check_band(name: &str, low_max: f64, high_min: f64) -> TpResult<()> {
    if !low_max.is_finite() || !high_min.is_finite() {
        return Err(TopoPlanError::Config(format!(
            "{} thresholds must be finite (low_max={}, high_min={})",
            name, low_max, high_min
        )));
    }
    if low_max > high_min {
        return Err(TopoPlanError::Config(format!(
            "{} low_max ({}) exceeds high_min ({})",
            name, low_max, high_min
        )));
    }
    Ok(())
}

impl ScoringWeights {
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::ScaleMatch => self.scale_match,
            Criterion::BudgetMatch => self.budget_match,
            Criterion::PowerMatch => self.power_match,
            Criterion::WorkloadSuitability => self.workload_suitability,
            Criterion::ScalabilityMatch => self.scalability_match,
        }
    }

    pub fn sum(&self) -> f64 {
        self.scale_match
            + self.budget_match
            + self.power_match
            + self.workload_suitability
            + self.scalability_match
    }

    pub fn validate(&self) -> TpResult<()> {
        for criterion in Criterion::ALL {
            let w = self.weight(criterion);
            if !w.is_finite() || !(0.0..=1.0).contains(&w) {
                return Err(TopoPlanError::Config(format!(
                    "weight {} must be within [0, 1], got {}",
                    criterion.key(),
                    w
                )));
            }
        }

        let total = self.sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(TopoPlanError::Config(format!(
                "scoring weights must sum to 1.0, got {:.6}",
                total
            )));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TpResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights: ScoringWeights = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }
}

impl ConfidenceParams {
    pub fn validate(&self) -> TpResult<()> {
        let finite =
            self.base.is_finite() && self.agreement_bonus.is_finite() && self.max.is_finite();
        if !finite || self.agreement_bonus < 0.0 {
            return Err(TopoPlanError::Config(format!(
                "confidence values must be finite with a non-negative bonus: {:?}",
                self
            )));
        }
        if !(0.0 <= self.base && self.base <= self.max && self.max <= 1.0) {
            return Err(TopoPlanError::Config(format!(
                "confidence requires 0 <= base ({}) <= max ({}) <= 1",
                self.base, self.max
            )));
        }
        Ok(())
    }

    pub fn score(&self, agreement: bool) -> f64 {
        let bonus = if agreement { self.agreement_bonus } else { 0.0 };
        (self.base + bonus).min(self.max)
    }
}
