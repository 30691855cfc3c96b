use crate::config::{ScaleThresholds, ThresholdConfig};
use crate::models::{ClassificationResult, Level, ScaleCategory, UserInputs};

/// SMALL is checked first, so a deployment with few servers is SMALL even if
/// its rack count alone would make it LARGE.
pub fn classify_scale(racks: i64, servers: i64, t: &ScaleThresholds) -> ScaleCategory {
    if racks < t.small_max_racks || servers < t.small_max_servers {
        ScaleCategory::Small
    } else if racks > t.large_min_racks || servers > t.large_min_servers {
        ScaleCategory::Large
    } else {
        ScaleCategory::Medium
    }
}

/// Bands a value against `[low_max, high_min]`. Both bounds belong to MEDIUM.
pub fn classify_level(value: f64, low_max: f64, high_min: f64) -> Level {
    if value < low_max {
        Level::Low
    } else if value > high_min {
        Level::High
    } else {
        Level::Medium
    }
}

pub fn classify(inputs: &UserInputs, cfg: &ThresholdConfig) -> ClassificationResult {
    ClassificationResult {
        scale: classify_scale(inputs.racks(), inputs.servers(), &cfg.scale),
        budget: classify_level(inputs.budget_usd(), cfg.budget.low_max, cfg.budget.high_min),
        power: classify_level(inputs.power_kw(), cfg.power.low_max, cfg.power.high_min),
    }
}
