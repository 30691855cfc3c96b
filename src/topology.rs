use crate::error::{TopoPlanError, TpResult};
use crate::models::{Level, ScaleCategory, TopologyType, WorkloadType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::Display;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    Low,
    Medium,
    High,
    #[strum(to_string = "Very High")]
    VeryHigh,
}

/// Descriptive catalogue entry for a topology.
#[derive(Debug, Clone, Serialize)]
pub struct TopologyCharacteristics {
    pub name: &'static str,
    pub description: &'static str,
    pub typical_use_cases: &'static [&'static str],
    pub advantages: &'static [&'static str],
    pub disadvantages: &'static [&'static str],
    pub cost_estimate: Rating,
    pub scalability: Rating,
    pub complexity: Rating,
}

/// Raw criterion scores in [0, 1], indexed by category `index()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchTable {
    pub scale: [f64; ScaleCategory::COUNT],
    pub budget: [f64; Level::COUNT],
    pub power: [f64; Level::COUNT],
    pub workload: [f64; WorkloadType::COUNT],
    pub scalability: [f64; ScaleCategory::COUNT],
}

impl MatchTable {
    pub fn scale(&self, c: ScaleCategory) -> f64 {
        self.scale[c.index()]
    }

    pub fn budget(&self, c: Level) -> f64 {
        self.budget[c.index()]
    }

    pub fn power(&self, c: Level) -> f64 {
        self.power[c.index()]
    }

    pub fn workload(&self, w: WorkloadType) -> f64 {
        self.workload[w.index()]
    }

    pub fn scalability(&self, c: ScaleCategory) -> f64 {
        self.scalability[c.index()]
    }

    pub fn validate(&self, topology: TopologyType) -> TpResult<()> {
        let rows: [(&str, &[f64]); 5] = [
            ("scale", &self.scale),
            ("budget", &self.budget),
            ("power", &self.power),
            ("workload", &self.workload),
            ("scalability", &self.scalability),
        ];
        for (name, values) in rows {
            for (i, v) in values.iter().enumerate() {
                if !v.is_finite() || !(0.0..=1.0).contains(v) {
                    return Err(TopoPlanError::Config(format!(
                        "{} {} match score #{} must be within [0, 1], got {}",
                        topology, name, i, v
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopologyProfile {
    pub topology: TopologyType,
    pub characteristics: TopologyCharacteristics,
    pub matches: MatchTable,
}

/// One profile per topology, held in `TopologyType` order.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSet {
    profiles: Vec<TopologyProfile>,
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl ProfileSet {
    pub fn standard() -> Self {
        Self {
            profiles: TopologyType::iter()
                .map(|t| TopologyProfile {
                    topology: t,
                    characteristics: characteristics(t),
                    matches: standard_matches(t),
                })
                .collect(),
        }
    }

    /// Replaces every match table. All three topologies must be present.
    pub fn with_match_tables(tables: BTreeMap<TopologyType, MatchTable>) -> TpResult<Self> {
        let mut set = Self::standard();
        for profile in set.profiles.iter_mut() {
            let table = tables.get(&profile.topology).ok_or_else(|| {
                TopoPlanError::Config(format!("match table for {} is missing", profile.topology))
            })?;
            profile.matches = table.clone();
        }
        set.validate()?;
        Ok(set)
    }

    pub fn load_match_tables<P: AsRef<Path>>(path: P) -> TpResult<Self> {
        let path = path.as_ref();
        info!("Loading match tables from {:?}", path);
        let content = fs::read_to_string(path)?;
        let tables: BTreeMap<TopologyType, MatchTable> = serde_json::from_str(&content)?;
        Self::with_match_tables(tables)
    }

    pub fn validate(&self) -> TpResult<()> {
        for (expected, profile) in TopologyType::iter().zip(&self.profiles) {
            if profile.topology != expected {
                return Err(TopoPlanError::Config(format!(
                    "profile order broken: expected {}, found {}",
                    expected, profile.topology
                )));
            }
            profile.matches.validate(profile.topology)?;
        }
        if self.profiles.len() != TopologyType::COUNT {
            return Err(TopoPlanError::Config(format!(
                "expected {} topology profiles, found {}",
                TopologyType::COUNT,
                self.profiles.len()
            )));
        }
        Ok(())
    }

    pub fn get(&self, topology: TopologyType) -> &TopologyProfile {
        &self.profiles[topology.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopologyProfile> {
        self.profiles.iter()
    }

    pub fn comparison(&self) -> Vec<ComparisonRow> {
        self.profiles
            .iter()
            .map(|p| ComparisonRow {
                topology: p.topology,
                cost: p.characteristics.cost_estimate,
                scalability: p.characteristics.scalability,
                complexity: p.characteristics.complexity,
                description: p.characteristics.description,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub topology: TopologyType,
    pub cost: Rating,
    pub scalability: Rating,
    pub complexity: Rating,
    pub description: &'static str,
}

pub fn standard_matches(topology: TopologyType) -> MatchTable {
    match topology {
        TopologyType::ThreeTier => MatchTable {
            scale: [1.0, 0.6, 0.2],
            budget: [1.0, 0.7, 0.3],
            power: [1.0, 0.6, 0.3],
            workload: [0.3, 0.7, 0.8, 0.5],
            scalability: [0.9, 0.5, 0.2],
        },
        TopologyType::LeafSpine => MatchTable {
            scale: [0.5, 0.9, 0.95],
            budget: [0.4, 0.9, 0.8],
            power: [0.5, 0.9, 0.8],
            workload: [0.8, 0.9, 0.7, 0.95],
            scalability: [0.4, 0.9, 0.95],
        },
        TopologyType::FatTree => MatchTable {
            scale: [0.1, 0.4, 1.0],
            budget: [0.1, 0.3, 1.0],
            power: [0.2, 0.4, 1.0],
            workload: [1.0, 0.6, 0.5, 0.7],
            scalability: [0.2, 0.5, 1.0],
        },
    }
}

pub fn characteristics(topology: TopologyType) -> TopologyCharacteristics {
    match topology {
        TopologyType::ThreeTier => TopologyCharacteristics {
            name: "Three-Tier",
            description: "Traditional hierarchical architecture with core, aggregation, \
                and access layers. Suitable for small to medium deployments.",
            typical_use_cases: &[
                "Small data centers (< 20 racks)",
                "Legacy infrastructure",
                "Cost-sensitive deployments",
            ],
            advantages: &[
                "Simple to design and manage",
                "Lower initial cost",
                "Clear separation of layers",
                "Good for predictable traffic patterns",
            ],
            disadvantages: &[
                "Limited scalability",
                "Potential bottlenecks at aggregation layer",
                "Higher latency for east-west traffic",
                "Less efficient for modern cloud workloads",
            ],
            cost_estimate: Rating::Low,
            scalability: Rating::Low,
            complexity: Rating::Low,
        },
        TopologyType::LeafSpine => TopologyCharacteristics {
            name: "Leaf-Spine",
            description: "Modern two-tier architecture with leaf switches connecting \
                servers and spine switches providing inter-leaf connectivity.",
            typical_use_cases: &[
                "Medium to large data centers (20-100 racks)",
                "Cloud computing environments",
                "Virtualized workloads",
                "High east-west traffic",
            ],
            advantages: &[
                "Excellent scalability",
                "Low latency (equal hop count)",
                "High bisection bandwidth",
                "Good for dynamic workloads",
                "Industry standard for modern DCs",
            ],
            disadvantages: &[
                "Higher cost than three-tier",
                "Requires more switches",
                "More complex to manage at scale",
            ],
            cost_estimate: Rating::Medium,
            scalability: Rating::High,
            complexity: Rating::Medium,
        },
        TopologyType::FatTree => TopologyCharacteristics {
            name: "Fat-Tree",
            description: "Multi-level hierarchical topology with increasing bandwidth \
                toward the core, built for large-scale deployments.",
            typical_use_cases: &[
                "Large data centers (> 100 racks)",
                "High-performance computing (HPC)",
                "AI/ML training clusters",
                "Scientific computing",
            ],
            advantages: &[
                "Maximum scalability",
                "Optimal bisection bandwidth",
                "No oversubscription at core",
                "Excellent for high-bandwidth workloads",
                "Supports massive scale",
            ],
            disadvantages: &[
                "Highest cost",
                "Complex design and management",
                "Requires significant power and cooling",
                "Overkill for smaller deployments",
            ],
            cost_estimate: Rating::High,
            scalability: Rating::VeryHigh,
            complexity: Rating::High,
        },
    }
}
