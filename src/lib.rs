pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod explain;
pub mod loader;
pub mod models;
pub mod recommend;
pub mod rules;
pub mod scorer;
pub mod topology;
pub mod validation;
// cmd and reports belong to the binary (see main.rs).

pub use error::{TopoPlanError, TpResult};
pub use models::{ClassificationResult, Level, ScaleCategory, TopologyType, UserInputs, WorkloadType};
pub use recommend::{recommend, Planner, TopologyRecommendation};
