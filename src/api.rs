use crate::config::Config;
use crate::error::{TopoPlanError, TpResult};
use crate::models::{parse_workload, UserInputs};
use crate::recommend::{Planner, TopologyRecommendation};
use crate::topology::ProfileSet;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Shared front door for presentation layers. Requests read an `Arc`
/// snapshot; `reload` swaps in a fully validated replacement.
pub struct PlannerService {
    current: RwLock<Arc<Planner>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub racks: i64,
    pub servers: i64,
    pub budget_usd: f64,
    pub power_kw: f64,
    pub workload: String,
}

impl AnalysisRequest {
    pub fn to_inputs(&self) -> TpResult<UserInputs> {
        UserInputs::new(
            self.racks,
            self.servers,
            self.budget_usd,
            self.power_kw,
            parse_workload(&self.workload)?,
        )
    }
}

impl PlannerService {
    pub fn new(planner: Planner) -> Self {
        Self {
            current: RwLock::new(Arc::new(planner)),
        }
    }

    pub fn snapshot(&self) -> Arc<Planner> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a consistent planner.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Validates the new configuration before touching the live one.
    /// On error the previous planner stays in service.
    pub fn reload(&self, config: Config, profiles: ProfileSet) -> TpResult<()> {
        let planner = Arc::new(Planner::new(config, profiles)?);
        let mut guard = match self.current.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = planner;
        info!("Planner configuration reloaded");
        Ok(())
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> TpResult<TopologyRecommendation> {
        let inputs = request.to_inputs()?;
        Ok(self.snapshot().recommend(&inputs))
    }

    /// Parses a JSON request body. Shape and type errors surface as
    /// `InvalidInput`, not as JSON errors.
    pub fn analyze_json(&self, body: &str) -> TpResult<TopologyRecommendation> {
        let request: AnalysisRequest = serde_json::from_str(body)
            .map_err(|e| TopoPlanError::InvalidInput(format!("malformed request: {}", e)))?;
        self.analyze(&request)
    }
}
