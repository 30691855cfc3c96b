use crate::reports;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;
use topoplan::config::Config;
use topoplan::models::parse_workload;
use topoplan::rules::select_by_rule;
use topoplan::{ClassificationResult, Planner, TopologyType, TpResult};

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "mixed")]
    pub workload: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct AuditRow {
    pub classification: ClassificationResult,
    pub rule_id: u8,
    pub primary: TopologyType,
    pub top_scored: TopologyType,
    pub top_score: f64,
    pub confidence: f64,
}

pub fn run(args: AuditArgs, planner: Arc<Planner>) -> TpResult<()> {
    let workload = parse_workload(&args.workload)?;
    let confidence = &planner.config().confidence;

    let rows: Vec<AuditRow> = ClassificationResult::all()
        .into_iter()
        .map(|c| {
            let outcome = select_by_rule(&c);
            let ranking = planner.scorer().rank(&c, workload);
            let (top_scored, top_score) = ranking
                .first()
                .map(|s| (s.topology, s.total))
                .unwrap_or((outcome.topology, 0.0));
            AuditRow {
                classification: c,
                rule_id: outcome.rule_id,
                primary: outcome.topology,
                top_scored,
                top_score,
                confidence: confidence.score(top_scored == outcome.topology),
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("\n🔎 === RULE AUDIT ({}) === 🔎", workload);
        reports::print_rule_matrix(&rows);
    }
    Ok(())
}
