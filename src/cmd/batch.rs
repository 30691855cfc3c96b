use crate::reports;
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use topoplan::config::Config;
use topoplan::loader::load_batch_file;
use topoplan::{Planner, TopologyRecommendation, TpResult, UserInputs};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with header racks,servers,budget_usd,power_kw,workload
    #[arg(short, long)]
    pub input: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub line: usize,
    #[serde(skip)]
    pub inputs: Option<UserInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<TopologyRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(args: BatchArgs, planner: Arc<Planner>) -> TpResult<()> {
    info!("📂 Loading batch: {}", args.input);
    let rows = load_batch_file(&args.input)?;

    let outcomes: Vec<BatchOutcome> = rows
        .par_iter()
        .map(|row| match &row.inputs {
            Ok(inputs) => BatchOutcome {
                line: row.line,
                inputs: Some(*inputs),
                recommendation: Some(planner.recommend(inputs)),
                error: None,
            },
            Err(e) => BatchOutcome {
                line: row.line,
                inputs: None,
                recommendation: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    info!(
        "✅ Evaluated {} rows ({} rejected)",
        outcomes.len() - failed,
        failed
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        reports::print_batch(&outcomes);
    }
    Ok(())
}
