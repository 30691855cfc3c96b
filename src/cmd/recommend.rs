use crate::reports;
use clap::Args;
use std::sync::Arc;
use topoplan::config::Config;
use topoplan::validation::check_inputs;
use topoplan::{Planner, TopoPlanError, TpResult, UserInputs};
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, allow_hyphen_values = true)]
    pub racks: String,

    #[arg(short, long, allow_hyphen_values = true)]
    pub servers: String,

    /// Budget in USD.
    #[arg(short, long, allow_hyphen_values = true)]
    pub budget: String,

    /// Power limit in kW.
    #[arg(short, long, allow_hyphen_values = true)]
    pub power: String,

    #[arg(short, long, default_value = "mixed")]
    pub workload: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Refuse inputs that fail the advisory range checks.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub fn run(args: RecommendArgs, planner: Arc<Planner>) -> TpResult<()> {
    let inputs = UserInputs::parse(
        &args.racks,
        &args.servers,
        &args.budget,
        &args.power,
        &args.workload,
    )?;

    let issues = check_inputs(&inputs);
    for issue in &issues {
        warn!("⚠️  {}", issue);
    }
    if args.strict && !issues.is_empty() {
        let joined: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
        return Err(TopoPlanError::InvalidInput(joined.join("; ")));
    }

    let rec = planner.recommend(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }

    reports::print_inputs(&inputs);
    reports::print_classification(&rec);
    reports::print_score_table(&rec);
    reports::print_explanation(&rec);
    Ok(())
}
