use crate::reports;
use clap::Args;
use std::str::FromStr;
use std::sync::Arc;
use topoplan::{Planner, TopoPlanError, TopologyType, TpResult};

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Show full details for one topology.
    #[arg(short, long)]
    pub topology: Option<String>,
}

pub fn run(args: CompareArgs, planner: Arc<Planner>) -> TpResult<()> {
    let profiles = planner.profiles();

    match args.topology {
        Some(name) => {
            let topology = TopologyType::from_str(name.trim()).map_err(|_| {
                TopoPlanError::InvalidInput(format!("unknown topology '{}'", name))
            })?;
            reports::print_topology_details(profiles.get(topology));
        }
        None => reports::print_comparison(&profiles.comparison()),
    }
    Ok(())
}
