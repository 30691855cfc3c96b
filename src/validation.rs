//! Advisory range checks for the presentation layer.
//!
//! The engine classifies any number it is given. These checks only flag
//! values that are probably typos so a front end can warn or refuse.

use crate::models::UserInputs;
use serde::Serialize;
use std::fmt;

pub const MAX_RACKS: i64 = 10_000;
pub const MAX_SERVERS: i64 = 1_000_000;
pub const MAX_BUDGET_USD: f64 = 1_000_000_000.0;
pub const MAX_POWER_KW: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputIssue {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn issue(field: &'static str, message: &str) -> InputIssue {
    InputIssue {
        field,
        message: message.to_string(),
    }
}

pub fn check_inputs(inputs: &UserInputs) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    if inputs.racks() <= 0 {
        issues.push(issue("racks", "Number of racks must be positive"));
    } else if inputs.racks() > MAX_RACKS {
        issues.push(issue("racks", "Number of racks seems unreasonably high (> 10,000)"));
    }

    if inputs.servers() <= 0 {
        issues.push(issue("servers", "Number of servers must be positive"));
    } else if inputs.servers() > MAX_SERVERS {
        issues.push(issue(
            "servers",
            "Number of servers seems unreasonably high (> 1,000,000)",
        ));
    }

    if inputs.budget_usd() < 0.0 {
        issues.push(issue("budget_usd", "Budget cannot be negative"));
    } else if inputs.budget_usd() > MAX_BUDGET_USD {
        issues.push(issue("budget_usd", "Budget seems unreasonably high (> $1B)"));
    }

    if inputs.power_kw() <= 0.0 {
        issues.push(issue("power_kw", "Power limit must be positive"));
    } else if inputs.power_kw() > MAX_POWER_KW {
        issues.push(issue("power_kw", "Power limit seems unreasonably high (> 100 MW)"));
    }

    issues
}
