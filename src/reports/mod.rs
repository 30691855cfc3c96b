use crate::cmd::audit::AuditRow;
use crate::cmd::batch::BatchOutcome;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use topoplan::scorer::Criterion;
use topoplan::topology::{ComparisonRow, TopologyProfile};
use topoplan::{TopologyRecommendation, UserInputs};

/// `$1.50M`, `$250.00K`, `$999.00`.
pub fn format_currency(amount: f64) -> String {
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        format!("${:.2}M", amount / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.2}K", amount / 1_000.0)
    } else {
        format!("${:.2}", amount)
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_inputs(inputs: &UserInputs) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Racks").add_attribute(Attribute::Bold),
        Cell::new("Servers").add_attribute(Attribute::Bold),
        Cell::new("Budget").add_attribute(Attribute::Bold),
        Cell::new("Power").add_attribute(Attribute::Bold),
        Cell::new("Workload").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(inputs.racks()),
        Cell::new(inputs.servers()),
        Cell::new(format_currency(inputs.budget_usd())),
        Cell::new(format!("{:.1} kW", inputs.power_kw())),
        Cell::new(inputs.workload()),
    ]);
    println!("\nDeployment:");
    println!("{}", table);
}

pub fn print_classification(rec: &TopologyRecommendation) {
    let c = &rec.classification;
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Scale").add_attribute(Attribute::Bold),
        Cell::new("Budget").add_attribute(Attribute::Bold),
        Cell::new("Power").add_attribute(Attribute::Bold),
        Cell::new("Rule").add_attribute(Attribute::Bold),
        Cell::new("Recommendation").fg(Color::Cyan),
        Cell::new("Confidence"),
    ]);

    let confidence = if rec.agreement() {
        Cell::new(format!("{:.0}%", rec.confidence * 100.0)).fg(Color::Green)
    } else {
        Cell::new(format!("{:.0}%", rec.confidence * 100.0)).fg(Color::Yellow)
    };

    table.add_row(vec![
        Cell::new(c.scale),
        Cell::new(c.budget),
        Cell::new(c.power),
        Cell::new(format!("#{}", rec.rule_id)),
        Cell::new(rec.primary)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        confidence,
    ]);
    println!("\nClassification:");
    println!("{}", table);
}

pub fn print_score_table(rec: &TopologyRecommendation) {
    let mut table = new_table();

    let mut header = vec![Cell::new("Topology").add_attribute(Attribute::Bold)];
    header.extend(Criterion::ALL.iter().map(|c| Cell::new(c)));
    header.push(Cell::new("Total").fg(Color::Cyan));
    table.add_row(header);
    right_align(&mut table, 1..=Criterion::ALL.len() + 1);

    for topology in &rec.ranked {
        let Some(breakdown) = rec.scores.get(topology) else {
            continue;
        };

        let name = if *topology == rec.primary {
            Cell::new(topology)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(topology).add_attribute(Attribute::Bold)
        };

        let mut row = vec![name];
        row.extend(Criterion::ALL.iter().map(|c| match breakdown.get(*c) {
            Some(s) => Cell::new(format!("{:.2} ({:.3})", s.raw, s.weighted)),
            None => Cell::new("-"),
        }));
        row.push(Cell::new(format!("{:.3}", breakdown.total)).fg(Color::Cyan));
        table.add_row(row);
    }
    println!("\nScores (raw / weighted):");
    println!("{}", table);
}

pub fn print_explanation(rec: &TopologyRecommendation) {
    let e = &rec.explanation;
    println!("\n✅ {}", e.summary);
    println!("   Rule #{} ({})", e.fired_rule, e.rule_name);

    for r in &e.rejected {
        println!("   ✗ {}: {}", r.topology, r.reason);
    }

    if !e.scoring_note.is_empty() {
        println!("\n   ℹ️  {}", e.scoring_note);
    }
}

pub fn print_comparison(rows: &[ComparisonRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Topology").add_attribute(Attribute::Bold),
        Cell::new("Cost"),
        Cell::new("Scalability"),
        Cell::new("Complexity"),
        Cell::new("Description"),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.topology).add_attribute(Attribute::Bold),
            Cell::new(row.cost),
            Cell::new(row.scalability),
            Cell::new(row.complexity),
            Cell::new(row.description),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_topology_details(profile: &TopologyProfile) {
    let ch = &profile.characteristics;
    println!("\n=== {} ===", ch.name);
    println!("{}", ch.description);

    let sections: [(&str, &[&str]); 3] = [
        ("Typical use cases", ch.typical_use_cases),
        ("Advantages", ch.advantages),
        ("Disadvantages", ch.disadvantages),
    ];
    for (title, items) in sections {
        println!("\n{}:", title);
        for item in items {
            println!("  - {}", item);
        }
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Cost").add_attribute(Attribute::Bold),
        Cell::new("Scalability").add_attribute(Attribute::Bold),
        Cell::new("Complexity").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(ch.cost_estimate),
        Cell::new(ch.scalability),
        Cell::new(ch.complexity),
    ]);
    println!("\n{}", table);
}

pub fn print_rule_matrix(rows: &[AuditRow]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Scale").add_attribute(Attribute::Bold),
        Cell::new("Budget").add_attribute(Attribute::Bold),
        Cell::new("Power").add_attribute(Attribute::Bold),
        Cell::new("Rule"),
        Cell::new("Recommendation").fg(Color::Cyan),
        Cell::new("Top Scored"),
        Cell::new("Score"),
        Cell::new("Conf"),
    ]);
    right_align(&mut table, 6..=7);

    for row in rows {
        let top = if row.top_scored == row.primary {
            Cell::new(row.top_scored).fg(Color::Green)
        } else {
            Cell::new(row.top_scored).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(row.classification.scale),
            Cell::new(row.classification.budget),
            Cell::new(row.classification.power),
            Cell::new(format!("#{}", row.rule_id)),
            Cell::new(row.primary).fg(Color::Cyan),
            top,
            Cell::new(format!("{:.3}", row.top_score)),
            Cell::new(format!("{:.2}", row.confidence)),
        ]);
    }
    println!("{}", table);
}

pub fn print_batch(outcomes: &[BatchOutcome]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Line").add_attribute(Attribute::Bold),
        Cell::new("Racks"),
        Cell::new("Servers"),
        Cell::new("Budget"),
        Cell::new("Power"),
        Cell::new("Workload"),
        Cell::new("Recommendation").fg(Color::Cyan),
        Cell::new("Conf"),
    ]);
    right_align(&mut table, 0..=4);

    for o in outcomes {
        match (&o.inputs, &o.recommendation) {
            (Some(i), Some(rec)) => {
                table.add_row(vec![
                    Cell::new(o.line),
                    Cell::new(i.racks()),
                    Cell::new(i.servers()),
                    Cell::new(format_currency(i.budget_usd())),
                    Cell::new(format!("{:.1} kW", i.power_kw())),
                    Cell::new(i.workload()),
                    Cell::new(rec.primary).fg(Color::Cyan),
                    Cell::new(format!("{:.2}", rec.confidence)),
                ]);
            }
            _ => {
                let msg = o.error.as_deref().unwrap_or("unknown error");
                table.add_row(vec![
                    Cell::new(o.line),
                    Cell::new(msg).fg(Color::Red),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new("-"),
                    Cell::new(""),
                ]);
            }
        }
    }
    println!("\n{}", table);
}
