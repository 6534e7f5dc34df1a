//! Rendering of allocation results

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

use cs_balancing_core::{Allocation, AgentId};

/// How the result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the winning agent id (0 when there is no unique winner)
    Id,
    /// Per-agent table followed by the result
    Table,
    /// Full allocation as JSON
    Json,
}

#[derive(Tabled)]
struct LoadRow {
    #[tabled(rename = "agent")]
    agent: i64,
    #[tabled(rename = "score")]
    score: i64,
    #[tabled(rename = "customers")]
    customers: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    winner: i64,
    allocation: &'a Allocation,
}

pub fn render(allocation: &Allocation, format: OutputFormat) -> anyhow::Result<String> {
    let winner = allocation.winner().unwrap_or(AgentId::NO_WINNER).0;

    let rendered = match format {
        OutputFormat::Id => winner.to_string(),
        OutputFormat::Table => {
            let rows: Vec<LoadRow> = allocation
                .loads()
                .iter()
                .map(|load| LoadRow {
                    agent: load.agent.id.0,
                    score: load.agent.score.0,
                    customers: load.count(),
                })
                .collect();
            format!(
                "{}\nunassigned: {}\nwinner: {}",
                Table::new(rows),
                allocation.unassigned().len(),
                winner
            )
        }
        OutputFormat::Json => serde_json::to_string_pretty(&JsonReport { winner, allocation })?,
    };

    Ok(rendered)
}
