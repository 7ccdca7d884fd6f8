//! Textual and JSON rendering of simulation results.
//!
//! External collaborator of the core: everything here only reads
//! `RunResult`/`Event`/`Client` fields, the core itself never formats or
//! prints anything.

use crate::queue::{AggregateResult, Client, Event, EventKind};
use crate::simulation::error::SimulationResult;
use crate::types::SimulationConfig;
use chrono::Utc;
use serde_json::json;
use std::fmt::Write as _;

/// Decimal places used for all reported statistics.
pub const ROUND_DECIMALS: usize = 5;

/// Placeholder for statistics a degenerate run could not define.
pub const NOT_AVAILABLE: &str = "n/a";

/// Format a statistic with the report precision.
pub fn round(value: f64) -> String {
    format!("{:.*}", ROUND_DECIMALS, value)
}

fn round_opt(value: Option<f64>) -> String {
    value.map(round).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render a simulation instant as wall-clock time of day.
///
/// `time` is in hours from shift start; `start_hour` anchors it to the clock.
/// Runs that drain past midnight get a `+Nd` suffix.
pub fn format_clock(time: f64, start_hour: u32) -> String {
    let total = time + f64::from(start_hour);
    let days = (total / 24.0).floor();
    let remainder = total - days * 24.0;
    let hours = remainder.floor();
    let minutes = ((remainder - hours) * 60.0).floor();

    let mut out = format!("{:02}:{:02}", hours as u32, minutes as u32);
    if days >= 1.0 {
        let _ = write!(out, " +{}d", days as u32);
    }
    out
}

/// Format a simulation instant as both a rounded value and a clock time.
pub fn format_instant(time: f64, start_hour: u32) -> String {
    format!("{} ({})", round(time), format_clock(time, start_hour))
}

fn format_instant_opt(time: Option<f64>, start_hour: u32) -> String {
    time.map(|t| format_instant(t, start_hour)).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Minimal ascii table renderer; the first row is treated as the header.
#[derive(Debug, Default)]
pub struct TextTable {
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of cells.
    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Render the table with rules above the header, below it, and at the end.
    pub fn render(&self) -> String {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return String::new();
        }

        let mut widths = vec![0usize; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let rule: String = {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&"-".repeat(width + 2));
                line.push('+');
            }
            line
        };

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        for (index, row) in self.rows.iter().enumerate() {
            out.push('|');
            for (i, width) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let _ = write!(out, " {:<1$} |", cell, width);
            }
            out.push('\n');
            if index == 0 {
                out.push_str(&rule);
                out.push('\n');
            }
        }
        out.push_str(&rule);
        out
    }
}

/// Render the chronological event log of one run.
pub fn render_event_table(events: &[Event], start_hour: u32) -> String {
    let mut table = TextTable::new();
    table.row(["Event", "Time", "Clients in system"]);
    for event in events {
        let description = match event.kind {
            EventKind::Arrive => format!("Client {} arrived", event.client_id),
            EventKind::Leave => format!("Client {} served", event.client_id),
        };
        table.row([
            description,
            format_instant(event.time, start_hour),
            event.queue_size.to_string(),
        ]);
    }
    table.render()
}

/// Render the per-client record of one run.
pub fn render_client_table(clients: &[Client], start_hour: u32) -> String {
    let mut table = TextTable::new();
    table.row(["Client", "Arrival", "Departure", "Service time", "Queue time", "System time"]);
    for client in clients {
        table.row([
            client.id.to_string(),
            format_instant(client.arrival_time, start_hour),
            format_instant_opt(client.leave_time, start_hour),
            format_instant_opt(client.service_time(), 0),
            format_instant(client.in_queue_time, 0),
            format_instant_opt(client.in_system_time(), 0),
        ]);
    }
    table.render()
}

/// Render the averaged statistics of a whole session.
///
/// `first_run_clients` is the client count of the single illustrative run,
/// when one was kept; counts are not meaningfully averaged across runs.
pub fn render_summary(
    aggregate: &AggregateResult,
    config: &SimulationConfig,
    first_run_clients: Option<usize>,
) -> String {
    let mut table = TextTable::new();
    table.row([
        format!("Estimates over {} run(s)", aggregate.runs),
        format!(
            "shift {:02}:00-{:02}:00",
            config.shift_start_hour, config.shift_end_hour
        ),
    ]);
    if let Some(count) = first_run_clients {
        table.row(["Clients in first run".to_string(), count.to_string()]);
    }
    table.row([
        "Closing time delay".to_string(),
        format_instant(aggregate.closing_time_delay, 0),
    ]);
    table.row([
        "Average time in queue".to_string(),
        format_instant_opt(aggregate.average_queue_time, 0),
    ]);
    table.row([
        "Average time in system".to_string(),
        format_instant_opt(aggregate.average_system_time, 0),
    ]);
    table.row([
        "Server occupancy rate".to_string(),
        round_opt(aggregate.average_occupancy_rate),
    ]);
    table.row([
        "Average queue length".to_string(),
        round_opt(aggregate.average_queue_length),
    ]);
    table.render()
}

/// Serialize the session summary as a pretty-printed JSON document.
pub fn render_summary_json(
    aggregate: &AggregateResult,
    config: &SimulationConfig,
    first_run_clients: Option<usize>,
) -> SimulationResult<String> {
    let document = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "shift": {
            "start_hour": config.shift_start_hour,
            "end_hour": config.shift_end_hour,
            "length_hours": config.shift_length(),
        },
        "first_run_clients": first_run_clients,
        "aggregate": aggregate,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}
