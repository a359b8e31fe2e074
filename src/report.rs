//! Plain-text rendering of simulation results.
//!
//! Three sections, matching what a front end shows for a run:
//! - Gantt line: one label per tick (`P1 (0ms)`, `IDLE1 (2ms)`) joined by ` | `
//! - Process details table: arrival, burst, waiting and turnaround per process
//! - Metrics: the four aggregates, two decimals

use std::fmt::Write;

use crate::models::SimulationResult;
use crate::scheduler::Metrics;

/// Timeline as a single line of per-tick labels.
pub fn gantt_line(result: &SimulationResult) -> String {
    result
        .timeline
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Per-process table.
pub fn details_table(result: &SimulationResult) -> String {
    let mut table = format!(
        "{:^9} {:^12} {:^10} {:^12} {:^15}\n{}\n",
        "Process",
        "Arrival",
        "Burst",
        "Waiting",
        "Turnaround",
        "-".repeat(62)
    );

    for o in &result.outcomes {
        let _ = writeln!(
            table,
            "{:^9} {:^12} {:^10} {:^12} {:^15}",
            format!("P{}", o.id),
            o.arrival_time,
            o.burst_time,
            o.waiting_time,
            o.turnaround_time
        );
    }

    table
}

/// Aggregate metrics, one per line.
pub fn metrics_summary(metrics: &Metrics) -> String {
    format!(
        "Average Waiting Time: {:.2}\n\
         Average Turnaround Time: {:.2}\n\
         Throughput: {:.2} processes/unit time\n\
         CPU Efficiency: {:.2}%\n",
        metrics.avg_waiting_time,
        metrics.avg_turnaround_time,
        metrics.throughput,
        metrics.cpu_efficiency
    )
}

/// Full report: heading, Gantt line, details table and metrics.
pub fn render(result: &SimulationResult) -> String {
    format!(
        "=== {} ===\n\n--- Gantt Chart ---\n{}\n\n--- Process Details ---\n{}\n--- Metrics ---\n{}",
        result.discipline,
        gantt_line(result),
        details_table(result),
        metrics_summary(&result.metrics)
    )
}

/// Side-by-side metrics for several runs over the same workload.
pub fn comparison_table(results: &[SimulationResult]) -> String {
    let mut table = format!(
        "{:<28} {:>10} {:>12} {:>11} {:>11}\n{}\n",
        "Discipline",
        "Avg Wait",
        "Avg Turn",
        "Throughput",
        "CPU %",
        "-".repeat(76)
    );

    for r in results {
        let m = &r.metrics;
        let _ = writeln!(
            table,
            "{:<28} {:>10.2} {:>12.2} {:>11.2} {:>11.2}",
            r.discipline.to_string(),
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.throughput,
            m.cpu_efficiency
        );
    }

    table
}
