// src/io/reporting.rs

use crate::error::ReportError;
use crate::simulation::engine::Trajectory;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Renders a trajectory as a fixed-width console table followed by its total.
pub fn render_trajectory(trajectory: &Trajectory) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n--- Optimal Ordering Policy ({}) ---", trajectory.label);
    let _ = writeln!(
        out,
        "{:<8} {:<13} {:<8} {:<8} {:<13} {:<11}",
        "Period", "Start stock", "Demand", "Order", "Period cost", "End stock"
    );
    let _ = writeln!(out, "{}", "-".repeat(66));

    for r in &trajectory.records {
        let _ = writeln!(
            out,
            "{:<8} {:<13} {:<8} {:<8} {:<13.2} {:<11}",
            r.period, r.start_stock, r.demand, r.order, r.period_cost, r.end_stock
        );
    }

    let _ = writeln!(out, "\nTotal cost along trajectory: {:.2}", trajectory.total_cost());
    out
}

/// Writes the trajectory rows to a CSV file.
///
/// # Arguments
/// * `path` - The path to save the file (e.g., "results/plan.csv").
/// * `trajectory` - The trajectory to export.
pub fn write_trajectory_csv(path: impl AsRef<Path>, trajectory: &Trajectory) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for record in &trajectory.records {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(
        rows = trajectory.records.len(),
        path = %path.display(),
        "exported trajectory"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::PeriodRecord;

    fn trajectory() -> Trajectory {
        Trajectory {
            label: "Bottom-up".to_string(),
            records: vec![
                PeriodRecord {
                    period: 1,
                    start_stock: 0,
                    demand: 5,
                    order: 5,
                    shortage: 0,
                    period_cost: 20.0,
                    end_stock: 0,
                },
                PeriodRecord {
                    period: 2,
                    start_stock: 0,
                    demand: 1,
                    order: 0,
                    shortage: 1,
                    period_cost: 20.0,
                    end_stock: 0,
                },
            ],
        }
    }

    #[test]
    fn renders_rows_and_total() {
        let text = render_trajectory(&trajectory());
        assert!(text.contains("Optimal Ordering Policy (Bottom-up)"));
        assert!(text.contains("20.00"));
        assert!(text.contains("Total cost along trajectory: 40.00"));
        assert_eq!(text.lines().filter(|l| l.starts_with('1') || l.starts_with('2')).count(), 2);
    }

    #[test]
    fn csv_export_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        write_trajectory_csv(&path, &trajectory()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("period,start_stock,demand,order,shortage,period_cost,end_stock")
        );
        assert_eq!(lines.next(), Some("1,0,5,5,0,20.0,0"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn csv_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plan.csv");
        assert!(write_trajectory_csv(&path, &trajectory()).is_err());
    }
}
