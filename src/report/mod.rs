// src/report/mod.rs

//! Output side of an experiment: printed summaries, a JSON dump of the
//! numeric series and one SVG chart per run.

pub mod chart;
pub mod summary;

pub use chart::LineChart;
pub use summary::Summary;

use crate::config::{ModelParams, SimulationConfig};
use crate::error::Result;
use crate::simulators::SimulationResult;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// One named series in a report.
#[derive(Debug, Clone, Serialize)]
pub struct NamedSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Serializable record of a run: inputs, headline numbers and every series.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub name: String,
    pub params: ModelParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<SimulationConfig>,
    pub summary: Vec<(String, f64)>,
    pub series: Vec<NamedSeries>,
}

impl RunReport {
    pub fn new<T: Into<String>>(name: T, params: ModelParams) -> Self {
        Self {
            name: name.into(),
            params,
            config: None,
            summary: Vec::new(),
            series: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_summary(mut self, summary: &Summary) -> Self {
        self.summary = summary.rows().to_vec();
        self
    }

    pub fn series<T: Into<String>>(mut self, label: T, values: &[f64]) -> Self {
        self.series.push(NamedSeries {
            label: label.into(),
            values: values.to_vec(),
        });
        self
    }

    /// Adds the three cumulative actor series of a simulation, prefixed.
    pub fn simulation(self, prefix: &str, result: &SimulationResult) -> Self {
        self.series(format!("{prefix}manager"), result.manager.values())
            .series(format!("{prefix}lp_auction"), result.lp_auction.values())
            .series(format!("{prefix}lp_normal"), result.lp_normal.values())
            .series(format!("{prefix}rent"), &result.rents)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Writes `<name>.svg` and `<name>.json` into `dir` and returns the chart path.
pub fn write_outputs<P: AsRef<Path>>(
    dir: P,
    report: &RunReport,
    chart: &LineChart,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let chart_path = dir.join(format!("{}.svg", report.name));
    let json_path = dir.join(format!("{}.json", report.name));
    chart.save(&chart_path)?;
    report.write_json(&json_path)?;
    info!(chart = %chart_path.display(), data = %json_path.display(), "report written");
    Ok(chart_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_outputs_are_written() {
        let dir = std::env::temp_dir().join(format!("amm_auction_sim_report_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let mut summary = Summary::new("test");
        summary.add("final", 2.0);
        let report = RunReport::new("unit_report", ModelParams::default())
            .with_summary(&summary)
            .series("line", &[1.0, 2.0]);
        let chart = LineChart::new("unit").line("line", &[1.0, 2.0]);

        let chart_path = write_outputs(&dir, &report, &chart).unwrap();
        assert!(chart_path.exists());

        let json = fs::read_to_string(dir.join("unit_report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "unit_report");
        assert_eq!(value["params"]["d"], 8.0);
        assert_eq!(value["series"][0]["values"][1], 2.0);
        assert!(value.get("config").is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let report = RunReport::new("nowhere", ModelParams::default());
        let result = report.write_json("/definitely/not/a/dir/nowhere.json");
        assert!(matches!(result, Err(crate::error::SimError::Io(_))));
    }
}
