// src/report/summary.rs

use std::fmt;
use tracing::info;

/// Labelled scalar results printed at the end of an experiment.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    title: String,
    rows: Vec<(String, f64)>,
}

impl Summary {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn add<L: Into<String>>(&mut self, label: L, value: f64) -> &mut Self {
        self.rows.push((label.into(), value));
        self
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    /// Prints to stdout and mirrors every row into the log.
    pub fn emit(&self) {
        for (label, value) in &self.rows {
            info!(summary = %self.title, %label, value, "result");
        }
        println!("{}", self);
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        let width = self.rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, value) in &self.rows {
            writeln!(f, "{:<width$} : {:.6}", label, value, width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_aligns_labels() {
        let mut summary = Summary::new("Manager vs LP");
        summary.add("Manager final", 1.5).add("LP final", -0.25);
        let text = summary.to_string();
        assert!(text.starts_with("== Manager vs LP =="));
        assert!(text.contains("Manager final : 1.500000"));
        assert!(text.contains("LP final      : -0.250000"));
        assert_eq!(summary.get("LP final"), Some(-0.25));
        assert_eq!(summary.get("missing"), None);
    }
}
