// src/report/chart.rs

//! Line charts of run histories, drawn with `plotters` into an SVG document.

use crate::error::{Result, SimError};
use plotters::prelude::*;
use std::fs;
use std::path::Path;

const SIZE: (u32, u32) = (1000, 600);
const TICKS: usize = 6;
/// Long runs are thinned to at most this many vertices per line.
const MAX_POINTS: usize = 2_000;

#[derive(Debug, Clone)]
struct Series {
    label: String,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Series {
    /// Every `stride`-th point plus the last one.
    fn thinned(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let n = self.xs.len();
        let stride = n.div_ceil(MAX_POINTS).max(1);
        self.xs
            .iter()
            .zip(&self.ys)
            .enumerate()
            .filter(move |(j, _)| j % stride == 0 || j + 1 == n)
            .map(|(_, (&x, &y))| (x, y))
    }
}

#[derive(Debug, Clone)]
pub struct LineChart {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

fn chart_error<E: std::fmt::Display>(err: E) -> SimError {
    SimError::Chart(err.to_string())
}

impl LineChart {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            x_label: "Block".to_string(),
            y_label: "Cumulative profit per unit value".to_string(),
            series: Vec::new(),
        }
    }

    pub fn x_label<T: Into<String>>(mut self, label: T) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label<T: Into<String>>(mut self, label: T) -> Self {
        self.y_label = label.into();
        self
    }

    /// Adds a line plotted against its index.
    pub fn line<T: Into<String>>(mut self, label: T, values: &[f64]) -> Self {
        self.series.push(Series {
            label: label.into(),
            xs: (0..values.len()).map(|i| i as f64).collect(),
            ys: values.to_vec(),
        });
        self
    }

    /// Adds a line with explicit x coordinates. Extra points on either side
    /// are ignored.
    pub fn line_xy<T: Into<String>>(mut self, label: T, xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len().min(ys.len());
        self.series.push(Series {
            label: label.into(),
            xs: xs[..n].to_vec(),
            ys: ys[..n].to_vec(),
        });
        self
    }

    fn bounds(&self) -> Result<(f64, f64, f64, f64)> {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for s in &self.series {
            for (&px, &py) in s.xs.iter().zip(&s.ys) {
                if !px.is_finite() || !py.is_finite() {
                    return Err(SimError::invalid_config(
                        "series",
                        format!("'{}' contains a non-finite point", s.label),
                    ));
                }
                x = (x.0.min(px), x.1.max(px));
                y = (y.0.min(py), y.1.max(py));
            }
        }
        if !x.0.is_finite() {
            return Err(SimError::invalid_config("series", "all series are empty"));
        }
        // Flat ranges still need a non-zero span.
        if x.1 - x.0 == 0.0 {
            x = (x.0 - 0.5, x.1 + 0.5);
        }
        if y.1 - y.0 == 0.0 {
            let pad = if y.0 == 0.0 { 1.0 } else { y.0.abs() * 0.1 };
            y = (y.0 - pad, y.1 + pad);
        }
        Ok((x.0, x.1, y.0, y.1))
    }

    /// Renders the chart as an SVG document.
    pub fn render(&self) -> Result<String> {
        if self.series.is_empty() {
            return Err(SimError::invalid_config("series", "chart has no lines"));
        }
        let (x_min, x_max, y_min, y_max) = self.bounds()?;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;
            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 20))
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(80)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(chart_error)?;
            chart
                .configure_mesh()
                .x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .x_labels(TICKS)
                .y_labels(TICKS)
                .y_label_formatter(&|v| tick_label(*v))
                .draw()
                .map_err(chart_error)?;

            for (i, s) in self.series.iter().enumerate() {
                let color = Palette99::pick(i).to_rgba();
                chart
                    .draw_series(LineSeries::new(s.thinned(), color.stroke_width(2)))
                    .map_err(chart_error)?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                    });
            }
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(chart_error)?;
            root.present().map_err(chart_error)?;
        }
        Ok(svg)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.render()?)?;
        Ok(())
    }
}

fn tick_label(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && (a >= 1e5 || a < 1e-3) {
        format!("{:.2e}", v)
    } else {
        format!("{:.4}", v)
    }
}
