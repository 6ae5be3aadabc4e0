// src/simulators/series.rs

use serde::Serialize;

/// Running sum of per-block profit rates for one actor.
///
/// Accumulation is piecewise: while the rate stays bit-identical the entry
/// is `segment_base + n * rate` rather than a chain of additions, so a
/// time-invariant run holds exactly `(t + 1) * rate` at index `t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CumulativeSeries {
    values: Vec<f64>,
    #[serde(skip)]
    segment_base: f64,
    #[serde(skip)]
    segment_rate: Option<f64>,
    #[serde(skip)]
    segment_len: u64,
}

impl CumulativeSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn push(&mut self, rate: f64) {
        match self.segment_rate {
            Some(current) if current.to_bits() == rate.to_bits() => self.segment_len += 1,
            _ => {
                self.segment_base = self.last().unwrap_or(0.0);
                self.segment_rate = Some(rate);
                self.segment_len = 1;
            }
        }
        self.values
            .push(self.segment_base + self.segment_len as f64 * rate);
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Totals as they stand when each block begins: index `t` holds the sum
    /// over blocks `0..t`, so it starts at zero and a constant rate gives
    /// exactly `t * rate`. Same length as [`values`](Self::values).
    pub fn before_each_block(&self) -> Vec<f64> {
        let mut opening = Vec::with_capacity(self.values.len());
        if !self.values.is_empty() {
            opening.push(0.0);
            opening.extend_from_slice(&self.values[..self.values.len() - 1]);
        }
        opening
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.segment_base = 0.0;
        self.segment_rate = None;
        self.segment_len = 0;
    }
}

impl Extend<f64> for CumulativeSeries {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, rates: I) {
        for rate in rates {
            self.push(rate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_rate_is_exact_multiple() {
        let rate = -0.0066435230743246455;
        let mut series = CumulativeSeries::with_capacity(1_000);
        series.extend(std::iter::repeat(rate).take(1_000));
        for (t, &v) in series.values().iter().enumerate() {
            assert_eq!(v, (t + 1) as f64 * rate);
        }
    }

    #[test]
    fn test_before_each_block_starts_at_zero() {
        let rate = 0.0133;
        let mut series = CumulativeSeries::default();
        assert!(series.before_each_block().is_empty());
        series.extend(std::iter::repeat(rate).take(100));
        let opening = series.before_each_block();
        assert_eq!(opening.len(), 100);
        for (t, &v) in opening.iter().enumerate() {
            assert_eq!(v, t as f64 * rate);
        }
    }

    #[test]
    fn test_rate_change_starts_new_segment() {
        let mut series = CumulativeSeries::default();
        series.extend([1.0, 1.0, 0.5, 0.5, 0.5, 2.0]);
        assert_eq!(series.values(), &[1.0, 2.0, 2.5, 3.0, 3.5, 5.5]);
        assert_eq!(series.last(), Some(5.5));
    }

    #[test]
    fn test_clear_resets_segment() {
        let mut series = CumulativeSeries::default();
        series.extend([0.25, 0.25]);
        series.clear();
        assert!(series.is_empty());
        series.push(0.25);
        assert_eq!(series.values(), &[0.25]);
    }
}
