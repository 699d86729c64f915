//! Scales mapping data values to pixel positions.
//!
//! The behaviour follows the d3 scales the dashboard was designed around:
//! linear and log scales interpolate a continuous domain, band and point
//! scales lay out discrete categories.

/// Nice tick values covering `[start, stop]`, roughly `count` of them.
///
/// Steps are 1, 2 or 5 times a power of ten.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = (start.min(stop), start.max(stop));
    let raw_step = (hi - lo) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        // Divide by the inverse step to keep decimals like 0.2 exact.
        let inc = 10f64.powf(-power) / factor;
        let first = (lo * inc).ceil() as i64;
        let last = (hi * inc).floor() as i64;
        (first..=last).map(|i| i as f64 / inc).collect()
    } else {
        let step = factor * 10f64.powf(power);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// `(min, max)` of the finite values, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range.
    ///
    /// A collapsed domain (`min == max`) maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 || !(d1 - d0).is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Base-10 logarithmic scale over a strictly positive domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LogScale {
    /// Domain floor: observed minima below this are raised to it.
    pub const FLOOR: f64 = 1.0;

    /// Build from an observed extent, guarding against degenerate domains.
    ///
    /// The lower bound is at least [`Self::FLOOR`] and the upper bound at least
    /// one unit above the lower, so `min == max` still spans a usable interval.
    pub fn from_extent(extent: Option<(f64, f64)>, range: (f64, f64)) -> Self {
        let lo = extent.map(|(lo, _)| lo).unwrap_or(Self::FLOOR).max(Self::FLOOR);
        let hi = extent.map(|(_, hi)| hi).unwrap_or(lo + 1.0).max(lo + 1.0);
        LogScale {
            domain: (lo, hi),
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a value; non-positive inputs are read as the domain's lower bound.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let v = if value > 0.0 { value } else { d0 };
        let span = d1.ln() - d0.ln();
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (v.ln() - d0.ln()) / span * (r1 - r0)
    }

    /// Powers of ten inside the domain, or linear ticks when fewer than two fit.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        let first = (lo.log10() - 1e-9).ceil() as i32;
        let last = (hi.log10() + 1e-9).floor() as i32;
        if last - first + 1 >= 2 {
            let powers: Vec<f64> = (first..=last).map(|p| 10f64.powi(p)).collect();
            if powers.len() <= count.max(2) * 2 {
                return powers;
            }
            let stride = powers.len().div_ceil(count.max(1));
            return powers.into_iter().step_by(stride).collect();
        }
        ticks(lo, hi, count)
    }
}

/// Discrete categories laid out as equal bands, with rounded pixel edges.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` is used for both the inner gaps and the outer edges.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (lo, hi) = (range.0.min(range.1), range.0.max(range.1));
        let step = ((hi - lo) / (n - padding + 2.0 * padding).max(1.0)).floor();
        let start = (lo + (hi - lo - step * (n - padding)) * 0.5).round();
        let bandwidth = (step * (1.0 - padding)).round();
        BandScale {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    /// Left edge of the band for `key`.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Evenly spaced points for `n` categories (a band scale with zero bandwidth).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    start: f64,
    step: f64,
}

impl PointScale {
    pub fn new(n: usize, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = n as f64;
        let step = (r1 - r0) / (n - 1.0 + 2.0 * padding).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - 1.0)) * 0.5;
        PointScale { start, step }
    }

    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_use_nice_steps() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(0.0, 1.0, 4), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(78.0, 100.0, 10), vec![78.0, 80.0, 82.0, 84.0, 86.0, 88.0, 90.0, 92.0, 94.0, 96.0, 98.0, 100.0]);
        assert_eq!(ticks(5.0, 5.0, 4), vec![5.0]);
        assert!(ticks(f64::NAN, 1.0, 4).is_empty());
    }

    #[test]
    fn extent_skips_non_finite() {
        assert_eq!(extent(vec![3.0, f64::NAN, -1.0, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(extent(Vec::<f64>::new()), None);
    }

    #[test]
    fn linear_maps_and_inverts_range() {
        let y = LinearScale::new((0.0, 10.0), (300.0, 50.0));
        assert_eq!(y.map(0.0), 300.0);
        assert_eq!(y.map(10.0), 50.0);
        assert_eq!(y.map(5.0), 175.0);
    }

    #[test]
    fn linear_collapsed_domain_maps_to_midpoint() {
        let y = LinearScale::new((42.0, 42.0), (300.0, 50.0));
        assert_eq!(y.map(42.0), 175.0);
    }

    #[test]
    fn log_domain_never_degenerates() {
        let s = LogScale::from_extent(Some((500.0, 500.0)), (300.0, 50.0));
        let (lo, hi) = s.domain();
        assert_eq!(lo, 500.0);
        assert!(hi >= lo + 1.0);
        let y = s.map(500.0);
        assert!(y.is_finite());
        assert_eq!(y, 300.0);
    }

    #[test]
    fn log_floor_and_non_positive_inputs() {
        let s = LogScale::from_extent(Some((0.0, 1_000.0)), (100.0, 0.0));
        assert_eq!(s.domain(), (1.0, 1_000.0));
        assert!(s.map(0.0).is_finite());
        assert_eq!(s.map(0.0), 100.0);
        assert!((s.map(10.0) - 100.0 * 2.0 / 3.0).abs() < 1e-9);

        let empty = LogScale::from_extent(None, (100.0, 0.0));
        assert_eq!(empty.domain(), (1.0, 2.0));
    }

    #[test]
    fn log_ticks_are_powers_of_ten() {
        let s = LogScale::from_extent(Some((1_000.0, 10_000_000.0)), (100.0, 0.0));
        assert_eq!(s.ticks(4), vec![1e3, 1e4, 1e5, 1e6, 1e7]);
        let narrow = LogScale::from_extent(Some((500.0, 900.0)), (100.0, 0.0));
        assert_eq!(narrow.ticks(4), vec![500.0, 600.0, 700.0, 800.0, 900.0]);
    }

    #[test]
    fn band_scale_rounds_like_range_round() {
        let keys: Vec<String> = (0..10).map(|i| format!("k{}", i)).collect();
        let x = BandScale::new(keys, (60.0, 780.0), 0.1);
        // step = floor(720 / 10.1) = 71, start = round(60 + (720 - 71 * 9.9) / 2) = 69
        assert_eq!(x.position("k0"), Some(69.0));
        assert_eq!(x.position("k1"), Some(140.0));
        assert_eq!(x.bandwidth(), 64.0);
        assert_eq!(x.position("missing"), None);
    }

    #[test]
    fn point_scale_pads_outer_edges() {
        let x = PointScale::new(6, (0.0, 550.0), 0.25);
        // step = 550 / 5.5 = 100, start = (550 - 500) / 2 = 25
        assert_eq!(x.position(0), 25.0);
        assert_eq!(x.position(5), 525.0);
    }
}
