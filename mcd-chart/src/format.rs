//! Tick label formatting.

/// Which formatter an axis uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// Shortest decimal, at most two fraction digits.
    Plain,
    /// Whole numbers only.
    Integer,
    /// SI prefix with trailing zeros trimmed: `1.5M`, `500k`.
    Si,
    /// Whole percent: `0.25` -> `25%`.
    Percent,
}

impl TickFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            TickFormat::Plain => plain(value),
            TickFormat::Integer => format!("{}", value.round() as i64),
            TickFormat::Si => si(value),
            TickFormat::Percent => format!("{}%", (value * 100.0).round() as i64),
        }
    }
}

/// Format with up to two decimals, dropping trailing zeros.
pub fn plain(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }
    let s = format!("{:.2}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format with an SI prefix.
pub fn si(value: f64) -> String {
    const PREFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];
    let magnitude = value.abs();
    for (scale, suffix) in PREFIXES {
        if magnitude >= scale {
            return format!("{}{}", plain(value / scale), suffix);
        }
    }
    plain(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_trims_zeros() {
        assert_eq!(plain(10.0), "10");
        assert_eq!(plain(0.2), "0.2");
        assert_eq!(plain(3.456), "3.46");
        assert_eq!(plain(-1.5), "-1.5");
    }

    #[test]
    fn si_prefixes() {
        assert_eq!(si(500.0), "500");
        assert_eq!(si(1_000.0), "1k");
        assert_eq!(si(1_500_000.0), "1.5M");
        assert_eq!(si(100_000_000.0), "100M");
        assert_eq!(si(2e9), "2G");
    }

    #[test]
    fn percent_and_integer() {
        assert_eq!(TickFormat::Percent.apply(0.25), "25%");
        assert_eq!(TickFormat::Percent.apply(1.0), "100%");
        assert_eq!(TickFormat::Integer.apply(2015.0), "2015");
    }
}
