//! Color schemes.

/// ColorBrewer "Blues", light to dark.
const BLUES: [(u8, u8, u8); 9] = [
    (0xf7, 0xfb, 0xff),
    (0xde, 0xeb, 0xf7),
    (0xc6, 0xdb, 0xef),
    (0x9e, 0xca, 0xe1),
    (0x6b, 0xae, 0xd6),
    (0x42, 0x92, 0xc6),
    (0x21, 0x71, 0xb5),
    (0x08, 0x51, 0x9c),
    (0x08, 0x30, 0x6b),
];

/// Tableau 10 categorical palette.
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

fn hex(rgb: (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

/// Sample the Blues ramp at `t` in [0, 1] (clamped).
pub fn blues(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (BLUES.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(BLUES.len() - 2);
    let f = scaled - i as f64;
    let (a, b) = (BLUES[i], BLUES[i + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    hex((mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2)))
}

/// Fill for an explicit-content rate in [0, 1]. Never lighter than 30% along the ramp.
pub fn explicit_rate(rate: f64) -> String {
    blues(0.3 + 0.7 * rate)
}

/// Categorical color for the `index`-th series.
pub fn categorical(index: usize) -> &'static str {
    TABLEAU10[index % TABLEAU10.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blues_endpoints() {
        assert_eq!(blues(0.0), "#f7fbff");
        assert_eq!(blues(1.0), "#08306b");
        assert_eq!(blues(2.0), "#08306b");
        assert_eq!(blues(f64::NAN), "#f7fbff");
    }

    #[test]
    fn explicit_rate_darkens_with_rate() {
        assert_ne!(explicit_rate(0.0), explicit_rate(1.0));
        assert_eq!(explicit_rate(1.0), "#08306b");
    }

    #[test]
    fn categorical_wraps() {
        assert_eq!(categorical(0), "#4e79a7");
        assert_eq!(categorical(10), "#4e79a7");
    }
}
