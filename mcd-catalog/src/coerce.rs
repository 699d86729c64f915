//! Field coercions applied to every CSV cell.
//!
//! These mirror loose, script-style conversion: nothing here fails. A numeric
//! cell that cannot be read becomes `NaN`, and a date without a leading year
//! becomes `None`.

/// Trim a text cell. A missing cell reads as the empty string.
pub fn text(raw: Option<&str>) -> String {
    raw.unwrap_or("").trim().to_string()
}

/// Coerce a cell to a number.
///
/// Blank cells coerce to `0.0`; anything unparsable (or a missing cell)
/// coerces to `NaN` so the consuming pipeline can reject the row.
pub fn number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Case-insensitive match against the literal `true`.
pub fn flag(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Extract a year from the first four characters of a date string.
///
/// `"2019-05-31"` and `"2019"` both yield `Some(2019)`; `"May 2019"` yields `None`.
pub fn year(raw: Option<&str>) -> Option<i32> {
    let s = raw?.trim();
    let head = s.get(..4)?;
    if !head.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    head.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_coercion() {
        assert_eq!(number(Some("42")), 42.0);
        assert_eq!(number(Some(" 3.25 ")), 3.25);
        assert_eq!(number(Some("")), 0.0);
        assert!(number(Some("not-a-number")).is_nan());
        assert!(number(None).is_nan());
    }

    #[test]
    fn flag_is_case_insensitive() {
        assert!(flag(Some("TRUE")));
        assert!(flag(Some(" True ")));
        assert!(!flag(Some("false")));
        assert!(!flag(Some("yes")));
        assert!(!flag(None));
    }

    #[test]
    fn year_takes_leading_digits() {
        assert_eq!(year(Some("2019-05-31")), Some(2019));
        assert_eq!(year(Some("2021")), Some(2021));
        assert_eq!(year(Some("May 2019")), None);
        assert_eq!(year(Some("201")), None);
        assert_eq!(year(Some("")), None);
        assert_eq!(year(None), None);
    }

    #[test]
    fn text_trims() {
        assert_eq!(text(Some("  Drake ")), "Drake");
        assert_eq!(text(None), "");
    }
}
