//! Integer Coercion
//!
//! Every numeric read in the checklist goes through `to_int`, which never fails.

/// Coerce arbitrary text into an integer percentage.
///
/// Everything that is not an ASCII digit or `-` is dropped first, so
/// `"+15%"` reads as 15 and `"-5 %"` as -5. The remainder is read like a
/// base-10 `parseInt`: an optional leading `-` and the longest digit prefix.
/// Anything without digits is 0. Out-of-range values saturate.
pub fn to_int(text: &str) -> i64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    let (negative, digits) = match kept.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, kept.as_str()),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        let d = i64::from(d);
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    if seen_digit { value } else { 0 }
}

/// `+N%` for non-negative values, `N%` otherwise (row labels)
pub fn format_signed_percent(n: i64) -> String {
    if n >= 0 {
        format!("+{}%", n)
    } else {
        format!("{}%", n)
    }
}

/// `N%` (section totals and the overall figure)
pub fn format_percent(n: i64) -> String {
    format!("{}%", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_decorated_numbers() {
        assert_eq!(to_int("10"), 10);
        assert_eq!(to_int("+15%"), 15);
        assert_eq!(to_int("-5%"), -5);
        assert_eq!(to_int("  7 % "), 7);
        assert_eq!(to_int("1,000"), 1000);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        for s in ["", "abc", "%", "+", "-", "--", "n/a", "  "] {
            assert_eq!(to_int(s), 0, "input {:?}", s);
        }
    }

    #[test]
    fn test_parse_stops_at_inner_minus() {
        // "5-3" keeps both characters but only the leading run is a number
        assert_eq!(to_int("5-3"), 5);
        assert_eq!(to_int("--5"), 0);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        assert_eq!(to_int("99999999999999999999999"), i64::MAX);
        assert_eq!(to_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_signed_percent(0), "+0%");
        assert_eq!(format_signed_percent(12), "+12%");
        assert_eq!(format_signed_percent(-4), "-4%");
        assert_eq!(format_percent(-4), "-4%");
        assert_eq!(format_percent(30), "30%");
    }

    #[test]
    fn test_formatted_label_reads_back() {
        for n in [-250, -1, 0, 1, 10, 99, 100, 12345] {
            assert_eq!(to_int(&format_signed_percent(n)), n);
            assert_eq!(to_int(&format_percent(n)), n);
        }
    }
}
