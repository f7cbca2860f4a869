use chrono::{DateTime, NaiveDateTime};

/// `$1234.50`
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Taxation rates come back as plain numbers (`20` means 20 %)
pub fn format_rate(rate: f64) -> String {
    format!("{}%", trim_number(rate))
}

fn trim_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Renders an API timestamp as `YYYY-MM-DD HH:MM`.
/// Accepts RFC 3339 and offset-less ISO timestamps; anything else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn rate_drops_useless_decimals() {
        assert_eq!(format_rate(20.0), "20%");
        assert_eq!(format_rate(5.5), "5.5%");
    }

    #[test]
    fn timestamps_are_normalised() {
        assert_eq!(format_timestamp("2024-03-01T09:15:00Z"), "2024-03-01 09:15");
        assert_eq!(format_timestamp("2024-03-01T09:15:42.1234567"), "2024-03-01 09:15");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
