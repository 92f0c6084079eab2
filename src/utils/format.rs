use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Date layout used by the backends and by `<input type="date">`.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// fr-FR short date, e.g. `31/01/2025`, or `-` when the record has none.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Amount with two decimals and a trailing euro sign, e.g. `1050.00 €`.
pub fn format_currency(amount: f64) -> String {
    format!("{amount:.2} €")
}

pub fn today() -> String {
    Local::now().date_naive().format(ISO_DATE).to_string()
}

/// Parses `2025-01-31` as well as timestamps such as `2025-01-31T00:00:00Z`,
/// keeping only the calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, ISO_DATE).ok()
}

/// A null or unreadable date becomes `None` so one bad row does not fail the
/// whole list.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_two_decimals() {
        assert_eq!(format_currency(1050.0), "1050.00 €");
        assert_eq!(format_currency(12.345), "12.35 €");
        assert_eq!(format_currency(0.0), "0.00 €");
    }

    #[test]
    fn test_format_date_fr() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31);
        assert_eq!(format_date(date), "31/01/2025");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_parse_date_accepts_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 5);
        assert_eq!(parse_date("2024-06-05"), expected);
        assert_eq!(parse_date("2024-06-05T10:00:00Z"), expected);
        assert_eq!(parse_date("05/06/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_today_is_iso() {
        assert!(parse_date(&today()).is_some());
    }
}
