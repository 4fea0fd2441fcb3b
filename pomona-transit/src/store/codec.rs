use super::store_error::StoreError;
use chrono::{NaiveDate, NaiveTime};

/// conversions between the operator-facing `YYYY-MM-DD` / `HH:MM` strings
/// and chrono values. dates and times are persisted in these formats, which
/// sort lexically in calendar order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(value: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        StoreError::InputError(format!("expected YYYY-MM-DD date, found '{value}': {e}"))
    })
}

pub fn parse_time(value: &str) -> Result<NaiveTime, StoreError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|e| {
        StoreError::InputError(format!("expected HH:MM time, found '{value}': {e}"))
    })
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// reads a TEXT column as a [NaiveDate] within a `query_map` closure. a
/// malformed stored value surfaces as a conversion failure on the row.
pub fn read_date(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// reads a TEXT column as a [NaiveTime] within a `query_map` closure.
pub fn read_time(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveTime> {
    let raw: String = row.get(idx)?;
    NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-11-24").unwrap();
        assert_eq!(format_date(&date), "2024-11-24");
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(matches!(
            parse_date("11/24/2024"),
            Err(StoreError::InputError(_))
        ));
        assert!(matches!(parse_date(""), Err(StoreError::InputError(_))));
    }

    #[test]
    fn test_parse_time_valid() {
        let time = parse_time("08:05").unwrap();
        assert_eq!(format_time(&time), "08:05");
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        assert!(matches!(parse_time("8 am"), Err(StoreError::InputError(_))));
        assert!(matches!(parse_time("25:00"), Err(StoreError::InputError(_))));
    }
}
