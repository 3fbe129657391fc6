use chrono::NaiveDate;

use crate::stmt::Value;

/// Remote date format.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses exactly `YYYY-MM-DD`: four-digit year, zero-padded month and day,
/// nothing around it.
pub(crate) fn parse_date(src: &str) -> Option<NaiveDate> {
    let shaped = src.len() == 10
        && src.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return None;
    }

    NaiveDate::parse_from_str(src, DATE_FORMAT).ok()
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}
