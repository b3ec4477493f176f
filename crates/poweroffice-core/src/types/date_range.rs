//! Date range query parameters.

use chrono::NaiveDateTime;

use crate::error::Error;

/// Format PowerOffice expects for date/time query parameters.
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_query_datetime(value: &NaiveDateTime) -> String {
    value.format(QUERY_DATETIME_FORMAT).to_string()
}

/// An inclusive `fromDate`/`toDate` window for list endpoints.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use poweroffice_core::DateRange;
///
/// let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let range = DateRange::new(from, to).unwrap();
///
/// assert_eq!(range.to_query(), vec![
///     ("fromDate".to_string(), "2024-01-01 00:00:00".to_string()),
///     ("toDate".to_string(), "2024-01-31 00:00:00".to_string()),
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl DateRange {
    /// Create a range; `from` must not be after `to`.
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, Error> {
        if from > to {
            return Err(Error::invalid_input(format!(
                "date range starts after it ends: {} > {}",
                format_query_datetime(&from),
                format_query_datetime(&to)
            )));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    /// The query pairs for this range.
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("fromDate".to_string(), format_query_datetime(&self.from)),
            ("toDate".to_string(), format_query_datetime(&self.to)),
        ]
    }
}
