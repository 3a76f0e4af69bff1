//! Week Navigation
//!
//! Sunday-start week around a reference date, for the log page header and
//! its previous/next links.

use chrono::{Datelike, Duration, NaiveDate};

const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

#[derive(Debug, Clone, PartialEq)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub day_num: u32,
    pub weekday: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekNav {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<WeekDay>,
    pub prev: NaiveDate,
    pub next: NaiveDate,
}

/// `?date=` value when it parses as `YYYY-MM-DD`, else `today`
pub fn reference_date(param: Option<&str>, today: NaiveDate) -> NaiveDate {
    param
        .and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
        .unwrap_or(today)
}

impl WeekNav {
    /// Week holding `date`; `None` when the week or its neighbours fall
    /// outside the representable date range
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let offset = |from: NaiveDate, days: i64| from.checked_add_signed(Duration::days(days));
        let start = offset(date, -i64::from(date.weekday().num_days_from_sunday()))?;
        let days = (0..7)
            .map(|i| {
                let day = offset(start, i)?;
                Some(WeekDay {
                    date: day,
                    day_num: day.day(),
                    weekday: WEEKDAY_LABELS[day.weekday().num_days_from_sunday() as usize],
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            start,
            end: offset(start, 6)?,
            days,
            prev: offset(start, -7)?,
            next: offset(start, 7)?,
        })
    }

    /// Week for the `?date=` value, falling back to the week of `today`
    pub fn for_param(param: Option<&str>, today: NaiveDate) -> Option<Self> {
        Self::containing(reference_date(param, today)).or_else(|| {
            tracing::warn!(?param, "date out of range, showing the current week");
            Self::containing(today)
        })
    }

    /// e.g. `6月1日 〜 6月7日`
    pub fn range_label(&self) -> String {
        format!(
            "{}月{}日 〜 {}月{}日",
            self.start.month(),
            self.start.day(),
            self.end.month(),
            self.end.day()
        )
    }

    pub fn prev_href(&self) -> String {
        format!("?date={}", self.prev.format("%Y-%m-%d"))
    }

    pub fn next_href(&self) -> String {
        format!("?date={}", self.next.format("%Y-%m-%d"))
    }
}
