use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ParseError;
use crate::models::todo::{Priority, parse_date};

/// Separator the range date-picker puts between start and end.
const RANGE_SEPARATOR: &str = " to ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "completed" | "yes" => Ok(StatusFilter::Completed),
            "pending" | "no" => Ok(StatusFilter::Pending),
            _ => Err(ParseError::InvalidStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl FromStr for PriorityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(PriorityFilter::All),
            t if t.eq_ignore_ascii_case("all") => Ok(PriorityFilter::All),
            t => t.parse().map(PriorityFilter::Only),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "" => CategoryFilter::All,
            t if t.eq_ignore_ascii_case("all") => CategoryFilter::All,
            t => CategoryFilter::Only(t.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueDateFilter {
    /// Same calendar day.
    On(NaiveDate),
    /// Inclusive on both ends; `end` covers its whole day.
    Between(NaiveDate, NaiveDate),
    /// Input that could not be read as a date; matches nothing.
    Unparsable(String),
}

impl DueDateFilter {
    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD to YYYY-MM-DD`. Empty input means no filter.
    pub fn parse(raw: &str) -> Result<Option<Self>, ParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = raw.split(RANGE_SEPARATOR).collect();
        match parts.as_slice() {
            [single] => Ok(Some(DueDateFilter::On(parse_date(single)?))),
            [start, end] => Ok(Some(DueDateFilter::Between(
                parse_date(start)?,
                parse_date(end)?,
            ))),
            _ => Err(ParseError::InvalidDate(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: String,
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub category: CategoryFilter,
    pub due: Option<DueDateFilter>,
    pub overdue_only: bool,
}

/// Filter selections exactly as read from the UI controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub due: Option<String>,
    #[serde(default)]
    pub overdue: bool,
}

impl FilterCriteria {
    /// Builds criteria from UI strings.
    ///
    /// Never fails: a malformed due-date selection becomes
    /// [`DueDateFilter::Unparsable`] so the date predicate matches nothing,
    /// and unknown status/priority values fall back to `All`. Both cases are
    /// logged.
    pub fn from_raw(raw: &RawFilter) -> Self {
        let status = raw
            .status
            .as_deref()
            .map(|s| {
                s.parse::<StatusFilter>().unwrap_or_else(|e| {
                    info!("ignoring status filter: {}", e);
                    StatusFilter::All
                })
            })
            .unwrap_or_default();

        let priority = raw
            .priority
            .as_deref()
            .map(|p| {
                p.parse::<PriorityFilter>().unwrap_or_else(|e| {
                    info!("ignoring priority filter: {}", e);
                    PriorityFilter::All
                })
            })
            .unwrap_or_default();

        let due = raw.due.as_deref().and_then(|d| match DueDateFilter::parse(d) {
            Ok(filter) => filter,
            Err(e) => {
                info!("error parsing due date filter: {}", e);
                Some(DueDateFilter::Unparsable(d.to_string()))
            }
        });

        Self {
            search_text: raw.search.clone().unwrap_or_default(),
            status,
            priority,
            category: raw
                .category
                .as_deref()
                .map(CategoryFilter::from_raw)
                .unwrap_or_default(),
            due,
            overdue_only: raw.overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_filter_parse() {
        assert_eq!(DueDateFilter::parse("  "), Ok(None));
        assert_eq!(
            DueDateFilter::parse("2023-12-05"),
            Ok(Some(DueDateFilter::On(date(2023, 12, 5))))
        );
        assert_eq!(
            DueDateFilter::parse("2023-12-01 to 2023-12-10"),
            Ok(Some(DueDateFilter::Between(date(2023, 12, 1), date(2023, 12, 10))))
        );
        assert!(DueDateFilter::parse("2023-12-01 to").is_err());
        assert!(DueDateFilter::parse("a to b to c").is_err());
    }

    #[test]
    fn test_from_raw_keeps_malformed_date_as_unparsable() {
        let raw = RawFilter {
            due: Some("next tuesday".to_string()),
            ..Default::default()
        };
        let criteria = FilterCriteria::from_raw(&raw);
        assert_eq!(
            criteria.due,
            Some(DueDateFilter::Unparsable("next tuesday".to_string()))
        );
    }

    #[test]
    fn test_from_raw_reads_ui_values() {
        let raw = RawFilter {
            search: Some("Call".to_string()),
            status: Some("No".to_string()),
            priority: Some("all".to_string()),
            category: Some("Personal".to_string()),
            due: Some(String::new()),
            overdue: true,
        };
        let criteria = FilterCriteria::from_raw(&raw);

        assert_eq!(criteria.search_text, "Call");
        assert_eq!(criteria.status, StatusFilter::Pending);
        assert_eq!(criteria.priority, PriorityFilter::All);
        assert_eq!(criteria.category, CategoryFilter::Only("Personal".to_string()));
        assert_eq!(criteria.due, None);
        assert!(criteria.overdue_only);
    }

    #[test]
    fn test_empty_raw_filter_is_cleared_filter() {
        assert_eq!(
            FilterCriteria::from_raw(&RawFilter::default()),
            FilterCriteria::default()
        );
    }
}
