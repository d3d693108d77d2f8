// Period domain model - UI-level time range selectors and their date math
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};

/// Raised when a period spelling is not part of an operation's valid set.
/// Parsing happens before any network call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid period: {0}")]
pub struct InvalidPeriod(pub String);

/// Concrete date window sent to the backend. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Bucket size the backend uses when pre-aggregating raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationInterval {
    Day,
    Week,
    Month,
}

impl AggregationInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationInterval::Day => "day",
            AggregationInterval::Week => "week",
            AggregationInterval::Month => "month",
        }
    }
}

/// Aggregation function applied per interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationOp {
    Avg,
    Min,
    Max,
    Sum,
}

impl AggregationOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationOp::Avg => "avg",
            AggregationOp::Min => "min",
            AggregationOp::Max => "max",
            AggregationOp::Sum => "sum",
        }
    }
}

/// Period selector for KPI value history charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPeriod {
    Week,
    Month,
    Year,
}

impl HistoryPeriod {
    /// Rolling window ending at `today`. Month and year arithmetic is
    /// calendar-aware, with the day clamped at month ends.
    pub fn date_range(self, today: NaiveDate) -> DateRange {
        let start = match self {
            HistoryPeriod::Week => today - Days::new(7),
            HistoryPeriod::Month => today - Months::new(1),
            HistoryPeriod::Year => today - Months::new(12),
        };
        DateRange { start, end: today }
    }
}

impl FromStr for HistoryPeriod {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Week" => Ok(HistoryPeriod::Week),
            "Month" => Ok(HistoryPeriod::Month),
            "Year" => Ok(HistoryPeriod::Year),
            other => Err(InvalidPeriod(other.to_string())),
        }
    }
}

/// Period selector for single aggregated KPI readings. The window covers
/// exactly one aggregation interval, so the backend returns one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationPeriod {
    Day,
    Week,
    Month,
}

impl AggregationPeriod {
    pub fn date_range(self, today: NaiveDate) -> DateRange {
        let start = match self {
            AggregationPeriod::Day => today - Days::new(1),
            AggregationPeriod::Week => today - Days::new(7),
            AggregationPeriod::Month => today - Months::new(1),
        };
        DateRange { start, end: today }
    }

    pub fn interval(self) -> AggregationInterval {
        match self {
            AggregationPeriod::Day => AggregationInterval::Day,
            AggregationPeriod::Week => AggregationInterval::Week,
            AggregationPeriod::Month => AggregationInterval::Month,
        }
    }
}

impl FromStr for AggregationPeriod {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(AggregationPeriod::Day),
            "Week" => Ok(AggregationPeriod::Week),
            "Month" => Ok(AggregationPeriod::Month),
            other => Err(InvalidPeriod(other.to_string())),
        }
    }
}

/// Period selector for the alerts view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPeriod {
    Today,
    Week,
    Month,
}

impl AlertPeriod {
    pub fn date_range(self, today: NaiveDate) -> DateRange {
        let start = match self {
            AlertPeriod::Today => today,
            AlertPeriod::Week => today - Days::new(7),
            AlertPeriod::Month => today - Months::new(1),
        };
        DateRange { start, end: today }
    }
}

impl FromStr for AlertPeriod {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Today" => Ok(AlertPeriod::Today),
            "Week" => Ok(AlertPeriod::Week),
            "Month" => Ok(AlertPeriod::Month),
            other => Err(InvalidPeriod(other.to_string())),
        }
    }
}
