//! Duration estimates accepted from model output.
//!
//! The grammar is deliberately narrow: `<amount>[ - <amount>] <unit>` where
//! the unit is hours, days or weeks. Anything else is recorded as
//! [`UNSPECIFIED`] rather than guessed at.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Placeholder stored for durations outside the grammar.
pub const UNSPECIFIED: &str = "unspecified";

/// Working hours in one day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Working hours in one week.
pub const HOURS_PER_WEEK: f64 = 40.0;

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^\s*
        (?:~|about\s+|approx\.?\s+|approximately\s+)?
        (?P<low>\d+(?:\.\d+)?)\s*
        (?:(?:-|–|to)\s*(?P<high>\d+(?:\.\d+)?)\s*)?
        (?P<unit>hours?|hrs?|h|days?|d|weeks?|wks?|w)
        \.?\s*$",
    )
    .expect("duration pattern is valid")
});

/// Unit of a duration estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hours,
    Days,
    Weeks,
}

impl DurationUnit {
    fn from_token(token: &str) -> Self {
        match token.to_lowercase().chars().next() {
            Some('h') => DurationUnit::Hours,
            Some('w') => DurationUnit::Weeks,
            _ => DurationUnit::Days,
        }
    }

    /// Working hours represented by one unit.
    pub fn hours(&self) -> f64 {
        match self {
            DurationUnit::Hours => 1.0,
            DurationUnit::Days => HOURS_PER_DAY,
            DurationUnit::Weeks => HOURS_PER_WEEK,
        }
    }

    fn name(&self, plural: bool) -> &'static str {
        match (self, plural) {
            (DurationUnit::Hours, false) => "hour",
            (DurationUnit::Hours, true) => "hours",
            (DurationUnit::Days, false) => "day",
            (DurationUnit::Days, true) => "days",
            (DurationUnit::Weeks, false) => "week",
            (DurationUnit::Weeks, true) => "weeks",
        }
    }
}

/// A parsed duration estimate, either a single amount or a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEstimate {
    pub low: f64,
    pub high: Option<f64>,
    pub unit: DurationUnit,
}

impl DurationEstimate {
    /// Parse text against the duration grammar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwright_core::models::DurationEstimate;
    ///
    /// let estimate = DurationEstimate::parse("3-5 Days").unwrap();
    /// assert_eq!(estimate.to_string(), "3-5 days");
    /// assert!(DurationEstimate::parse("a while").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let caps = DURATION_RE.captures(text)?;
        let low: f64 = caps.name("low")?.as_str().parse().ok()?;
        let high: Option<f64> = match caps.name("high") {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        let unit = DurationUnit::from_token(caps.name("unit")?.as_str());

        let (low, high) = match high {
            Some(high) if high < low => (high, Some(low)),
            Some(high) if high == low => (low, None),
            other => (low, other),
        };

        Some(Self { low, high, unit })
    }

    /// Working hours for this estimate; ranges count their upper bound.
    pub fn hours(&self) -> f64 {
        self.high.unwrap_or(self.low) * self.unit.hours()
    }
}

impl fmt::Display for DurationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) => write!(f, "{}-{} {}", self.low, high, self.unit.name(true)),
            None => write!(f, "{} {}", self.low, self.unit.name(self.low != 1.0)),
        }
    }
}

/// Normalize free-form duration text, or return [`UNSPECIFIED`].
pub fn normalize_duration(text: &str) -> String {
    DurationEstimate::parse(text)
        .map(|estimate| estimate.to_string())
        .unwrap_or_else(|| UNSPECIFIED.to_string())
}

/// Sum a set of duration strings into a human-readable total.
///
/// Unparsable entries are ignored. Totals under a day are reported in hours,
/// under a week in days, and in weeks otherwise (whole units, rounded down
/// like a calendar estimate). Returns [`UNSPECIFIED`] when nothing parses.
pub fn total_duration<'a>(durations: impl IntoIterator<Item = &'a str>) -> String {
    let estimates: Vec<DurationEstimate> = durations
        .into_iter()
        .filter_map(DurationEstimate::parse)
        .collect();

    if estimates.is_empty() {
        return UNSPECIFIED.to_string();
    }

    let hours = estimates.iter().map(DurationEstimate::hours).sum::<f64>().ceil() as u64;

    let (amount, unit) = if (hours as f64) < HOURS_PER_DAY {
        (hours, DurationUnit::Hours)
    } else if (hours as f64) < HOURS_PER_WEEK {
        (hours / HOURS_PER_DAY as u64, DurationUnit::Days)
    } else {
        (hours / HOURS_PER_WEEK as u64, DurationUnit::Weeks)
    };

    format!("{amount} {}", unit.name(amount != 1))
}
