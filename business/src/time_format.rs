//! Timestamp cells: a relative duration with the exact instant as a tooltip.
//!
//! The wording follows the usual English "distance in words" scale:
//! seconds collapse to "less than a minute", then minutes, hours, days,
//! months and finally quarter-year buckets of years.

use std::fmt;

use chrono::{DateTime, Datelike, Months, SecondsFormat, Utc};

use crate::Error;

/// Text rendered for an unset timestamp.
pub const NEVER: &str = "never";

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Which way the column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// "5 minutes ago" (or "in 5 minutes" if the instant is still ahead).
    Past,
    /// "5 minutes", without any suffix.
    Future,
}

/// What a timestamp cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeDisplay {
    Never,
    At {
        relative: String,
        /// ISO-8601 UTC, e.g. `2023-11-14T22:13:20Z`.
        absolute: String,
    },
}

impl TimeDisplay {
    pub fn text(&self) -> &str {
        match self {
            Self::Never => NEVER,
            Self::At { relative, .. } => relative,
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Self::Never => None,
            Self::At { absolute, .. } => Some(absolute),
        }
    }
}

/// Formats an optional epoch-seconds timestamp relative to `now`.
///
/// Zero counts as unset, same as `None`.
pub fn format_timestamp(
    timestamp: Option<i64>,
    direction: Direction,
    now: DateTime<Utc>,
) -> Result<TimeDisplay, Error> {
    let Some(seconds) = timestamp.filter(|&seconds| seconds != 0) else {
        return Ok(TimeDisplay::Never);
    };
    let at = timestamp_to_datetime(seconds)?;

    Ok(TimeDisplay::At {
        relative: format_distance(at, now, direction == Direction::Past),
        absolute: iso_utc(at),
    })
}

pub fn timestamp_to_datetime(seconds: i64) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(seconds, 0).ok_or(Error::TimestampOutOfRange(seconds))
}

/// ISO-8601 in UTC with an all-zero fraction dropped.
pub fn iso_utc(at: DateTime<Utc>) -> String {
    strip_zero_fraction(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn strip_zero_fraction(iso: &str) -> String {
    if let Some(body) = iso.strip_suffix('Z')
        && let Some((whole, fraction)) = body.rsplit_once('.')
        && !fraction.is_empty()
        && fraction.bytes().all(|digit| digit == b'0')
    {
        return format!("{whole}Z");
    }
    iso.to_owned()
}

/// Bucketed distance between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    LessThanAMinute,
    XMinutes(i64),
    AboutXHours(i64),
    XDays(i64),
    AboutXMonths(i64),
    XMonths(i64),
    AboutXYears(i64),
    OverXYears(i64),
    AlmostXYears(i64),
}

impl Distance {
    pub fn between(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let seconds = (later - earlier).num_seconds();
        let minutes = div_round(seconds, 60);

        if minutes < 1 {
            return Self::LessThanAMinute;
        }
        if minutes < 45 {
            return Self::XMinutes(minutes);
        }
        if minutes < 90 {
            return Self::AboutXHours(1);
        }
        if minutes < MINUTES_IN_DAY {
            return Self::AboutXHours(div_round(minutes, MINUTES_IN_HOUR));
        }
        if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            return Self::XDays(1);
        }
        if minutes < MINUTES_IN_MONTH {
            return Self::XDays(div_round(minutes, MINUTES_IN_DAY));
        }
        if minutes < MINUTES_IN_TWO_MONTHS {
            return Self::AboutXMonths(div_round(minutes, MINUTES_IN_MONTH));
        }

        let months = calendar_months_between(earlier, later);
        if months < 12 {
            return Self::XMonths(div_round(minutes, MINUTES_IN_MONTH).max(1));
        }

        let years = months / 12;
        match months % 12 {
            0..3 => Self::AboutXYears(years),
            3..9 => Self::OverXYears(years),
            _ => Self::AlmostXYears(years + 1),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LessThanAMinute => f.write_str("less than a minute"),
            Self::XMinutes(n) => counted(f, "", n, "minute"),
            Self::AboutXHours(n) => counted(f, "about ", n, "hour"),
            Self::XDays(n) => counted(f, "", n, "day"),
            Self::AboutXMonths(n) => counted(f, "about ", n, "month"),
            Self::XMonths(n) => counted(f, "", n, "month"),
            Self::AboutXYears(n) => counted(f, "about ", n, "year"),
            Self::OverXYears(n) => counted(f, "over ", n, "year"),
            Self::AlmostXYears(n) => counted(f, "almost ", n, "year"),
        }
    }
}

fn counted(f: &mut fmt::Formatter<'_>, prefix: &str, n: i64, unit: &str) -> fmt::Result {
    if n == 1 {
        write!(f, "{prefix}1 {unit}")
    } else {
        write!(f, "{prefix}{n} {unit}s")
    }
}

/// Distance between `at` and `now` in words.
///
/// With `add_suffix`, an instant behind `now` reads "… ago" and one ahead of
/// it reads "in …". Without it there is no suffix either way.
pub fn format_distance(at: DateTime<Utc>, now: DateTime<Utc>, add_suffix: bool) -> String {
    let distance = Distance::between(at, now);
    match (add_suffix, at > now) {
        (false, _) => distance.to_string(),
        (true, true) => format!("in {distance}"),
        (true, false) => format!("{distance} ago"),
    }
}

/// Whole calendar months from `earlier` to `later`; a partial last month
/// does not count.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month())
        - i64::from(earlier.month());

    let overshoots = u32::try_from(months)
        .ok()
        .and_then(|n| earlier.checked_add_months(Months::new(n)))
        .is_some_and(|shifted| shifted > later);
    if months > 0 && overshoots {
        months -= 1;
    }
    months
}

/// Rounds `n / d` half up, for non-negative `n`.
fn div_round(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}
