//! Duration and date humanization.
//!
//! [`Delta`] is the input type: a normalized day/second/microsecond
//! span, convertible from [`std::time::Duration`] and
//! [`chrono::TimeDelta`]. A positive delta means time elapsed since an
//! event; a negative delta means the event lies in the future.
//!
//! [`natural_delta`] picks one approximate unit ("3 minutes"),
//! [`relative_time`] wraps it in an ago/from-now phrase, and
//! [`precise_delta`] renders an exact multi-component breakdown.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use humane_i18n::{Locale, PluralMsg, current};

use crate::msg;
use crate::number::{FormatError, ensure_finite, grouped_with, round_to};

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * 1_000_000;

/// A time span, normalized so that `0 <= secs < 86_400` and
/// `0 <= micros < 1_000_000`; the sign lives in `days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delta {
    days: i64,
    secs: i64,
    micros: i64,
}

impl Delta {
    /// Build a delta from components; they are summed and renormalized,
    /// so any of them may be negative or out of range.
    #[must_use]
    pub fn new(days: i64, secs: i64, micros: i64) -> Self {
        Self::from_total_micros(
            i128::from(days) * MICROS_PER_DAY
                + i128::from(secs) * i128::from(MICROS_PER_SECOND)
                + i128::from(micros),
        )
    }

    #[must_use]
    pub fn from_secs(secs: i64) -> Self {
        Self::new(0, secs, 0)
    }

    /// Build a delta from fractional seconds, rejecting non-finite
    /// input.
    pub fn try_from_secs_f64(secs: f64) -> Result<Self, FormatError> {
        ensure_finite(secs)?;
        Ok(Self::from_total_micros((secs * 1e6).round() as i128))
    }

    fn from_total_micros(total: i128) -> Self {
        let days = total.div_euclid(MICROS_PER_DAY);
        let rest = total.rem_euclid(MICROS_PER_DAY);
        Self {
            days: days as i64,
            secs: (rest / i128::from(MICROS_PER_SECOND)) as i64,
            micros: (rest % i128::from(MICROS_PER_SECOND)) as i64,
        }
    }

    fn total_micros(self) -> i128 {
        i128::from(self.days) * MICROS_PER_DAY
            + i128::from(self.secs) * i128::from(MICROS_PER_SECOND)
            + i128::from(self.micros)
    }

    /// Whole days (the sign carrier).
    #[must_use]
    pub fn days(self) -> i64 {
        self.days
    }

    /// Seconds within the day, `0..86_400`.
    #[must_use]
    pub fn secs(self) -> i64 {
        self.secs
    }

    /// Microseconds within the second, `0..1_000_000`.
    #[must_use]
    pub fn micros(self) -> i64 {
        self.micros
    }

    #[must_use]
    pub fn total_seconds(self) -> f64 {
        self.total_micros() as f64 / 1e6
    }

    /// Whether the span points into the future.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.days < 0
    }

    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            Self::from_total_micros(-self.total_micros())
        } else {
            self
        }
    }
}

impl From<std::time::Duration> for Delta {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_total_micros(duration.as_micros() as i128)
    }
}

impl From<chrono::TimeDelta> for Delta {
    fn from(delta: chrono::TimeDelta) -> Self {
        Self::from_total_micros(
            i128::from(delta.num_seconds()) * i128::from(MICROS_PER_SECOND)
                + i128::from(delta.subsec_nanos() / 1000),
        )
    }
}

/// Time units, ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl Unit {
    pub const ALL: [Unit; 8] = [
        Unit::Microseconds,
        Unit::Milliseconds,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Months,
        Unit::Years,
    ];
}

/// Options for [`natural_delta`] and [`relative_time`].
#[derive(Debug, Clone)]
pub struct RelativeOptions {
    /// Approximate multi-day spans in months. When off, "2 months"
    /// renders as "61 days".
    pub months: bool,
    /// Finest unit to report; only `Seconds`, `Milliseconds`, and
    /// `Microseconds` are meaningful, coarser values clamp to seconds.
    pub minimum_unit: Unit,
}

impl Default for RelativeOptions {
    fn default() -> Self {
        Self {
            months: true,
            minimum_unit: Unit::Seconds,
        }
    }
}

fn counted(locale: &Locale, message: PluralMsg, count: i64) -> String {
    locale
        .counted(message, count)
        .replace("%d", &count.to_string())
}

/// One approximate unit for a span: "a moment", "30 seconds",
/// "2 hours", "1 year, 2 months". The sign is ignored.
#[must_use]
pub fn natural_delta(delta: Delta) -> String {
    natural_delta_with(&current(), delta, &RelativeOptions::default())
}

/// [`natural_delta`] with an explicit locale and options.
#[must_use]
pub fn natural_delta_with(locale: &Locale, delta: Delta, options: &RelativeOptions) -> String {
    let minimum_unit = options.minimum_unit.min(Unit::Seconds);
    let delta = delta.abs();
    let seconds = delta.secs();
    let years = delta.days() / 365;
    let days = delta.days() % 365;
    let months = (days as f64 / 30.5).round() as i64;

    if delta.days() == 0 {
        if seconds == 0 {
            let micros = delta.micros();
            if minimum_unit == Unit::Microseconds && micros < 1000 {
                return counted(locale, msg::MICROSECONDS, micros);
            }
            if minimum_unit == Unit::Milliseconds
                || (minimum_unit == Unit::Microseconds && micros >= 1000)
            {
                return counted(locale, msg::MILLISECONDS, micros / 1000);
            }
            locale.text(msg::A_MOMENT)
        } else if seconds == 1 {
            locale.text(msg::A_SECOND)
        } else if seconds < 60 {
            counted(locale, msg::SECONDS, seconds)
        } else if seconds < 3600 {
            // Rounded, so the top of the band promotes to the next unit.
            let minutes = (seconds as f64 / 60.0).round() as i64;
            if minutes == 1 {
                locale.text(msg::A_MINUTE)
            } else if minutes == 60 {
                locale.text(msg::AN_HOUR)
            } else {
                counted(locale, msg::MINUTES, minutes)
            }
        } else {
            let hours = (seconds as f64 / 3600.0).round() as i64;
            if hours == 1 {
                locale.text(msg::AN_HOUR)
            } else if hours == 24 {
                locale.text(msg::A_DAY)
            } else {
                counted(locale, msg::HOURS, hours)
            }
        }
    } else if years == 0 {
        if days == 1 {
            locale.text(msg::A_DAY)
        } else if !options.months || months == 0 {
            counted(locale, msg::DAYS, days)
        } else if months == 1 {
            locale.text(msg::A_MONTH)
        } else {
            counted(locale, msg::MONTHS, months)
        }
    } else if years == 1 {
        if months == 0 && days == 0 {
            locale.text(msg::A_YEAR)
        } else if months == 0 || !options.months {
            counted(locale, msg::YEAR_AND_DAYS, days)
        } else if months == 1 {
            locale.text(msg::YEAR_AND_MONTH)
        } else {
            counted(locale, msg::YEAR_AND_MONTHS, months)
        }
    } else {
        locale
            .counted(msg::YEARS, years)
            .replace("%d", &grouped_with(locale, years))
    }
}

/// Relative phrase for a span: "3 minutes ago", "a day from now",
/// "now". Positive deltas are the past, negative the future.
#[must_use]
pub fn relative_time(delta: Delta) -> String {
    relative_time_with(&current(), delta, &RelativeOptions::default())
}

/// [`relative_time`] with an explicit locale and options.
#[must_use]
pub fn relative_time_with(locale: &Locale, delta: Delta, options: &RelativeOptions) -> String {
    let span = natural_delta_with(locale, delta, options);
    if span == locale.text(msg::A_MOMENT) {
        return locale.text(msg::NOW);
    }
    let template = if delta.is_negative() {
        locale.text(msg::FROM_NOW)
    } else {
        locale.text(msg::AGO)
    };
    template.replace("%s", &span)
}

/// "today", "tomorrow", "yesterday", or a month-day date ("Mar 05");
/// the year is appended when it differs from `today`'s.
#[must_use]
pub fn calendar_day(date: NaiveDate) -> String {
    calendar_day_with(&current(), date, chrono::Local::now().date_naive())
}

/// [`calendar_day`] with an explicit reference day.
#[must_use]
pub fn calendar_day_from(date: NaiveDate, today: NaiveDate) -> String {
    calendar_day_with(&current(), date, today)
}

/// [`calendar_day`] with an explicit locale and reference day.
#[must_use]
pub fn calendar_day_with(locale: &Locale, date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => locale.text(msg::TODAY),
        1 => locale.text(msg::TOMORROW),
        -1 => locale.text(msg::YESTERDAY),
        _ => format_month_day(date, date.year() != today.year()),
    }
}

/// Month-day-year rendering with no relative phrasing: "Mar 05 2024".
#[must_use]
pub fn absolute_date(date: NaiveDate) -> String {
    format_month_day(date, true)
}

fn format_month_day(date: NaiveDate, with_year: bool) -> String {
    if with_year {
        date.format("%b %d %Y").to_string()
    } else {
        date.format("%b %d").to_string()
    }
}

fn unit_micros(unit: Unit) -> f64 {
    match unit {
        Unit::Microseconds => 1.0,
        Unit::Milliseconds => 1e3,
        Unit::Seconds => 1e6,
        Unit::Minutes => 60e6,
        Unit::Hours => 3600e6,
        Unit::Days => 86_400e6,
        Unit::Months => 30.5 * 86_400e6,
        Unit::Years => 365.0 * 86_400e6,
    }
}

/// Options for [`precise_delta`].
#[derive(Debug, Clone)]
pub struct PreciseOptions {
    /// Finest unit to report; finer remainders fold into it as a
    /// fraction.
    pub minimum_unit: Unit,
    /// Units to skip; their value folds into the neighboring units.
    pub suppress: Vec<Unit>,
    /// Fraction digits for the minimum unit's component.
    pub fraction_digits: usize,
}

impl Default for PreciseOptions {
    fn default() -> Self {
        Self {
            minimum_unit: Unit::Seconds,
            suppress: Vec::new(),
            fraction_digits: 2,
        }
    }
}

/// Exact multi-component breakdown of a span:
/// "2 days, 1 hour and 33.12 seconds". The sign is ignored.
#[must_use]
pub fn precise_delta(delta: Delta) -> String {
    precise_delta_with(&current(), delta, &PreciseOptions::default())
}

/// [`precise_delta`] with an explicit locale and options.
#[must_use]
pub fn precise_delta_with(locale: &Locale, delta: Delta, options: &PreciseOptions) -> String {
    let mut suppressed: HashSet<Unit> = options.suppress.iter().copied().collect();

    // A suppressed minimum unit promotes to the next coarser unit that
    // is not suppressed.
    let minimum = if suppressed.contains(&options.minimum_unit) {
        Unit::ALL
            .iter()
            .find(|unit| **unit > options.minimum_unit && !suppressed.contains(unit))
            .copied()
            .unwrap_or(options.minimum_unit)
    } else {
        options.minimum_unit
    };
    suppressed.remove(&minimum);
    for unit in Unit::ALL {
        if unit < minimum {
            suppressed.insert(unit);
        }
    }

    let digits = options.fraction_digits;

    // Round the whole span at the minimum unit's display granularity up
    // front, so a remainder that rounds to a full unit carries upward
    // ("1000 ms" becomes one more second, "60.00 s" one more minute).
    let granularity = unit_micros(minimum) / 10f64.powi(digits as i32);
    let total = delta.abs().total_micros() as f64;
    let delta = Delta::from_total_micros(((total / granularity).round() * granularity) as i128);

    let split = |value: f64, divisor: f64, unit: Unit| -> (f64, f64) {
        if unit == minimum {
            (round_to(value / divisor, digits), 0.0)
        } else if suppressed.contains(&unit) {
            (0.0, value)
        } else {
            let quotient = (value / divisor).floor();
            (quotient, value - quotient * divisor)
        }
    };
    // At the minimum unit the finer value folds upward; at a suppressed
    // unit everything folds downward; otherwise only the fractional part
    // (left by a suppressed coarser unit) folds downward.
    let carry = |coarse: f64, fine: f64, ratio: f64, unit: Unit| -> (f64, f64) {
        if unit == minimum {
            (round_to(coarse + fine / ratio, digits), 0.0)
        } else if suppressed.contains(&unit) {
            (0.0, fine + coarse * ratio)
        } else {
            let whole = coarse.trunc();
            (whole, fine + (coarse - whole) * ratio)
        }
    };

    let (days, secs, usecs) = (
        delta.days() as f64,
        delta.secs() as f64,
        delta.micros() as f64,
    );
    let (years, days) = split(days, 365.0, Unit::Years);
    let (months, days) = split(days, 30.5, Unit::Months);
    let (days, secs) = carry(days, secs, 86_400.0, Unit::Days);
    let (hours, secs) = split(secs, 3600.0, Unit::Hours);
    let (minutes, secs) = split(secs, 60.0, Unit::Minutes);
    let (secs, usecs) = carry(secs, usecs, 1e6, Unit::Seconds);
    let (msecs, usecs) = split(usecs, 1000.0, Unit::Milliseconds);
    let (usecs, _) = carry(usecs, 0.0, 1.0, Unit::Microseconds);

    let components: [(Unit, PluralMsg, f64); 8] = [
        (Unit::Years, msg::YEARS, years),
        (Unit::Months, msg::MONTHS, months),
        (Unit::Days, msg::DAYS, days),
        (Unit::Hours, msg::HOURS, hours),
        (Unit::Minutes, msg::MINUTES, minutes),
        (Unit::Seconds, msg::SECONDS, secs),
        (Unit::Milliseconds, msg::MILLISECONDS, msecs),
        (Unit::Microseconds, msg::MICROSECONDS, usecs),
    ];

    let mut parts: Vec<String> = Vec::new();
    for (unit, message, value) in components {
        if value <= 0.0 && !(parts.is_empty() && unit == minimum) {
            continue;
        }
        // Fractions between 1 and 2 still read as plural.
        let count = if value > 1.0 && value < 2.0 {
            2
        } else {
            value as i64
        };
        let text = locale.counted(message, count);
        let rendered = if unit == minimum && value.fract() != 0.0 {
            text.replace("%d", &format!("{value:.digits$}"))
        } else if unit == Unit::Years {
            text.replace("%d", &grouped_with(locale, value as i64))
        } else {
            text.replace("%d", &(value as i64).to_string())
        };
        parts.push(rendered);
    }

    if parts.len() == 1 {
        return parts.remove(0);
    }
    let tail = parts.pop().unwrap_or_default();
    let head = parts.join(", ");
    locale
        .text(msg::AND)
        .replacen("%s", &head, 1)
        .replacen("%s", &tail, 1)
}
