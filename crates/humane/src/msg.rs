//! The source-language message key space, as typed constants.
//!
//! These are the msgids looked up in translation catalogs. Keeping them
//! here (instead of as string literals scattered through the
//! formatters) makes the key space enumerable and keeps msgid drift out
//! of the formatters.

use humane_i18n::PluralMsg;

pub(crate) const MICROSECONDS: PluralMsg = PluralMsg {
    one: "%d microsecond",
    many: "%d microseconds",
};
pub(crate) const MILLISECONDS: PluralMsg = PluralMsg {
    one: "%d millisecond",
    many: "%d milliseconds",
};
pub(crate) const SECONDS: PluralMsg = PluralMsg {
    one: "%d second",
    many: "%d seconds",
};
pub(crate) const MINUTES: PluralMsg = PluralMsg {
    one: "%d minute",
    many: "%d minutes",
};
pub(crate) const HOURS: PluralMsg = PluralMsg {
    one: "%d hour",
    many: "%d hours",
};
pub(crate) const DAYS: PluralMsg = PluralMsg {
    one: "%d day",
    many: "%d days",
};
pub(crate) const MONTHS: PluralMsg = PluralMsg {
    one: "%d month",
    many: "%d months",
};
pub(crate) const YEARS: PluralMsg = PluralMsg {
    one: "%d year",
    many: "%d years",
};
pub(crate) const YEAR_AND_DAYS: PluralMsg = PluralMsg {
    one: "1 year, %d day",
    many: "1 year, %d days",
};
pub(crate) const YEAR_AND_MONTHS: PluralMsg = PluralMsg {
    one: "1 year, %d month",
    many: "1 year, %d months",
};

pub(crate) const A_MOMENT: &str = "a moment";
pub(crate) const NOW: &str = "now";
pub(crate) const A_SECOND: &str = "a second";
pub(crate) const A_MINUTE: &str = "a minute";
pub(crate) const AN_HOUR: &str = "an hour";
pub(crate) const A_DAY: &str = "a day";
pub(crate) const A_MONTH: &str = "a month";
pub(crate) const A_YEAR: &str = "a year";
pub(crate) const YEAR_AND_MONTH: &str = "1 year, 1 month";

pub(crate) const AGO: &str = "%s ago";
pub(crate) const FROM_NOW: &str = "%s from now";
pub(crate) const AND: &str = "%s and %s";

pub(crate) const TODAY: &str = "today";
pub(crate) const TOMORROW: &str = "tomorrow";
pub(crate) const YESTERDAY: &str = "yesterday";

/// AP-style words for 0 through 9.
pub(crate) const SMALL_NUMBERS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Ordinal suffixes indexed by last digit (11-13 use index 0).
pub(crate) const ORDINAL_SUFFIXES: [&str; 10] =
    ["th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th"];

/// Word-scale ladder: threshold and scale word, ascending.
pub(crate) const SCALE_LADDER: [(f64, &str); 12] = [
    (1e3, "thousand"),
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
    (1e18, "quintillion"),
    (1e21, "sextillion"),
    (1e24, "septillion"),
    (1e27, "octillion"),
    (1e30, "nonillion"),
    (1e33, "decillion"),
    (1e100, "googol"),
];
