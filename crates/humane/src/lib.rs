//! Human-friendly formatting for numbers, durations, dates, and byte
//! sizes, with runtime-switchable localization.
//!
//! Every formatter comes in two forms: a convenience form reading the
//! thread's active locale (see [`activate`] and [`scoped`]) and a
//! `*_with` form taking an explicit [`Locale`]. Without a catalog both
//! forms emit source-language output.
//!
//! ```
//! use humane::{Delta, SizeStyle};
//!
//! assert_eq!(humane::byte_size(1000, SizeStyle::Decimal), "1.0 KB");
//! assert_eq!(humane::relative_time(Delta::from_secs(180)), "3 minutes ago");
//! assert_eq!(humane::word_scale(123_500_000.0, 1)?, "123.5 million");
//! assert_eq!(humane::ordinal(42), "42nd");
//! # Ok::<(), humane::FormatError>(())
//! ```

#![forbid(unsafe_code)]

pub use humane_i18n as i18n;
pub use humane_i18n::{
    I18nError, LOCALE_DIR_ENV, Locale, ScopedLocale, activate, current, deactivate, scoped,
};

mod msg;

pub mod lists;
pub mod number;
pub mod size;
pub mod time;

pub use lists::{join_and, join_and_with};
pub use number::{
    FormatError, Gender, ap_number, ap_number_with, fraction, grouped, grouped_f64,
    grouped_f64_with, grouped_with, metric, ordinal, ordinal_gendered, ordinal_with, scientific,
    word_scale, word_scale_with,
};
pub use size::{SizeStyle, byte_size, byte_size_with};
pub use time::{
    Delta, PreciseOptions, RelativeOptions, Unit, absolute_date, calendar_day, calendar_day_from,
    calendar_day_with, natural_delta, natural_delta_with, precise_delta, precise_delta_with,
    relative_time, relative_time_with,
};
