//! Number humanization: digit grouping, word scales, AP style,
//! fractions, scientific notation, ordinals, and SI prefixes.
//!
//! Every function takes typed numeric input and comes in two forms: a
//! convenience form reading the thread's active locale, and a `*_with`
//! form taking an explicit [`Locale`]. Functions over `f64` reject
//! non-finite values with [`FormatError::NonFinite`].

use std::fmt;

use humane_i18n::{Locale, current};

use crate::msg;

/// Errors from formatters whose input domain excludes non-finite floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatError {
    /// The value was NaN or infinite.
    NonFinite(f64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite(value) => write!(f, "cannot format non-finite value {value}"),
        }
    }
}

impl std::error::Error for FormatError {}

pub(crate) fn ensure_finite(value: f64) -> Result<(), FormatError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FormatError::NonFinite(value))
    }
}

pub(crate) fn round_to(value: f64, fraction_digits: usize) -> f64 {
    let factor = 10f64.powi(fraction_digits as i32);
    (value * factor).round() / factor
}

/// Group an integer's digits in runs of three with the locale's
/// thousands separator.
///
/// ```
/// assert_eq!(humane::grouped(1_234_567), "1,234,567");
/// assert_eq!(humane::grouped(-1000), "-1,000");
/// ```
#[must_use]
pub fn grouped(value: i64) -> String {
    grouped_with(&current(), value)
}

/// [`grouped`] with an explicit locale.
#[must_use]
pub fn grouped_with(locale: &Locale, value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!(
        "{sign}{}",
        group_digits(&digits, locale.thousands_separator())
    )
}

/// Fixed-point rendering with grouped integer digits and the locale's
/// decimal separator.
pub fn grouped_f64(value: f64, fraction_digits: usize) -> Result<String, FormatError> {
    grouped_f64_with(&current(), value, fraction_digits)
}

/// [`grouped_f64`] with an explicit locale.
pub fn grouped_f64_with(
    locale: &Locale,
    value: f64,
    fraction_digits: usize,
) -> Result<String, FormatError> {
    ensure_finite(value)?;
    let rendered = format!("{value:.fraction_digits$}");
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let grouped = group_digits(digits, locale.thousands_separator());
    Ok(match frac_part {
        Some(frac) => format!("{sign}{grouped}{}{frac}", locale.decimal_separator()),
        None => format!("{sign}{grouped}"),
    })
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Approximate a large value with a scale word: `1_200_000_000` at one
/// fractional digit is "1.2 billion".
///
/// Thresholds are inclusive at the lower bound (exactly 1000 is
/// "1.0 thousand"); rounding that lands on the next threshold promotes
/// into the next word. Values below the first threshold render as plain
/// grouped integers; values beyond the ladder clamp to the largest word.
pub fn word_scale(value: f64, fraction_digits: usize) -> Result<String, FormatError> {
    word_scale_with(&current(), value, fraction_digits)
}

/// [`word_scale`] with an explicit locale.
pub fn word_scale_with(
    locale: &Locale,
    value: f64,
    fraction_digits: usize,
) -> Result<String, FormatError> {
    ensure_finite(value)?;
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if magnitude < msg::SCALE_LADDER[0].0 {
        return Ok(grouped_with(locale, value as i64));
    }

    let mut index = msg::SCALE_LADDER
        .iter()
        .position(|&(threshold, _)| threshold > magnitude)
        .map_or(msg::SCALE_LADDER.len() - 1, |i| i - 1);
    let mut scaled = round_to(magnitude / msg::SCALE_LADDER[index].0, fraction_digits);

    // Rounding can land exactly on the next threshold.
    if index + 1 < msg::SCALE_LADDER.len()
        && (scaled * msg::SCALE_LADDER[index].0 - msg::SCALE_LADDER[index + 1].0).abs() < 1.0
    {
        index += 1;
        scaled = 1.0;
    }

    let word = msg::SCALE_LADDER[index].1;
    let word = locale.plural(word, word, scaled.ceil() as i64);
    let number =
        format!("{scaled:.fraction_digits$}").replace('.', locale.decimal_separator());
    Ok(format!("{sign}{number} {word}"))
}

/// Associated Press style: spell out 0 through 9, use digits otherwise.
///
/// ```
/// assert_eq!(humane::ap_number(5), "five");
/// assert_eq!(humane::ap_number(10), "10");
/// ```
#[must_use]
pub fn ap_number(value: i64) -> String {
    ap_number_with(&current(), value)
}

/// [`ap_number`] with an explicit locale.
#[must_use]
pub fn ap_number_with(locale: &Locale, value: i64) -> String {
    match usize::try_from(value) {
        Ok(n) if n < 10 => locale.text(msg::SMALL_NUMBERS[n]),
        _ => value.to_string(),
    }
}

/// Denominator cap for [`fraction`]; keeps float noise from producing
/// absurd ratios.
const MAX_DENOMINATOR: i64 = 1000;

/// Render a real number as a reduced fraction: `0.3` is "3/10", `1.5`
/// is "1 1/2", integers render bare.
pub fn fraction(value: f64) -> Result<String, FormatError> {
    ensure_finite(value)?;
    let whole = value.trunc() as i64;
    let (numerator, denominator) = limit_denominator(value - whole as f64, MAX_DENOMINATOR);
    if numerator == 0 {
        return Ok(whole.to_string());
    }
    if whole == 0 {
        return Ok(format!("{numerator}/{denominator}"));
    }
    Ok(format!("{whole} {}/{denominator}", numerator.abs()))
}

/// Best rational approximation of `value` with denominator at most
/// `max_denominator`, via the continued-fraction convergents
/// (Stern-Brocot walk). Convergents are already in lowest terms.
fn limit_denominator(value: f64, max_denominator: i64) -> (i64, i64) {
    if value == 0.0 {
        return (0, 1);
    }
    let negative = value < 0.0;
    let mut x = value.abs();

    let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
    loop {
        let a = x.floor() as i64;
        let p2 = a * p1 + p0;
        let q2 = a * q1 + q0;
        if q2 > max_denominator {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p2, q2);

        let remainder = x - a as f64;
        if remainder.abs() < 1e-10 {
            break;
        }
        x = 1.0 / remainder;
        if x > 1e10 {
            break;
        }
    }

    if q1 == 0 {
        return (0, 1);
    }
    (if negative { -p1 } else { p1 }, q1)
}

/// Unicode superscript glyphs for an exponent.
fn superscript(exponent: &str) -> String {
    exponent
        .chars()
        .filter_map(|c| match c {
            '0' => Some('\u{2070}'),
            '1' => Some('\u{00b9}'),
            '2' => Some('\u{00b2}'),
            '3' => Some('\u{00b3}'),
            '4' => Some('\u{2074}'),
            '5' => Some('\u{2075}'),
            '6' => Some('\u{2076}'),
            '7' => Some('\u{2077}'),
            '8' => Some('\u{2078}'),
            '9' => Some('\u{2079}'),
            '-' => Some('\u{207b}'),
            _ => None,
        })
        .collect()
}

/// Scientific notation with a superscript exponent: `500` at two digits
/// is "5.00 x 10²"; zero renders as "0.00 x 10⁰".
pub fn scientific(value: f64, fraction_digits: usize) -> Result<String, FormatError> {
    ensure_finite(value)?;
    let rendered = format!("{value:.fraction_digits$e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return Ok(rendered);
    };
    Ok(format!("{mantissa} x 10{}", superscript(exponent)))
}

/// Grammatical gender for ordinal suffixes in languages that mark it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Ordinal rendering: "1st", "2nd", "3rd", "11th", "101st".
#[must_use]
pub fn ordinal(value: i64) -> String {
    ordinal_gendered(value, Gender::Male)
}

/// [`ordinal`] with an explicit suffix gender.
#[must_use]
pub fn ordinal_gendered(value: i64, gender: Gender) -> String {
    ordinal_with(&current(), value, gender)
}

/// [`ordinal`] with an explicit locale and gender.
///
/// Suffixes resolve through context-qualified lookup (tags like
/// `"1 (male)"`) so gendered languages can translate each digit's
/// suffix independently.
#[must_use]
pub fn ordinal_with(locale: &Locale, value: i64, gender: Gender) -> String {
    let n = value.unsigned_abs();
    let index = if matches!(n % 100, 11..=13) {
        0
    } else {
        (n % 10) as usize
    };
    let tag = format!(
        "{index} ({})",
        match gender {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    );
    let suffix = locale.qualified(&tag, msg::ORDINAL_SUFFIXES[index]);
    format!("{value}{suffix}")
}

const SI_POSITIVE: [char; 10] = ['k', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y', 'R', 'Q'];
const SI_NEGATIVE: [char; 10] = ['m', '\u{3bc}', 'n', 'p', 'f', 'a', 'z', 'y', 'r', 'q'];

/// SI prefix rendering at a fixed number of significant digits:
/// `metric(1500.0, "V", 3)` is "1.50 kV".
///
/// Magnitudes outside the prefix range fall back to [`scientific`].
pub fn metric(value: f64, unit: &str, significant_digits: usize) -> Result<String, FormatError> {
    ensure_finite(value)?;
    let exponent = if value == 0.0 {
        0
    } else {
        value.abs().log10().floor() as i32
    };
    if !(-30..33).contains(&exponent) {
        let rendered = scientific(value, significant_digits.saturating_sub(1))?;
        return Ok(format!("{rendered}{unit}"));
    }

    let group = exponent.div_euclid(3);
    let scaled = value / 10f64.powi(group * 3);
    let prefix = if group > 0 {
        SI_POSITIVE.get(group as usize - 1)
    } else if group < 0 {
        SI_NEGATIVE.get((-group) as usize - 1)
    } else {
        None
    };
    let prefix = prefix.map(char::to_string).unwrap_or_default();

    let digits_before_point = exponent.rem_euclid(3);
    let fraction_digits = (significant_digits as i32 - digits_before_point - 1).max(0) as usize;
    let number = format!("{scaled:.fraction_digits$}");

    // Angular units attach directly, per SI typography.
    let space = if (!unit.is_empty() || !prefix.is_empty()) && !matches!(unit, "°" | "′" | "″") {
        " "
    } else {
        ""
    };
    Ok(format!("{number}{space}{prefix}{unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_basics() {
        assert_eq!(grouped(100), "100");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(10_123), "10,123");
        assert_eq!(grouped(1_000_000), "1,000,000");
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(-1_234_567), "-1,234,567");
    }

    #[test]
    fn grouped_f64_precision() {
        assert_eq!(grouped_f64(1_234_567.1234, 0).unwrap(), "1,234,567");
        assert_eq!(grouped_f64(1_234_567.1234, 1).unwrap(), "1,234,567.1");
        assert_eq!(grouped_f64(1_234_567.0, 1).unwrap(), "1,234,567.0");
        assert_eq!(grouped_f64(-1000.5, 1).unwrap(), "-1,000.5");
    }

    #[test]
    fn grouped_f64_rejects_non_finite() {
        assert!(matches!(
            grouped_f64(f64::NAN, 1),
            Err(FormatError::NonFinite(_))
        ));
    }

    #[test]
    fn word_scale_small_values_pass_through() {
        assert_eq!(word_scale(100.0, 1).unwrap(), "100");
        assert_eq!(word_scale(-999.0, 1).unwrap(), "-999");
        assert_eq!(word_scale(0.0, 1).unwrap(), "0");
    }

    #[test]
    fn word_scale_ladder() {
        assert_eq!(word_scale(1000.0, 1).unwrap(), "1.0 thousand");
        assert_eq!(word_scale(12_400.0, 1).unwrap(), "12.4 thousand");
        assert_eq!(word_scale(1_000_000.0, 1).unwrap(), "1.0 million");
        assert_eq!(word_scale(-1_000_000.0, 1).unwrap(), "-1.0 million");
        assert_eq!(word_scale(1_200_000_000.0, 1).unwrap(), "1.2 billion");
        assert_eq!(word_scale(1_230_000.0, 2).unwrap(), "1.23 million");
    }

    #[test]
    fn word_scale_rounding_promotes() {
        assert_eq!(word_scale(1_234_567.0, 0).unwrap(), "1 million");
        assert_eq!(word_scale(999_500.0, 0).unwrap(), "1 million");
        assert_eq!(word_scale(999_499.0, 0).unwrap(), "999 thousand");
    }

    #[test]
    fn word_scale_clamps_to_largest_word() {
        assert_eq!(word_scale(1e100, 1).unwrap(), "1.0 googol");
        assert_eq!(word_scale(2e100, 1).unwrap(), "2.0 googol");
    }

    #[test]
    fn word_scale_rejects_non_finite() {
        assert!(word_scale(f64::INFINITY, 1).is_err());
    }

    #[test]
    fn ap_numbers() {
        assert_eq!(ap_number(0), "zero");
        assert_eq!(ap_number(1), "one");
        assert_eq!(ap_number(9), "nine");
        assert_eq!(ap_number(10), "10");
        assert_eq!(ap_number(-1), "-1");
    }

    #[test]
    fn fractions() {
        assert_eq!(fraction(1.0).unwrap(), "1");
        assert_eq!(fraction(0.0).unwrap(), "0");
        assert_eq!(fraction(0.3).unwrap(), "3/10");
        assert_eq!(fraction(1.5).unwrap(), "1 1/2");
        assert_eq!(fraction(1.0 / 3.0).unwrap(), "1/3");
        assert_eq!(fraction(-1.5).unwrap(), "-1 1/2");
    }

    #[test]
    fn fraction_rejects_non_finite() {
        assert!(fraction(f64::NAN).is_err());
        assert!(fraction(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn limit_denominator_is_reduced() {
        let (n, d) = limit_denominator(0.5, 1000);
        assert_eq!((n, d), (1, 2));
        let (n, d) = limit_denominator(0.333_333_333_333, 1000);
        assert_eq!((n, d), (1, 3));
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(scientific(1000.0, 2).unwrap(), "1.00 x 10\u{b3}");
        assert_eq!(scientific(-1000.0, 2).unwrap(), "-1.00 x 10\u{b3}");
        assert_eq!(scientific(5.5, 2).unwrap(), "5.50 x 10\u{2070}");
        assert_eq!(scientific(500.0, 2).unwrap(), "5.00 x 10\u{b2}");
        assert_eq!(scientific(0.3, 2).unwrap(), "3.00 x 10\u{207b}\u{b9}");
        assert_eq!(scientific(0.0, 2).unwrap(), "0.00 x 10\u{2070}");
    }

    #[test]
    fn scientific_rejects_non_finite() {
        assert!(scientific(f64::NAN, 2).is_err());
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(101), "101st");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(-3), "-3rd");
    }

    #[test]
    fn metric_prefixes() {
        assert_eq!(metric(1500.0, "V", 3).unwrap(), "1.50 kV");
        assert_eq!(metric(2e8, "W", 3).unwrap(), "200 MW");
        assert_eq!(metric(220e-6, "F", 3).unwrap(), "220 \u{3bc}F");
        assert_eq!(metric(200_000.0, "", 3).unwrap(), "200 k");
        assert_eq!(metric(0.0, "", 3).unwrap(), "0.00");
    }

    #[test]
    fn metric_no_space_before_angular_units() {
        assert_eq!(metric(1.0, "°", 3).unwrap(), "1.00°");
    }

    #[test]
    fn metric_out_of_range_falls_back_to_scientific() {
        let rendered = metric(1e40, "V", 3).unwrap();
        assert!(rendered.contains(" x 10"), "{rendered}");
        assert!(rendered.ends_with('V'));
    }
}
