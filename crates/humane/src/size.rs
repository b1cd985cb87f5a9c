//! Byte-size humanization.
//!
//! Suffixes are technical notation and deliberately bypass the
//! translation catalog.

/// Suffix family and base for [`byte_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeStyle {
    /// Powers of 1000 with decimal suffixes: "1.0 KB".
    #[default]
    Decimal,
    /// Powers of 1024 with IEC suffixes: "1.0 KiB".
    Binary,
    /// Powers of 1024 with `ls -sh` style one-letter suffixes: "1K".
    Gnu,
}

const DECIMAL_SUFFIXES: [&str; 8] = [" KB", " MB", " GB", " TB", " PB", " EB", " ZB", " YB"];
const BINARY_SUFFIXES: [&str; 8] = [" KiB", " MiB", " GiB", " TiB", " PiB", " EiB", " ZiB", " YiB"];
const GNU_SUFFIXES: [&str; 8] = ["K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Render a byte count with one fraction digit: "1.0 KB", "300 Bytes",
/// "1K".
#[must_use]
pub fn byte_size(bytes: u64, style: SizeStyle) -> String {
    byte_size_with(bytes, style, 1)
}

/// [`byte_size`] with explicit fraction digits. Counts below one scale
/// step render as whole bytes; the GNU style drops an all-zero
/// fraction.
#[must_use]
pub fn byte_size_with(bytes: u64, style: SizeStyle, fraction_digits: usize) -> String {
    let (base, suffixes) = match style {
        SizeStyle::Decimal => (1000.0, &DECIMAL_SUFFIXES),
        SizeStyle::Binary => (1024.0, &BINARY_SUFFIXES),
        SizeStyle::Gnu => (1024.0, &GNU_SUFFIXES),
    };
    let value = bytes as f64;
    if value < base {
        return match style {
            SizeStyle::Gnu => format!("{bytes}B"),
            _ if bytes == 1 => "1 Byte".to_owned(),
            _ => format!("{bytes} Bytes"),
        };
    }

    let mut exponent = 1;
    while exponent < suffixes.len() && value >= base.powi(exponent as i32 + 1) {
        exponent += 1;
    }
    let scaled = value / base.powi(exponent as i32);
    let number = format!("{scaled:.fraction_digits$}");
    let number = if style == SizeStyle::Gnu {
        trim_integral(number)
    } else {
        number
    };
    format!("{number}{}", suffixes[exponent - 1])
}

fn trim_integral(number: String) -> String {
    match number.split_once('.') {
        Some((int_part, frac)) if frac.bytes().all(|b| b == b'0') => int_part.to_owned(),
        _ => number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_render_as_bytes() {
        assert_eq!(byte_size(0, SizeStyle::Decimal), "0 Bytes");
        assert_eq!(byte_size(1, SizeStyle::Decimal), "1 Byte");
        assert_eq!(byte_size(300, SizeStyle::Decimal), "300 Bytes");
        assert_eq!(byte_size(1023, SizeStyle::Binary), "1023 Bytes");
    }

    #[test]
    fn decimal_scale_steps() {
        assert_eq!(byte_size(1000, SizeStyle::Decimal), "1.0 KB");
        assert_eq!(byte_size(3_000_000, SizeStyle::Decimal), "3.0 MB");
        assert_eq!(byte_size(1_000_000_000, SizeStyle::Decimal), "1.0 GB");
        assert_eq!(byte_size(3_500_000_000_000, SizeStyle::Decimal), "3.5 TB");
    }

    #[test]
    fn decimal_rounding_can_touch_the_next_step() {
        assert_eq!(byte_size(999_999, SizeStyle::Decimal), "1000.0 KB");
    }

    #[test]
    fn binary_scale_steps() {
        assert_eq!(byte_size(1024, SizeStyle::Binary), "1.0 KiB");
        assert_eq!(byte_size(1024 * 1024, SizeStyle::Binary), "1.0 MiB");
        assert_eq!(byte_size(1536, SizeStyle::Binary), "1.5 KiB");
    }

    #[test]
    fn gnu_style_is_compact() {
        assert_eq!(byte_size(300, SizeStyle::Gnu), "300B");
        assert_eq!(byte_size(1024, SizeStyle::Gnu), "1K");
        assert_eq!(byte_size(1536, SizeStyle::Gnu), "1.5K");
        assert_eq!(byte_size(3 * 1024 * 1024, SizeStyle::Gnu), "3M");
    }

    #[test]
    fn huge_counts_clamp_to_the_largest_suffix() {
        assert_eq!(
            byte_size(10_000_000_000_000_000_000, SizeStyle::Decimal),
            "10.0 EB"
        );
        assert_eq!(byte_size(u64::MAX, SizeStyle::Decimal), "18.4 EB");
    }

    #[test]
    fn explicit_fraction_digits() {
        assert_eq!(byte_size_with(3_141_592, SizeStyle::Decimal, 2), "3.14 MB");
        assert_eq!(byte_size_with(1000, SizeStyle::Decimal, 0), "1 KB");
    }
}
