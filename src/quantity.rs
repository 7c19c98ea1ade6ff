//! # Quantity Normalization
//!
//! Converts numeric-looking ingredient amounts into rounded `f64` values.
//!
//! Supported shapes:
//! - a single numeric character: `"3"`, `"½"`, `"Ⅻ"`, `"①"`
//! - a decimal number: `"10"`, `"2.5"`, `"３"`, `"٢٥"`
//! - a number followed by a vulgar fraction glyph: `"1½"`, `"2¼"`
//!
//! Digits of any script count as decimal digits. Any trailing character
//! that is not a decimal digit is assumed to be a fraction
//! glyph. Trailing punctuation such as `"2,"` therefore fails as a
//! malformed quantity instead of being ignored.

use crate::errors::RecipeError;
use tracing::trace;

mod numeric_values;

use numeric_values::{DECIMAL_DIGIT_ZEROS, NUMERIC_VALUES};

/// Value of a decimal digit from any script (`'7'`, `'７'`, `'٧'`)
pub fn decimal_digit(c: char) -> Option<u32> {
    let cp = u32::from(c);
    let index = DECIMAL_DIGIT_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DECIMAL_DIGIT_ZEROS[..index].last()?;
    let digit = cp - zero;
    (digit < 10).then_some(digit)
}

/// Unicode numeric value of a single character: digits of any script,
/// vulgar fractions, superscripts, Roman numerals, circled numbers
pub fn glyph_value(c: char) -> Option<f64> {
    let cp = u32::from(c);
    let index = NUMERIC_VALUES.partition_point(|&(first, _, _)| first <= cp);
    let &(first, last, value) = NUMERIC_VALUES[..index].last()?;
    (cp <= last).then(|| value + f64::from(cp - first))
}

/// Round to two decimal places, ties to even.
///
/// The tie is decided on the exact decimal expansion of `value`, so
/// `0.015` (stored just below the tie) rounds down.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Every f64 has at most 1074 fractional decimal digits
    let exact = format!("{:.1074}", value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };
    let (kept, rest) = fraction.split_at(2);

    let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    let first_dropped = rest.as_bytes()[0];
    let round_up = match first_dropped.cmp(&b'5') {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => {
            rest[1..].bytes().any(|b| b != b'0')
                || digits.last().is_some_and(|d| (d - b'0') % 2 == 1)
        }
    };
    if round_up {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let text = format!(
        "{}.{}",
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    );
    let rounded: f64 = text.parse().unwrap_or(value.abs());
    rounded.copysign(value)
}

fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Whether every character of `text` is numeric (digits, fraction glyphs,
/// superscripts). A decimal point makes the text non-numeric.
pub fn is_numeric_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

/// Normalize an amount span into a quantity rounded to two decimals
pub fn normalize(text: &str) -> Result<f64, RecipeError> {
    let malformed = || RecipeError::MalformedQuantity(text.to_string());

    let mut chars = text.chars();
    let last = chars.next_back().ok_or_else(malformed)?;
    let head = chars.as_str();

    let value = if head.is_empty() {
        glyph_value(last).ok_or_else(malformed)?
    } else if decimal_digit(last).is_some() {
        parse_decimal(text).ok_or_else(malformed)?
    } else {
        let whole = parse_decimal(head).ok_or_else(malformed)?;
        let fraction = glyph_value(last).ok_or_else(malformed)?;
        whole + fraction
    };

    if !value.is_finite() || value < 0.0 {
        return Err(malformed());
    }

    let rounded = round2(value);
    trace!(text = %text, quantity = rounded, "Quantity normalized");
    Ok(rounded)
}

/// Parse a decimal number whose digits may come from any script
fn parse_decimal(text: &str) -> Option<f64> {
    let ascii: String = text
        .trim()
        .chars()
        .map(|c| match decimal_digit(c) {
            Some(d) => char::from_digit(d, 10).unwrap_or(c),
            None => c,
        })
        .collect();
    ascii.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_glyph() {
        assert_eq!(normalize("½").unwrap(), 0.5);
        assert_eq!(normalize("¼").unwrap(), 0.25);
        assert_eq!(normalize("⅓").unwrap(), 0.33);
        assert_eq!(normalize("⅔").unwrap(), 0.67);
        assert_eq!(normalize("3").unwrap(), 3.0);
    }

    #[test]
    fn test_integer_with_glyph() {
        assert_eq!(normalize("1½").unwrap(), 1.5);
        assert_eq!(normalize("2¼").unwrap(), 2.25);
        assert_eq!(normalize("10¾").unwrap(), 10.75);
        assert_eq!(normalize("1⅛").unwrap(), 1.12);
    }

    #[test]
    fn test_decimal_strings() {
        assert_eq!(normalize("2.5").unwrap(), 2.5);
        assert_eq!(normalize("10").unwrap(), 10.0);
        assert_eq!(normalize("0.125").unwrap(), 0.12);
        assert_eq!(normalize("250").unwrap(), 250.0);
    }

    #[test]
    fn test_unicode_numeric_characters() {
        assert_eq!(normalize("３").unwrap(), 3.0);
        assert_eq!(normalize("٣").unwrap(), 3.0);
        assert_eq!(normalize("Ⅻ").unwrap(), 12.0);
        assert_eq!(normalize("⅟").unwrap(), 1.0);
        assert_eq!(normalize("①").unwrap(), 1.0);
        assert_eq!(normalize("１２").unwrap(), 12.0);
        assert_eq!(normalize("٢٥").unwrap(), 25.0);
        assert_eq!(normalize("１½").unwrap(), 1.5);
        for amount in ["３", "٣", "Ⅻ", "⅟", "①"] {
            assert!(is_numeric_text(amount));
        }
    }

    #[test]
    fn test_glyph_and_digit_values() {
        assert_eq!(glyph_value('7'), Some(7.0));
        assert_eq!(glyph_value('Ⅼ'), Some(50.0));
        assert_eq!(glyph_value('⑳'), Some(20.0));
        assert_eq!(glyph_value('a'), None);
        assert_eq!(decimal_digit('９'), Some(9));
        assert_eq!(decimal_digit('०'), Some(0));
        assert_eq!(decimal_digit('²'), None);
        assert_eq!(decimal_digit('x'), None);
    }

    #[test]
    fn test_round2_uses_exact_decimal_value() {
        // 0.015 is stored just below the tie
        assert_eq!(round2(0.015), 0.01);
        assert_eq!(normalize("0.015").unwrap(), 0.01);
        // 0.125 and 0.375 are exact ties
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(9.999), 10.0);
        assert_eq!(round2(-1.005), -1.0);
        assert_eq!(round2(250.0), 250.0);
    }

    #[test]
    fn test_malformed_quantities() {
        assert!(matches!(normalize(""), Err(RecipeError::MalformedQuantity(_))));
        assert!(matches!(normalize("2,"), Err(RecipeError::MalformedQuantity(_))));
        assert!(matches!(normalize("a"), Err(RecipeError::MalformedQuantity(_))));
        assert!(matches!(normalize("x½"), Err(RecipeError::MalformedQuantity(_))));
        assert!(matches!(normalize("1.2.3"), Err(RecipeError::MalformedQuantity(_))));
        assert!(matches!(normalize("-2"), Err(RecipeError::MalformedQuantity(_))));
    }

    #[test]
    fn test_is_numeric_text() {
        assert!(is_numeric_text("2"));
        assert!(is_numeric_text("½"));
        assert!(is_numeric_text("1½"));
        assert!(!is_numeric_text("2.5"));
        assert!(!is_numeric_text("dos"));
        assert!(!is_numeric_text(""));
    }
}
