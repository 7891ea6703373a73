//! Lenient integer parsing for values taken from the URL and from form inputs.
//!
//! Accepts leading whitespace, an optional sign and the leading run of digits;
//! whatever follows is ignored ("12abc" is 12). A `0x`/`0X` prefix switches to
//! hexadecimal ("0x1A" is 26). A value without leading digits is `NaN` and keeps
//! that spelling when formatted, as does a digit run that does not fit in `i64`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LooseInt {
    Value(i64),
    NaN,
}

impl LooseInt {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (digits, radix) = match digits.get(..2) {
            Some("0x") | Some("0X") => (&digits[2..], 16),
            _ => (digits, 10),
        };

        let end = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if end == 0 {
            return LooseInt::NaN;
        }

        // Переполнение i64 считаем нечисловым значением
        match i64::from_str_radix(&digits[..end], radix) {
            Ok(v) if negative => LooseInt::Value(-v),
            Ok(v) => LooseInt::Value(v),
            Err(_) => LooseInt::NaN,
        }
    }
}

impl fmt::Display for LooseInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseInt::Value(v) => write!(f, "{}", v),
            LooseInt::NaN => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(LooseInt::parse("3"), LooseInt::Value(3));
        assert_eq!(LooseInt::parse("  42"), LooseInt::Value(42));
        assert_eq!(LooseInt::parse("-7"), LooseInt::Value(-7));
        assert_eq!(LooseInt::parse("+5"), LooseInt::Value(5));
    }

    #[test]
    fn test_leading_digits_win() {
        assert_eq!(LooseInt::parse("12abc"), LooseInt::Value(12));
        assert_eq!(LooseInt::parse("2.9"), LooseInt::Value(2));
    }

    #[test]
    fn test_nan() {
        assert_eq!(LooseInt::parse(""), LooseInt::NaN);
        assert_eq!(LooseInt::parse("abc"), LooseInt::NaN);
        assert_eq!(LooseInt::parse("-"), LooseInt::NaN);
        assert_eq!(LooseInt::parse("99999999999999999999"), LooseInt::NaN);
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(LooseInt::parse("0x1A"), LooseInt::Value(26));
        assert_eq!(LooseInt::parse("-0Xff"), LooseInt::Value(-255));
        assert_eq!(LooseInt::parse("0x"), LooseInt::NaN);
        assert_eq!(LooseInt::parse("0xg"), LooseInt::NaN);
        assert_eq!(LooseInt::parse("012"), LooseInt::Value(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(LooseInt::Value(5).to_string(), "5");
        assert_eq!(LooseInt::NaN.to_string(), "NaN");
    }
}
