//! Exact-precision decimal numbers.
//!
//! A [`Decimal`] keeps the unscaled digits and the power-of-ten scale decoded
//! from the original numeral, so lexically distinct numerals that are
//! numerically equal stay distinguishable: `123.00` and `123` decode to
//! different values (scale 2 versus scale 0). The scale is derived strictly
//! from the numeral's lexical form and never normalized away.
//!
//! # Examples
//!
//! ```
//! use yamlmodem::Decimal;
//!
//! let d: Decimal = "12e03".parse().unwrap();
//! assert_eq!(d.unscaled_digits(), "12");
//! assert_eq!(d.scale(), -3);
//! assert_eq!(d.to_string(), "1.2E+4");
//! assert!(d.is_integral());
//! ```
use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use thiserror::Error;

/// Failure to decode a numeral into a [`Decimal`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// The text does not match the numeral grammar.
    #[error("malformed numeral '{0}'")]
    Malformed(String),
    /// The exponent does not fit the scale arithmetic.
    #[error("exponent out of range in numeral '{0}'")]
    ExponentOverflow(String),
}

/// An arbitrary-precision signed decimal, `±digits × 10^(−scale)`.
///
/// `digits` is the unscaled magnitude with leading zeros stripped (`"0"` for
/// zero); a negative scale shifts the value left of the decimal point.
/// Equality is representational, not numeric: two decimals are equal only if
/// sign, unscaled digits and scale all agree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimal {
    negative: bool,
    digits: String,
    scale: i64,
}

impl Decimal {
    /// The unscaled magnitude digits, most significant first.
    #[must_use]
    pub fn unscaled_digits(&self) -> &str {
        &self.digits
    }

    /// Count of fractional digits minus the exponent of the original numeral.
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Whether the decoded value is integral.
    ///
    /// Answered from the representation, not by numeric evaluation: a decimal
    /// is integral iff its scale is non-positive. `123.00` is therefore not
    /// integral even though it is numerically a whole number.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.scale <= 0
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Decodes a numeral: optional sign, digits, optional `.` and fractional
    /// digits, optional `e`/`E` exponent with optional sign.
    ///
    /// Negative zero decodes to plain zero; the sign is not preserved for an
    /// exact zero magnitude.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DecimalError::Malformed(s.to_string());
        let overflow = || DecimalError::ExponentOverflow(s.to_string());

        let bytes = s.as_bytes();
        let mut i = 0;
        let negative = match bytes.first() {
            Some(b'-') => {
                i += 1;
                true
            }
            Some(b'+') => {
                i += 1;
                false
            }
            _ => false,
        };

        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == int_start {
            return Err(malformed());
        }
        let int_digits = &s[int_start..i];

        let mut frac_digits = "";
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == frac_start {
                return Err(malformed());
            }
            frac_digits = &s[frac_start..i];
        }

        let mut exponent: i64 = 0;
        if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
            i += 1;
            let exp_negative = match bytes.get(i) {
                Some(b'-') => {
                    i += 1;
                    true
                }
                Some(b'+') => {
                    i += 1;
                    false
                }
                _ => false,
            };
            let exp_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i == exp_start {
                return Err(malformed());
            }
            for b in &bytes[exp_start..i] {
                exponent = exponent
                    .checked_mul(10)
                    .and_then(|e| e.checked_add(i64::from(b - b'0')))
                    .ok_or_else(overflow)?;
            }
            if exp_negative {
                exponent = -exponent;
            }
        }

        if i != bytes.len() {
            return Err(malformed());
        }

        let frac_len = i64::try_from(frac_digits.len()).map_err(|_| overflow())?;
        let scale = frac_len.checked_sub(exponent).ok_or_else(overflow)?;
        // The scale must stay in i32 range so the adjusted-exponent
        // arithmetic in `Display` stays in i64 range.
        if i32::try_from(scale).is_err() {
            return Err(overflow());
        }

        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
        let negative = negative && digits != "0";

        Ok(Self {
            negative,
            digits,
            scale,
        })
    }
}

impl fmt::Display for Decimal {
    /// Renders the decimal without losing scale information.
    ///
    /// Plain notation is used when the scale is zero, or when the scale is
    /// positive and the adjusted exponent is at least −6; otherwise the value
    /// is written in scientific notation with one digit before the point, so
    /// `12e03` formats as `1.2E+4` rather than `12000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = self.digits.as_str();
        #[allow(clippy::cast_possible_wrap)]
        let precision = digits.len() as i64;
        let adjusted = precision - 1 - self.scale;

        if self.scale == 0 {
            f.write_str(digits)
        } else if self.scale > 0 && adjusted >= -6 {
            if precision > self.scale {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let point = (precision - self.scale) as usize;
                write!(f, "{}.{}", &digits[..point], &digits[point..])
            } else {
                f.write_str("0.")?;
                for _ in 0..(self.scale - precision) {
                    f.write_str("0")?;
                }
                f.write_str(digits)
            }
        } else {
            f.write_str(&digits[..1])?;
            if digits.len() > 1 {
                write!(f, ".{}", &digits[1..])?;
            }
            if adjusted >= 0 {
                write!(f, "E+{adjusted}")
            } else {
                write!(f, "E{adjusted}")
            }
        }
    }
}
