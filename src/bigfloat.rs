// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::One;
use num_traits::ToPrimitive;
use num_traits::Zero;

use crate::constants::DEFAULT_PRECISION;
use crate::constants::MAX_DECIMAL_EXPONENT;
use crate::constants::MAX_PRECISION;
use crate::error::ParseBigFloatError;
use crate::format::Decimal;

/// An arbitrary-precision binary floating-point number.
///
/// The value is `±mantissa * 2^exponent`, where a non-zero mantissa has
/// exactly `precision` significant bits. Decimal input is rounded to the
/// nearest representable value, ties to even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigFloat {
    negative: bool,
    mantissa: BigUint,
    exponent: i64,
    precision: u32,
}

impl BigFloat {
    /// Returns a positive zero with the given precision.
    pub fn zero(precision: u32) -> BigFloat {
        BigFloat {
            negative: false,
            mantissa: BigUint::zero(),
            exponent: 0,
            precision,
        }
    }

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`, rounding the value to
    /// `precision` bits of mantissa.
    pub fn parse(text: &str, precision: u32) -> Result<BigFloat, ParseBigFloatError> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(ParseBigFloatError::InvalidPrecision(precision));
        }
        let parts = DecimalParts::scan(text.as_bytes())?;

        let digits = if parts.digits.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(&parts.digits, 10).ok_or(ParseBigFloatError::InvalidSyntax)?
        };
        if digits.is_zero() {
            let mut zero = BigFloat::zero(precision);
            zero.negative = parts.negative;
            return Ok(zero);
        }
        let exp10 = match parts.exponent {
            Some(exp) if exp.unsigned_abs() <= MAX_DECIMAL_EXPONENT as u64 => {
                exp - parts.fraction_len as i64
            }
            _ => return Err(ParseBigFloatError::ExponentOutOfRange),
        };

        let (num, den) = if exp10 >= 0 {
            (digits * pow10(exp10 as u64), BigUint::one())
        } else {
            (digits, pow10(exp10.unsigned_abs()))
        };
        let (mantissa, exponent) = round_quotient(&num, &den, precision);
        Ok(BigFloat {
            negative: parts.negative,
            mantissa,
            exponent,
            precision,
        })
    }

    /// Mantissa bits the value was rounded to.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude of the mantissa; the value is `±mantissa * 2^exponent`.
    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Converts to the nearest `f64`, ties to even, saturating to an
    /// infinity when the magnitude is too large.
    pub fn to_f64(&self) -> f64 {
        let magnitude = if self.mantissa.is_zero() {
            0.0
        } else {
            let top = self.exponent + self.mantissa.bits() as i64 - 1;
            if top >= f64::MAX_EXP as i64 {
                f64::INFINITY
            } else {
                // weight of the last mantissa bit kept by the f64
                let lsb = (top - f64::MANTISSA_DIGITS as i64 + 1).max(F64_MIN_EXP2);
                let shift = lsb - self.exponent;
                let q = if shift <= 0 {
                    self.mantissa.clone()
                } else {
                    round_shr(&self.mantissa, shift as u64)
                };
                scale_pow2(q.to_f64().unwrap_or(f64::INFINITY), lsb.max(self.exponent))
            }
        };
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Shortest decimal digits that round back to this value at its precision.
    fn shortest_decimal(&self) -> Decimal {
        let mut d = Decimal::from_binary(&self.mantissa, self.exponent);
        d.round_shortest(&self.mantissa, self.exponent, self.precision);
        d
    }
}

impl FromStr for BigFloat {
    type Err = ParseBigFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigFloat::parse(s, DEFAULT_PRECISION)
    }
}

impl Display for BigFloat {
    /// Formats with the fewest digits that parse back to the same value,
    /// switching to `d.ddde±XX` for large and small magnitudes.
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        self.shortest_decimal().write_general(f, self.negative)
    }
}

struct DecimalParts {
    negative: bool,
    digits: Vec<u8>,
    fraction_len: usize,
    /// `None` when the exponent does not fit in an `i64`.
    exponent: Option<i64>,
}

impl DecimalParts {
    fn scan(buf: &[u8]) -> Result<DecimalParts, ParseBigFloatError> {
        let mut idx = 0;
        let mut negative = false;
        match buf.first() {
            Some(b'-') => {
                negative = true;
                idx += 1;
            }
            Some(b'+') => idx += 1,
            _ => {}
        }

        let mut digits = Vec::with_capacity(buf.len());
        let int_len = take_digits(&buf[idx..], &mut digits);
        idx += int_len;
        let mut fraction_len = 0;
        if buf.get(idx) == Some(&b'.') {
            idx += 1;
            fraction_len = take_digits(&buf[idx..], &mut digits);
            idx += fraction_len;
        }
        if int_len + fraction_len == 0 {
            return Err(ParseBigFloatError::InvalidSyntax);
        }

        let mut exponent = Some(0i64);
        if matches!(buf.get(idx), Some(b'e') | Some(b'E')) {
            idx += 1;
            let mut exp_negative = false;
            match buf.get(idx) {
                Some(b'-') => {
                    exp_negative = true;
                    idx += 1;
                }
                Some(b'+') => idx += 1,
                _ => {}
            }
            let start = idx;
            let mut value = Some(0i64);
            while let Some(c) = buf.get(idx).filter(|c| c.is_ascii_digit()) {
                let digit = (c - b'0') as i64;
                value = value
                    .and_then(|v| v.checked_mul(10))
                    .and_then(|v| v.checked_add(digit));
                idx += 1;
            }
            if idx == start {
                return Err(ParseBigFloatError::InvalidSyntax);
            }
            exponent = if exp_negative {
                value.map(|v| -v)
            } else {
                value
            };
        }
        if idx != buf.len() {
            return Err(ParseBigFloatError::InvalidSyntax);
        }

        // leading zeros carry no value
        let leading = digits.iter().take_while(|c| **c == b'0').count();
        digits.drain(..leading);

        Ok(DecimalParts {
            negative,
            digits,
            fraction_len,
            exponent,
        })
    }
}

#[inline]
fn take_digits(buf: &[u8], digits: &mut Vec<u8>) -> usize {
    let len = buf.iter().take_while(|c| c.is_ascii_digit()).count();
    digits.extend_from_slice(&buf[..len]);
    len
}

#[inline]
fn pow10(exp: u64) -> BigUint {
    BigUint::from(10u32).pow(exp as u32)
}

/// Exponent of the smallest subnormal `f64`.
const F64_MIN_EXP2: i64 = -1074;

/// Shifts `n` right by `shift` bits, rounding the dropped bits ties to even.
fn round_shr(n: &BigUint, shift: u64) -> BigUint {
    let mut q = n >> shift;
    let half = n.bit(shift - 1);
    let sticky = n.trailing_zeros().is_some_and(|tz| tz < shift - 1);
    if half && (sticky || q.bit(0)) {
        q += 1u32;
    }
    q
}

/// Computes `v * 2^exp` for an `exp` in `F64_MIN_EXP2..f64::MAX_EXP`, exact
/// whenever the result is representable.
fn scale_pow2(v: f64, exp: i64) -> f64 {
    let pow2 = |e: i64| f64::from_bits(((e + 1023) as u64) << 52);
    if exp < f64::MIN_EXP as i64 - 1 {
        v * pow2(-1022) * pow2(exp + 1022)
    } else {
        v * pow2(exp)
    }
}

/// Rounds `num / den` to `prec` significant bits, ties to even.
///
/// Returns `(mantissa, exponent)` with `num / den ≈ mantissa * 2^exponent`.
fn round_quotient(num: &BigUint, den: &BigUint, prec: u32) -> (BigUint, i64) {
    // num * 2^shift / den has either prec or prec + 1 bits.
    let shift = prec as i64 - (num.bits() as i64 - den.bits() as i64);
    let (a, b) = if shift >= 0 {
        (num << (shift as u64), den.clone())
    } else {
        (num.clone(), den << shift.unsigned_abs())
    };
    let mut q = &a / &b;
    let r = &a - &q * &b;
    let mut exponent = -shift;

    let round_up = if q.bits() > prec as u64 {
        let half = q.bit(0);
        q >>= 1u32;
        exponent += 1;
        half && (!r.is_zero() || q.bit(0))
    } else {
        match (r << 1u32).cmp(&b) {
            Ordering::Greater => true,
            Ordering::Equal => q.bit(0),
            Ordering::Less => false,
        }
    };
    if round_up {
        q += 1u32;
        if q.bits() > prec as u64 {
            q >>= 1u32;
            exponent += 1;
        }
    }
    (q, exponent)
}
