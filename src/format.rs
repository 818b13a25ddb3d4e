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

use std::fmt::Write;

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;

/// Exponent of the leading digit at or above which `'g'` switches to
/// scientific notation for shortest output.
const SCIENTIFIC_EXP: i64 = 6;
/// Exponent of the leading digit below which `'g'` switches to scientific
/// notation.
const SCIENTIFIC_MIN_EXP: i64 = -4;

/// Multi-precision decimal `0.d1d2d3... * 10^point`.
///
/// `digits` holds ASCII digits without trailing zeros; zero has no digits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Decimal {
    digits: Vec<u8>,
    point: i64,
}

impl Decimal {
    /// Exact decimal expansion of `mant * 2^exp`.
    pub(crate) fn from_binary(mant: &BigUint, exp: i64) -> Decimal {
        if mant.is_zero() {
            return Decimal::default();
        }
        let (n, frac_digits) = if exp >= 0 {
            (mant << (exp as u64), 0)
        } else {
            // m / 2^k == m * 5^k / 10^k
            let k = exp.unsigned_abs();
            (mant * BigUint::from(5u32).pow(k as u32), k as i64)
        };
        let digits = n.to_str_radix(10).into_bytes();
        let point = digits.len() as i64 - frac_digits;
        let mut d = Decimal { digits, point };
        d.trim();
        d
    }

    /// Builds a decimal from the significant digits of a plain or scientific
    /// decimal text, such as the output of `ryu`.
    pub(crate) fn from_shortest_text(text: &str) -> Decimal {
        let (mantissa, exp) = match text.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&text[..pos], text[pos + 1..].parse::<i64>().unwrap_or(0)),
            None => (text, 0),
        };
        let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let mut digits = Vec::with_capacity(int.len() + frac.len());
        digits.extend_from_slice(int.as_bytes());
        digits.extend_from_slice(frac.as_bytes());
        let mut point = int.len() as i64 + exp;

        let leading = digits.iter().take_while(|c| **c == b'0').count();
        digits.drain(..leading);
        point -= leading as i64;

        let mut d = Decimal { digits, point };
        d.trim();
        if d.digits.is_empty() {
            d.point = 0;
        }
        d
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn digits(&self) -> &str {
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn point(&self) -> i64 {
        self.point
    }

    fn at(&self, i: usize) -> u8 {
        self.digits.get(i).copied().unwrap_or(b'0')
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&b'0') {
            self.digits.pop();
        }
    }

    fn should_round_up(&self, n: usize) -> bool {
        if self.digits[n] == b'5' && n + 1 == self.digits.len() {
            // exactly halfway: round to even
            return n > 0 && (self.digits[n - 1] - b'0') & 1 != 0;
        }
        self.digits[n] >= b'5'
    }

    /// Rounds to `n` digits, half to even.
    fn round(&mut self, n: usize) {
        if n >= self.digits.len() {
            return;
        }
        if self.should_round_up(n) {
            self.round_up(n);
        } else {
            self.round_down(n);
        }
    }

    fn round_up(&mut self, n: usize) {
        if n >= self.digits.len() {
            return;
        }
        let mut i = n;
        while i > 0 && self.digits[i - 1] >= b'9' {
            i -= 1;
        }
        if i == 0 {
            // all nines
            self.digits.clear();
            self.digits.push(b'1');
            self.point += 1;
            return;
        }
        self.digits[i - 1] += 1;
        self.digits.truncate(i);
    }

    fn round_down(&mut self, n: usize) {
        if n >= self.digits.len() {
            return;
        }
        self.digits.truncate(n);
        self.trim();
    }

    /// Reduces the digits to the shortest sequence that still rounds to the
    /// binary value `mant * 2^exp` held with `prec` bits of mantissa. Among
    /// the shortest candidates the one nearest the value wins.
    ///
    /// `self` must be the exact expansion of that value.
    pub(crate) fn round_shortest(&mut self, mant: &BigUint, exp: i64, prec: u32) {
        if self.is_zero() {
            return;
        }
        // Rescale so the lsb of the mantissa is half an ulp at `prec` bits.
        let s = mant.bits() as i64 - (prec as i64 + 1);
        let half_ulp = if s < 0 {
            mant << s.unsigned_abs()
        } else {
            mant >> (s as u64)
        };
        let exp = exp + s;

        // A power-of-two mantissa has a predecessor only half an ulp away.
        let lower = if half_ulp == BigUint::one() << prec {
            Decimal::from_binary(&((&half_ulp << 1u32) - BigUint::one()), exp - 1)
        } else {
            Decimal::from_binary(&(&half_ulp - BigUint::one()), exp)
        };
        let upper = Decimal::from_binary(&(&half_ulp + BigUint::one()), exp);

        // The bounds round back to the value only for an even mantissa.
        let inclusive = !half_ulp.bit(1);

        // Walk the digit positions of `upper`, aligning `self` and `lower` by
        // their decimal points. `upper_delta` is 0 while the prefixes of
        // `self` and `upper` match, 1 while `upper` is only one unit above
        // the prefix of `self`, and 2 once rounding up stays below `upper`.
        let mut upper_delta = 0u8;
        let mut ui = 0i64;
        loop {
            let mi = ui - upper.point + self.point;
            if mi >= self.digits.len() as i64 {
                break;
            }
            let li = ui - upper.point + lower.point;
            let l = if li >= 0 { lower.at(li as usize) } else { b'0' };
            let m = if mi >= 0 { self.at(mi as usize) } else { b'0' };
            let u = upper.at(ui as usize);

            let okdown = l != m || inclusive && li + 1 == lower.digits.len() as i64;

            if upper_delta == 0 && m + 1 < u {
                upper_delta = 2;
            } else if upper_delta == 0 && m != u {
                upper_delta = 1;
            } else if upper_delta == 1 && (m != b'9' || u != b'0') {
                upper_delta = 2;
            }
            let okup = upper_delta > 0
                && (inclusive || upper_delta > 1 || ui + 1 < upper.digits.len() as i64);

            let n = (mi + 1).max(0) as usize;
            match (okdown, okup) {
                (true, true) => {
                    self.round(n);
                    return;
                }
                (true, false) => {
                    self.round_down(n);
                    return;
                }
                (false, true) => {
                    self.round_up(n);
                    return;
                }
                (false, false) => {}
            }
            ui += 1;
        }
    }

    /// Writes the shortest `'g'` form: `d.ddde±XX` when the leading digit's
    /// exponent is below -4 or at least 6, plain decimal otherwise.
    pub(crate) fn write_general<W: Write>(&self, w: &mut W, negative: bool) -> std::fmt::Result {
        if negative {
            w.write_char('-')?;
        }
        let exp = self.point - 1;
        if !self.is_zero() && (exp < SCIENTIFIC_MIN_EXP || exp >= SCIENTIFIC_EXP) {
            self.write_exponent(w)
        } else {
            let prec = (self.digits.len() as i64 - self.point).max(0);
            self.write_fixed(w, prec as usize)
        }
    }

    fn write_exponent<W: Write>(&self, w: &mut W) -> std::fmt::Result {
        w.write_char(self.at(0) as char)?;
        if self.digits.len() > 1 {
            w.write_char('.')?;
            for c in &self.digits[1..] {
                w.write_char(*c as char)?;
            }
        }
        let exp = self.point - 1;
        let sign = if exp < 0 { '-' } else { '+' };
        write!(w, "e{}{:02}", sign, exp.unsigned_abs())
    }

    fn write_fixed<W: Write>(&self, w: &mut W, prec: usize) -> std::fmt::Result {
        if self.point > 0 {
            let int_len = self.point as usize;
            for i in 0..int_len {
                w.write_char(self.at(i) as char)?;
            }
        } else {
            w.write_char('0')?;
        }
        if prec > 0 {
            w.write_char('.')?;
            for i in 0..prec as i64 {
                let pos = self.point + i;
                let c = if pos < 0 { b'0' } else { self.at(pos as usize) };
                w.write_char(c as char)?;
            }
        }
        Ok(())
    }
}

/// Formats an `f64` with the fewest digits that parse back to it, using the
/// same `'g'` layout as [`BigFloat`](crate::BigFloat).
pub(crate) fn write_f64<W: Write>(w: &mut W, v: f64) -> std::fmt::Result {
    if !v.is_finite() {
        let mut buffer = ryu::Buffer::new();
        return w.write_str(buffer.format(v));
    }
    let mut buffer = ryu::Buffer::new();
    let s = buffer.format_finite(v.abs());
    let d = Decimal::from_shortest_text(s);
    d.write_general(w, v.is_sign_negative())
}
