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

use std::any::Any;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::bigfloat::BigFloat;
use crate::constants::DEFAULT_PRECISION;
use crate::constants::NIL_TEXT;
use crate::error::Error;
use crate::error::Result;
use crate::grammar::NumberToken;
use crate::kind::Kind;
use crate::parser::parse_scalar;
use crate::parser::trace_rejected;
use crate::parser::Scalar;
use crate::value::kind_mismatch;
use crate::value::ScalarValue;

/// A JSON scalar decoded without losing numeric precision.
///
/// Integers become a [`BigInt`] of unbounded magnitude, and numbers with a
/// fraction or an exponent become a [`BigFloat`] with a 128-bit mantissa.
/// Use [`FastValue`](crate::FastValue) when native-width numbers are enough.
///
/// A non-zero float token whose decimal exponent exceeds
/// [`MAX_DECIMAL_EXPONENT`](crate::MAX_DECIMAL_EXPONENT) in magnitude fails
/// with [`ParseBigFloatError::ExponentOutOfRange`](crate::ParseBigFloatError).
///
/// ```
/// use jsonscalar::{Kind, PreciseValue, ScalarValue};
///
/// let mut value = PreciseValue::default();
/// value.decode("18446744073709551616").unwrap();
/// assert_eq!(value.kind(), Kind::BigInt);
/// assert_eq!(value.to_string(), "18446744073709551616");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreciseValue {
    #[default]
    Nil,
    Bool(bool),
    String(String),
    BigInt(BigInt),
    BigFloat(BigFloat),
}

impl PreciseValue {
    /// Decodes a token into a fresh value.
    pub fn from_token(text: &str) -> Result<PreciseValue> {
        let mut value = PreciseValue::default();
        value.decode(text)?;
        Ok(value)
    }

    pub fn is_big_int(&self) -> bool {
        self.is_kind(Kind::BigInt)
    }

    pub fn is_big_float(&self) -> bool {
        self.is_kind(Kind::BigFloat)
    }

    /// Returns the payload as an untyped reference, or `None` for nil.
    pub fn value(&self) -> Option<&dyn Any> {
        match self {
            PreciseValue::Nil => None,
            PreciseValue::Bool(v) => Some(v),
            PreciseValue::String(v) => Some(v),
            PreciseValue::BigInt(v) => Some(v),
            PreciseValue::BigFloat(v) => Some(v),
        }
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::Bool`].
    #[track_caller]
    pub fn bool(&self) -> bool {
        match self {
            PreciseValue::Bool(v) => *v,
            _ => kind_mismatch(Kind::Bool, self.kind()),
        }
    }

    /// Returns the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::String`].
    #[track_caller]
    pub fn str(&self) -> &str {
        match self {
            PreciseValue::String(v) => v,
            _ => kind_mismatch(Kind::String, self.kind()),
        }
    }

    /// Returns the integer payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::BigInt`].
    #[track_caller]
    pub fn big_int(&self) -> &BigInt {
        match self {
            PreciseValue::BigInt(v) => v,
            _ => kind_mismatch(Kind::BigInt, self.kind()),
        }
    }

    /// Returns the float payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::BigFloat`].
    #[track_caller]
    pub fn big_float(&self) -> &BigFloat {
        match self {
            PreciseValue::BigFloat(v) => v,
            _ => kind_mismatch(Kind::BigFloat, self.kind()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PreciseValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PreciseValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_big_int(&self) -> Option<&BigInt> {
        match self {
            PreciseValue::BigInt(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_big_float(&self) -> Option<&BigFloat> {
        match self {
            PreciseValue::BigFloat(v) => Some(v),
            _ => None,
        }
    }

    fn decode_number(token: NumberToken<'_>) -> Result<PreciseValue> {
        if token.is_float() {
            let v = BigFloat::parse(token.as_str(), DEFAULT_PRECISION)?;
            Ok(PreciseValue::BigFloat(v))
        } else if token.has_leading_zero() {
            Err(Error::InvalidJson)
        } else {
            let v = BigInt::from_str(token.as_str())?;
            Ok(PreciseValue::BigInt(v))
        }
    }
}

impl ScalarValue for PreciseValue {
    fn decode(&mut self, text: &str) -> Result<&mut Self> {
        let decoded = parse_scalar(text).and_then(|scalar| match scalar {
            Scalar::Null => Ok(PreciseValue::Nil),
            Scalar::Bool(v) => Ok(PreciseValue::Bool(v)),
            Scalar::String(v) => Ok(PreciseValue::String(v)),
            Scalar::Number(token) => Self::decode_number(token),
        });
        match decoded {
            Ok(value) => {
                *self = value;
                Ok(self)
            }
            Err(err) => {
                trace_rejected("precise", text, &err);
                Err(err)
            }
        }
    }

    fn kind(&self) -> Kind {
        match self {
            PreciseValue::Nil => Kind::Nil,
            PreciseValue::Bool(_) => Kind::Bool,
            PreciseValue::String(_) => Kind::String,
            PreciseValue::BigInt(_) => Kind::BigInt,
            PreciseValue::BigFloat(_) => Kind::BigFloat,
        }
    }
}

impl FromStr for PreciseValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PreciseValue::from_token(s)
    }
}

impl Display for PreciseValue {
    /// Bool renders as `true`/`false`, String as its unquoted content,
    /// numbers with every significant digit and nil as `nil`.
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            PreciseValue::Nil => f.write_str(NIL_TEXT),
            PreciseValue::Bool(v) => write!(f, "{}", v),
            PreciseValue::String(v) => f.write_str(v),
            PreciseValue::BigInt(v) => write!(f, "{}", v),
            PreciseValue::BigFloat(v) => write!(f, "{}", v),
        }
    }
}
