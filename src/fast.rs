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

use crate::constants::NIL_TEXT;
use crate::error::Error;
use crate::error::Result;
use crate::format::write_f64;
use crate::grammar::NumberToken;
use crate::kind::Kind;
use crate::parser::parse_scalar;
use crate::parser::trace_rejected;
use crate::parser::Scalar;
use crate::value::kind_mismatch;
use crate::value::ScalarValue;

/// A JSON scalar decoded into native 64-bit numbers.
///
/// Negative integers become `i64`, non-negative integers `u64`, and numbers
/// with a fraction or an exponent `f64`. Integers that do not fit return the
/// native [`ParseIntError`](std::num::ParseIntError) as [`Error::Int`].
///
/// ```
/// use jsonscalar::{FastValue, Kind, ScalarValue};
///
/// let mut value = FastValue::default();
/// value.decode("-9223372036854775808").unwrap();
/// assert_eq!(value.kind(), Kind::Int64);
/// assert_eq!(value.int64(), i64::MIN);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FastValue {
    #[default]
    Nil,
    Bool(bool),
    String(String),
    Int64(i64),
    Uint64(u64),
    Float64(f64),
}

impl FastValue {
    /// Decodes a token into a fresh value.
    pub fn from_token(text: &str) -> Result<FastValue> {
        let mut value = FastValue::default();
        value.decode(text)?;
        Ok(value)
    }

    pub fn is_int64(&self) -> bool {
        self.is_kind(Kind::Int64)
    }

    pub fn is_uint64(&self) -> bool {
        self.is_kind(Kind::Uint64)
    }

    pub fn is_float64(&self) -> bool {
        self.is_kind(Kind::Float64)
    }

    /// Returns the payload as an untyped reference, or `None` for nil.
    pub fn value(&self) -> Option<&dyn Any> {
        match self {
            FastValue::Nil => None,
            FastValue::Bool(v) => Some(v),
            FastValue::String(v) => Some(v),
            FastValue::Int64(v) => Some(v),
            FastValue::Uint64(v) => Some(v),
            FastValue::Float64(v) => Some(v),
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
            FastValue::Bool(v) => *v,
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
            FastValue::String(v) => v,
            _ => kind_mismatch(Kind::String, self.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::Int64`].
    #[track_caller]
    pub fn int64(&self) -> i64 {
        match self {
            FastValue::Int64(v) => *v,
            _ => kind_mismatch(Kind::Int64, self.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::Uint64`].
    #[track_caller]
    pub fn uint64(&self) -> u64 {
        match self {
            FastValue::Uint64(v) => *v,
            _ => kind_mismatch(Kind::Uint64, self.kind()),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is not a [`Kind::Float64`].
    #[track_caller]
    pub fn float64(&self) -> f64 {
        match self {
            FastValue::Float64(v) => *v,
            _ => kind_mismatch(Kind::Float64, self.kind()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FastValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FastValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FastValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FastValue::Uint64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FastValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    fn decode_number(token: NumberToken<'_>) -> Result<FastValue> {
        let text = token.as_str();
        if token.is_float() {
            let v: f64 = fast_float2::parse(text).map_err(|_| Error::InvalidFloat)?;
            if v.is_infinite() {
                return Err(Error::FloatOutOfRange);
            }
            Ok(FastValue::Float64(v))
        } else if token.has_leading_zero() {
            Err(Error::InvalidJson)
        } else if token.is_negative() {
            Ok(FastValue::Int64(text.parse::<i64>()?))
        } else {
            Ok(FastValue::Uint64(text.parse::<u64>()?))
        }
    }
}

impl ScalarValue for FastValue {
    fn decode(&mut self, text: &str) -> Result<&mut Self> {
        let decoded = parse_scalar(text).and_then(|scalar| match scalar {
            Scalar::Null => Ok(FastValue::Nil),
            Scalar::Bool(v) => Ok(FastValue::Bool(v)),
            Scalar::String(v) => Ok(FastValue::String(v)),
            Scalar::Number(token) => Self::decode_number(token),
        });
        match decoded {
            Ok(value) => {
                *self = value;
                Ok(self)
            }
            Err(err) => {
                trace_rejected("fast", text, &err);
                Err(err)
            }
        }
    }

    fn kind(&self) -> Kind {
        match self {
            FastValue::Nil => Kind::Nil,
            FastValue::Bool(_) => Kind::Bool,
            FastValue::String(_) => Kind::String,
            FastValue::Int64(_) => Kind::Int64,
            FastValue::Uint64(_) => Kind::Uint64,
            FastValue::Float64(_) => Kind::Float64,
        }
    }
}

impl FromStr for FastValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FastValue::from_token(s)
    }
}

impl Display for FastValue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            FastValue::Nil => f.write_str(NIL_TEXT),
            FastValue::Bool(v) => write!(f, "{}", v),
            FastValue::String(v) => f.write_str(v),
            FastValue::Int64(v) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            FastValue::Uint64(v) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            FastValue::Float64(v) => write_f64(f, *v),
        }
    }
}
