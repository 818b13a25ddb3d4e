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

use std::fmt::Display;
use std::fmt::Formatter;
use std::num::ParseIntError;

use num_bigint::ParseBigIntError;
use serde::de;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorCode {
    InvalidEOF,
    InvalidEscaped(u8),
    InvalidHex(u8),
    ControlCharacterWhileParsingString,
    UnexpectedEndOfHexEscape,
    UnexpectedTrailingCharacters,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match *self {
            ParseErrorCode::InvalidEOF => f.write_str("EOF while parsing a value"),
            ParseErrorCode::InvalidEscaped(n) => {
                write!(f, "invalid escaped '{:X}'", n)
            }
            ParseErrorCode::InvalidHex(n) => write!(f, "invalid hex '{:X}'", n),
            ParseErrorCode::ControlCharacterWhileParsingString => {
                f.write_str("control character (\\u0000-\\u001F) found while parsing a string")
            }
            ParseErrorCode::UnexpectedEndOfHexEscape => f.write_str("unexpected end of hex escape"),
            ParseErrorCode::UnexpectedTrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

/// Reasons a decimal text cannot become a [`BigFloat`](crate::BigFloat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBigFloatError {
    /// The text is not `[+-]digits[.digits][(e|E)[+-]digits]`.
    InvalidSyntax,
    /// The decimal exponent is too large to evaluate.
    ExponentOutOfRange,
    /// The requested mantissa width is zero or too large.
    InvalidPrecision(u32),
}

impl Display for ParseBigFloatError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ParseBigFloatError::InvalidSyntax => f.write_str("invalid decimal number syntax"),
            ParseBigFloatError::ExponentOutOfRange => f.write_str("decimal exponent out of range"),
            ParseBigFloatError::InvalidPrecision(prec) => {
                write!(f, "invalid mantissa precision {}", prec)
            }
        }
    }
}

impl std::error::Error for ParseBigFloatError {}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when decoding a scalar token.
///
/// Calling a typed accessor on a value of another kind is a programming
/// error and panics instead of producing one of these.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token is not `null`, a boolean, a string or a JSON number.
    InvalidJson,
    /// The token is an object or an array.
    NotImplemented,
    /// Malformed string literal, with the byte position of the failure.
    Syntax(ParseErrorCode, usize),
    /// Numeric value with no matching [`Kind`](crate::Kind).
    InvalidKind(u8),

    BigInt(ParseBigIntError),
    BigFloat(ParseBigFloatError),
    /// Native integer parse failure, surfaced as returned by the parser.
    Int(ParseIntError),
    /// The number overflows `f64` to an infinity.
    FloatOutOfRange,
    InvalidFloat,

    Message(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidJson => f.write_str("invalid JSON"),
            Error::NotImplemented => f.write_str("not implemented"),
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
            Error::InvalidKind(n) => write!(f, "invalid kind {}", n),
            Error::BigInt(err) => write!(f, "invalid big integer: {}", err),
            Error::BigFloat(err) => write!(f, "invalid big float: {}", err),
            Error::Int(err) => Display::fmt(err, f),
            Error::FloatOutOfRange => f.write_str("value out of range"),
            Error::InvalidFloat => f.write_str("invalid float literal"),
            Error::Message(m) => f.write_str(m),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::BigInt(err) => Some(err),
            Error::BigFloat(err) => Some(err),
            Error::Int(err) => Some(err),
            _ => None,
        }
    }
}

impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<ParseBigIntError> for Error {
    fn from(err: ParseBigIntError) -> Self {
        Error::BigInt(err)
    }
}

impl From<ParseBigFloatError> for Error {
    fn from(err: ParseBigFloatError) -> Self {
        Error::BigFloat(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Self {
        Error::Int(err)
    }
}
