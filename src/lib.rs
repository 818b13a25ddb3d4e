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

//! `jsonscalar` decodes single JSON scalar tokens (`null`, booleans, strings and
//! numbers) without the precision loss of mapping every number onto `f64`.
//!
//! ## Decoders
//!
//! - [`PreciseValue`] keeps integers exact as a [`num_bigint::BigInt`] of any
//!   size, and numbers with a fraction or an exponent as a [`BigFloat`] with a
//!   128-bit mantissa.
//! - [`FastValue`] uses native `u64`, `i64` and `f64`, and reports a range
//!   error when a number does not fit.
//!
//! Both implement [`ScalarValue`], and both report their payload through the
//! shared [`Kind`] enum.
//!
//! ## Token classification
//!
//! | Token                       | `PreciseValue` | `FastValue`            |
//! |-----------------------------|----------------|------------------------|
//! | `null`                      | `Nil`          | `Nil`                  |
//! | `true`, `false`             | `Bool`         | `Bool`                 |
//! | `"..."`                     | `String`       | `String`               |
//! | number with `.`, `e` or `E` | `BigFloat`     | `Float64`              |
//! | negative integer            | `BigInt`       | `Int64`                |
//! | non-negative integer        | `BigInt`       | `Uint64`               |
//! | `{...}`, `[...]`            | not implemented| not implemented        |
//!
//! Numbers follow the grammar `-?\d+(\.\d+)?([eE][-+]?\d+)?`, and integers
//! with a redundant leading zero such as `0123` are invalid.
//!
//! `PreciseValue` rejects a non-zero number whose decimal exponent exceeds
//! [`MAX_DECIMAL_EXPONENT`] in magnitude, such as `1e100001`, with
//! [`ParseBigFloatError::ExponentOutOfRange`].
//!
//! ## Logging
//!
//! Decoding does not log by default. With the `tracing` cargo feature, every
//! rejected token emits a `TRACE` event carrying the decoder name, the token
//! and the error.
//!
//! ## Example
//!
//! ```
//! use jsonscalar::{FastValue, Kind, PreciseValue, ScalarValue};
//!
//! let token = "987654321987654321.987654321987654321";
//!
//! let precise = PreciseValue::from_token(token).unwrap();
//! assert_eq!(precise.kind(), Kind::BigFloat);
//! assert_eq!(precise.to_string(), "9.87654321987654321987654321987654321e+17");
//!
//! let fast = FastValue::from_token(token).unwrap();
//! assert_eq!(fast.kind(), Kind::Float64);
//! assert_eq!(fast.to_string(), "9.876543219876543e+17");
//! ```
//!
//! Both value types also implement `serde::Deserialize` on top of
//! `serde_json`, so they can be used as fields of larger documents:
//!
//! ```
//! use jsonscalar::{Kind, PreciseValue, ScalarValue};
//!
//! let values: Vec<PreciseValue> =
//!     serde_json::from_str("[null, 18446744073709551616, 3.14]").unwrap();
//! assert_eq!(values[1].kind(), Kind::BigInt);
//! ```

#![allow(clippy::uninlined_format_args)]

mod bigfloat;
mod constants;
mod de;
mod error;
mod fast;
mod format;
mod grammar;
mod kind;
mod parser;
mod precise;
mod util;
mod value;

pub use bigfloat::BigFloat;
pub use constants::DEFAULT_PRECISION;
pub use constants::MAX_DECIMAL_EXPONENT;
pub use constants::MAX_PRECISION;
pub use de::from_slice;
pub use error::Error;
pub use error::ParseBigFloatError;
pub use error::ParseErrorCode;
pub use error::Result;
pub use fast::FastValue;
pub use grammar::is_json_number;
pub use grammar::NumberToken;
pub use kind::Kind;
pub use num_bigint::BigInt;
pub use parser::parse_scalar;
pub use parser::Scalar;
pub use precise::PreciseValue;
pub use value::ScalarValue;
