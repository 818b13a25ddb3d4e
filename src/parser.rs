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

use super::constants::*;
use super::error::Error;
use super::error::Result;
use super::grammar::NumberToken;
use super::util::parse_string_literal;

/// A classified scalar token, before numbers are converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    String(String),
    Number(NumberToken<'a>),
}

/// Classifies one already-delimited JSON scalar token.
///
/// Both decoders share this step; they differ only in how they convert a
/// [`Scalar::Number`]. The token must not carry surrounding whitespace.
///
/// - `null`, `true`, `false` are literals.
/// - `{...}` and `[...]` are objects and arrays, which return
///   [`Error::NotImplemented`] whatever their content.
/// - `"..."` is a string literal with its escapes resolved.
/// - Anything matching the number grammar is a number.
/// - Everything else is [`Error::InvalidJson`].
pub fn parse_scalar(text: &str) -> Result<Scalar<'_>> {
    match text {
        LIT_NULL => return Ok(Scalar::Null),
        LIT_TRUE => return Ok(Scalar::Bool(true)),
        LIT_FALSE => return Ok(Scalar::Bool(false)),
        _ => {}
    }
    if is_wrapped(text, '{', '}') || is_wrapped(text, '[', ']') {
        return Err(Error::NotImplemented);
    }
    if is_wrapped(text, '"', '"') {
        return parse_string_literal(text).map(Scalar::String);
    }
    match NumberToken::parse(text) {
        Some(token) => Ok(Scalar::Number(token)),
        None => Err(Error::InvalidJson),
    }
}

#[inline]
fn is_wrapped(text: &str, open: char, close: char) -> bool {
    text.starts_with(open) && text.ends_with(close)
}

/// Emits a trace event for a rejected token when the `tracing` feature is on.
#[inline]
pub(crate) fn trace_rejected(decoder: &'static str, text: &str, err: &Error) {
    #[cfg(feature = "tracing")]
    tracing::trace!(decoder, token = text, error = %err, "rejected JSON scalar token");
    #[cfg(not(feature = "tracing"))]
    let _ = (decoder, text, err);
}
