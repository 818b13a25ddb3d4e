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

//! Number-token grammar, following <https://json.org>:
//!
//! ```text
//! -?\d+(\.\d+)?([eE][-+]?\d+)?
//! ```
//!
//! The combinators hold no state, so the matcher can be shared freely
//! between threads.

use nom::character::complete::char;
use nom::character::complete::digit1;
use nom::character::complete::one_of;
use nom::combinator::all_consuming;
use nom::combinator::opt;
use nom::combinator::recognize;
use nom::sequence::preceded;
use nom::IResult;
use nom::Parser;

/// A token that matched the number grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberToken<'a> {
    text: &'a str,
    int_digits: &'a str,
    is_float: bool,
}

impl<'a> NumberToken<'a> {
    /// Matches `text` against the number grammar.
    pub fn parse(text: &'a str) -> Option<NumberToken<'a>> {
        match all_consuming(number).parse(text) {
            Ok((_, (int_digits, fraction, exponent))) => Some(NumberToken {
                text,
                int_digits,
                is_float: fraction.is_some() || exponent.is_some(),
            }),
            Err(_) => None,
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Whether the token has a fraction or an exponent.
    pub fn is_float(&self) -> bool {
        self.is_float
    }

    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    /// Whether the integer digits carry a redundant leading zero, like `0123`.
    /// A lone `0` is a valid JSON integer.
    pub fn has_leading_zero(&self) -> bool {
        self.int_digits.len() > 1 && self.int_digits.starts_with('0')
    }
}

/// Returns `true` if `text` is a JSON number literal.
pub fn is_json_number(text: &str) -> bool {
    NumberToken::parse(text).is_some()
}

type NumberParts<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

fn number(input: &str) -> IResult<&str, NumberParts<'_>> {
    preceded(opt(char('-')), (digit1, opt(fraction), opt(exponent))).parse(input)
}

fn fraction(input: &str) -> IResult<&str, &str> {
    preceded(char('.'), digit1).parse(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize((one_of("eE"), opt(one_of("+-")), digit1)).parse(input)
}
