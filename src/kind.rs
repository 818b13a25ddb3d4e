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
use std::str::FromStr;

use crate::error::Error;

static KIND_NAMES: [&str; 8] = [
    "Nil", "Bool", "String", "Int64", "Uint64", "Float64", "BigInt", "BigFloat",
];

/// The category of payload held by a decoded scalar value.
///
/// `Kind` is shared by [`PreciseValue`](crate::PreciseValue), which only
/// produces `Nil`, `Bool`, `String`, `BigInt` and `BigFloat`, and
/// [`FastValue`](crate::FastValue), which only produces `Nil`, `Bool`,
/// `String`, `Int64`, `Uint64` and `Float64`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Kind {
    #[default]
    Nil = 0,
    Bool,
    String,
    Int64,
    Uint64,
    Float64,
    BigInt,
    BigFloat,
}

impl Kind {
    /// Every kind, in discriminant order.
    pub const ALL: [Kind; 8] = [
        Kind::Nil,
        Kind::Bool,
        Kind::String,
        Kind::Int64,
        Kind::Uint64,
        Kind::Float64,
        Kind::BigInt,
        Kind::BigFloat,
    ];

    pub fn iter() -> impl Iterator<Item = Kind> {
        Self::ALL.into_iter()
    }

    /// Returns the constant name of the kind, e.g. `"BigFloat"`.
    pub fn name(self) -> &'static str {
        KIND_NAMES[self as usize]
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(n as usize)
            .copied()
            .ok_or(Error::InvalidKind(n))
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::Message(format!("unknown kind {:?}", s)))
    }
}
