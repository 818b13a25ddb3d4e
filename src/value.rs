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

use crate::error::Error;
use crate::error::Result;
use crate::kind::Kind;

/// A decoded JSON scalar that records which [`Kind`] of payload it holds.
///
/// Implemented by [`PreciseValue`](crate::PreciseValue) and
/// [`FastValue`](crate::FastValue). A value is either unset ([`Kind::Nil`])
/// or holds exactly one payload; decoding replaces whatever it held before.
pub trait ScalarValue {
    /// Decodes one JSON scalar token into `self`.
    ///
    /// On error the previous payload is left in place, but callers should
    /// not rely on its contents.
    fn decode(&mut self, text: &str) -> Result<&mut Self>;

    /// Returns the kind of payload currently held.
    fn kind(&self) -> Kind;

    /// Decodes the raw bytes of one JSON scalar value.
    fn decode_slice(&mut self, buf: &[u8]) -> Result<&mut Self> {
        let text = std::str::from_utf8(buf).map_err(|_| Error::InvalidJson)?;
        self.decode(text)
    }

    fn is_kind(&self, kind: Kind) -> bool {
        self.kind() == kind
    }

    fn is_nil(&self) -> bool {
        self.is_kind(Kind::Nil)
    }

    fn is_bool(&self) -> bool {
        self.is_kind(Kind::Bool)
    }

    fn is_string(&self) -> bool {
        self.is_kind(Kind::String)
    }
}

/// Panics for an accessor called on a value of another kind.
#[cold]
#[track_caller]
pub(crate) fn kind_mismatch(expected: Kind, actual: Kind) -> ! {
    panic!("called {} accessor on a {} value", expected, actual)
}
