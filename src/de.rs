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

//! Hooks for decoding scalar values inside documents read by `serde_json`.
//!
//! `serde_json` hands each value over as its raw JSON text, which then goes
//! through the same scalar decoder as a standalone token. Nested objects and
//! arrays are rejected with [`Error::NotImplemented`](crate::Error).

use serde::de;
use serde::de::Deserialize;
use serde::de::Deserializer;
use serde_json::value::RawValue;

use crate::error::Result;
use crate::fast::FastValue;
use crate::precise::PreciseValue;
use crate::value::ScalarValue;

/// Decodes the raw bytes of a single JSON scalar value.
pub fn from_slice<T>(buf: &[u8]) -> Result<T>
where
    T: ScalarValue + Default,
{
    let mut value = T::default();
    value.decode_slice(buf)?;
    Ok(value)
}

fn deserialize_raw<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ScalarValue + Default,
{
    let raw = <Box<RawValue>>::deserialize(deserializer)?;
    let mut value = T::default();
    value.decode(raw.get()).map_err(de::Error::custom)?;
    Ok(value)
}

impl<'de> Deserialize<'de> for PreciseValue {
    /// Only supported by `serde_json`, which can expose the raw value text.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_raw(deserializer)
    }
}

impl<'de> Deserialize<'de> for FastValue {
    /// Only supported by `serde_json`, which can expose the raw value text.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_raw(deserializer)
    }
}
