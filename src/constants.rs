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

// JSON text constants
pub(crate) const UNICODE_LEN: usize = 4;

// JSON text escape characters constants
pub(crate) const BS: char = '\x5C'; // \\ Backslash
pub(crate) const QU: char = '\x22'; // \" Double quotation mark
pub(crate) const SD: char = '\x2F'; // \/ Slash or divide
pub(crate) const BB: char = '\x08'; // \b Backspace
pub(crate) const FF: char = '\x0C'; // \f Formfeed Page Break
pub(crate) const NN: char = '\x0A'; // \n Newline
pub(crate) const RR: char = '\x0D'; // \r Carriage Return
pub(crate) const TT: char = '\x09'; // \t Horizontal Tab

// JSON scalar literals
pub(crate) const LIT_NULL: &str = "null";
pub(crate) const LIT_TRUE: &str = "true";
pub(crate) const LIT_FALSE: &str = "false";

/// Rendering of a value that holds nothing.
pub(crate) const NIL_TEXT: &str = "nil";

/// Mantissa bits used by the precise decoder for fractional and exponent numbers.
pub const DEFAULT_PRECISION: u32 = 128;

/// Largest mantissa width accepted by [`BigFloat::parse`](crate::BigFloat::parse).
pub const MAX_PRECISION: u32 = 1 << 16;

/// Largest decimal exponent magnitude accepted for a non-zero [`BigFloat`](crate::BigFloat).
pub const MAX_DECIMAL_EXPONENT: i64 = 100_000;
