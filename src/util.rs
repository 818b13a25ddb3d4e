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
use super::error::ParseErrorCode;

#[allow(clippy::zero_prefixed_literal)]
static HEX: [u8; 256] = {
    const __: u8 = 255; // not a hex digit
    [
        //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 0
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 1
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
        00, 01, 02, 03, 04, 05, 06, 07, 08, 09, __, __, __, __, __, __, // 3
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 4
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 5
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 6
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
    ]
};

/// Decodes a complete JSON string literal, surrounding quotes included.
///
/// Escape sequences are resolved; an unpaired UTF-16 surrogate in a `\u`
/// escape decodes to U+FFFD. Error positions are byte offsets into `token`.
pub fn parse_string_literal(token: &str) -> Result<String, Error> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'"' {
        return Err(Error::Syntax(ParseErrorCode::InvalidEOF, bytes.len()));
    }
    let data = &bytes[1..bytes.len() - 1];
    if bytes[bytes.len() - 1] != b'"' {
        return Err(Error::Syntax(ParseErrorCode::InvalidEOF, bytes.len()));
    }

    // Fast path: nothing to unescape
    if !data.iter().any(|b| *b == b'\\' || *b == b'"' || *b < 0x20) {
        return Ok(token[1..token.len() - 1].to_string());
    }

    let mut idx = 1;
    parse_string(data, data.len(), &mut idx)
}

/// Unescapes the content of a string literal. `idx` is advanced past every
/// consumed byte.
pub fn parse_string(mut data: &[u8], len: usize, idx: &mut usize) -> Result<String, Error> {
    let mut buf = Vec::with_capacity(len);
    let mut str_buf = String::with_capacity(4);
    while !data.is_empty() {
        let byte = data[0];
        match byte {
            b'\\' => {
                *idx += 1;
                data = &data[1..];
                data = parse_escaped_string(data, idx, &mut str_buf)?;
                buf.extend_from_slice(str_buf.as_bytes());
                str_buf.clear();
            }
            b'"' => {
                return Err(Error::Syntax(
                    ParseErrorCode::UnexpectedTrailingCharacters,
                    *idx,
                ));
            }
            0x00..=0x1F => {
                return Err(Error::Syntax(
                    ParseErrorCode::ControlCharacterWhileParsingString,
                    *idx,
                ));
            }
            _ => {
                *idx += 1;
                buf.push(byte);
                data = &data[1..];
            }
        }
    }
    // Input came from a &str and escapes push whole chars, so the buffer is
    // always valid UTF-8.
    String::from_utf8(buf).map_err(|_| Error::Syntax(ParseErrorCode::InvalidEOF, *idx))
}

fn parse_escaped_string<'a>(
    mut data: &'a [u8],
    idx: &mut usize,
    str_buf: &mut String,
) -> Result<&'a [u8], Error> {
    if data.is_empty() {
        return Err(Error::Syntax(ParseErrorCode::InvalidEOF, *idx));
    }

    let byte = data[0];
    *idx += 1;
    data = &data[1..];
    match byte {
        b'\\' => str_buf.push(BS),
        b'"' => str_buf.push(QU),
        b'/' => str_buf.push(SD),
        b'b' => str_buf.push(BB),
        b'f' => str_buf.push(FF),
        b'n' => str_buf.push(NN),
        b'r' => str_buf.push(RR),
        b't' => str_buf.push(TT),
        b'u' => {
            let n1;
            (data, n1) = parse_unicode_escape(data, idx)?;

            let c = match n1 {
                // Non-BMP characters are encoded as a sequence of two hex
                // escapes, representing UTF-16 surrogates.
                0xD800..=0xDBFF if data.starts_with(b"\\u") => {
                    let rest = &data[2..];
                    let mut next_idx = *idx + 2;
                    let (rest, n2) = parse_unicode_escape(rest, &mut next_idx)?;
                    if (0xDC00..=0xDFFF).contains(&n2) {
                        data = rest;
                        *idx = next_idx;
                        #[allow(clippy::precedence)]
                        let n = (((n1 - 0xD800) as u32) << 10 | (n2 - 0xDC00) as u32) + 0x1_0000;
                        char::from_u32(n).unwrap_or(char::REPLACEMENT_CHARACTER)
                    } else {
                        // leave the second escape to be decoded on its own
                        char::REPLACEMENT_CHARACTER
                    }
                }
                n => char::from_u32(n as u32).unwrap_or(char::REPLACEMENT_CHARACTER),
            };
            str_buf.push(c);
        }
        other => return Err(Error::Syntax(ParseErrorCode::InvalidEscaped(other), *idx)),
    }
    Ok(data)
}

/// Reads the four hex digits of a `\uXXXX` escape.
#[inline]
fn parse_unicode_escape<'a>(data: &'a [u8], idx: &mut usize) -> Result<(&'a [u8], u16), Error> {
    if data.len() < UNICODE_LEN {
        return Err(Error::Syntax(
            ParseErrorCode::UnexpectedEndOfHexEscape,
            *idx,
        ));
    }
    let n = decode_hex_escape(&data[..UNICODE_LEN], idx)?;
    *idx += UNICODE_LEN;
    Ok((&data[UNICODE_LEN..], n))
}

#[inline]
fn decode_hex_val(val: u8) -> Option<u16> {
    let n = HEX[val as usize] as u16;
    if n == 255 {
        None
    } else {
        Some(n)
    }
}

#[inline]
fn decode_hex_escape(numbers: &[u8], idx: &usize) -> Result<u16, Error> {
    let mut n = 0;
    for number in numbers {
        if let Some(hex) = decode_hex_val(*number) {
            n = (n << 4) + hex;
        } else {
            return Err(Error::Syntax(ParseErrorCode::InvalidHex(*number), *idx));
        }
    }
    Ok(n)
}
