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

use std::num::IntErrorKind;

use jsonscalar::{
    BigInt, Error, FastValue, Kind, ParseBigFloatError, PreciseValue, ScalarValue,
};

type Expect = Result<(Kind, Option<&'static str>), Error>;

struct TestCase {
    token: &'static str,
    precise: Expect,
    fast: Expect,
}

fn ok(kind: Kind, rendered: &'static str) -> Expect {
    Ok((kind, Some(rendered)))
}

fn kind_only(kind: Kind) -> Expect {
    Ok((kind, None))
}

fn overflow() -> Error {
    Error::Int("18446744073709551616".parse::<u64>().unwrap_err())
}

fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            token: "null",
            precise: ok(Kind::Nil, "nil"),
            fast: ok(Kind::Nil, "nil"),
        },
        TestCase {
            token: "true",
            precise: ok(Kind::Bool, "true"),
            fast: ok(Kind::Bool, "true"),
        },
        TestCase {
            token: "false",
            precise: ok(Kind::Bool, "false"),
            fast: ok(Kind::Bool, "false"),
        },
        TestCase {
            token: r#""a\\b\\c new\nline""#,
            precise: ok(Kind::String, "a\\b\\c new\nline"),
            fast: ok(Kind::String, "a\\b\\c new\nline"),
        },
        TestCase {
            token: r#""\u00e9t\u00e9""#,
            precise: ok(Kind::String, "\u{e9}t\u{e9}"),
            fast: ok(Kind::String, "\u{e9}t\u{e9}"),
        },
        TestCase {
            token: "0",
            precise: ok(Kind::BigInt, "0"),
            fast: ok(Kind::Uint64, "0"),
        },
        TestCase {
            token: "-0",
            precise: ok(Kind::BigInt, "0"),
            fast: ok(Kind::Int64, "0"),
        },
        TestCase {
            token: "987654321987654321",
            precise: ok(Kind::BigInt, "987654321987654321"),
            fast: ok(Kind::Uint64, "987654321987654321"),
        },
        TestCase {
            token: "-987654321987654321",
            precise: ok(Kind::BigInt, "-987654321987654321"),
            fast: ok(Kind::Int64, "-987654321987654321"),
        },
        TestCase {
            token: "18446744073709551615",
            precise: ok(Kind::BigInt, "18446744073709551615"),
            fast: ok(Kind::Uint64, "18446744073709551615"),
        },
        TestCase {
            token: "18446744073709551616",
            precise: ok(Kind::BigInt, "18446744073709551616"),
            fast: Err(overflow()),
        },
        TestCase {
            token: "3.14",
            precise: ok(Kind::BigFloat, "3.14"),
            fast: ok(Kind::Float64, "3.14"),
        },
        TestCase {
            token: "-3.14",
            precise: ok(Kind::BigFloat, "-3.14"),
            fast: ok(Kind::Float64, "-3.14"),
        },
        TestCase {
            token: "987654321987654321.987654321987654321",
            precise: ok(Kind::BigFloat, "9.87654321987654321987654321987654321e+17"),
            fast: ok(Kind::Float64, "9.876543219876543e+17"),
        },
        TestCase {
            token: "-987654321.987654321",
            precise: ok(Kind::BigFloat, "-9.87654321987654321e+08"),
            fast: kind_only(Kind::Float64),
        },
        TestCase {
            token: "-0.987654321987654321987654321987654321E-69",
            precise: ok(Kind::BigFloat, "-9.87654321987654321987654321987654321e-70"),
            fast: kind_only(Kind::Float64),
        },
        TestCase {
            token: "-987654321987654321987654321987654321e69",
            precise: ok(Kind::BigFloat, "-9.87654321987654321987654321987654321e+104"),
            fast: kind_only(Kind::Float64),
        },
        TestCase {
            token: "1e6",
            precise: ok(Kind::BigFloat, "1e+06"),
            fast: ok(Kind::Float64, "1e+06"),
        },
        TestCase {
            token: "100000.0",
            precise: ok(Kind::BigFloat, "100000"),
            fast: ok(Kind::Float64, "100000"),
        },
        TestCase {
            token: "0.0001",
            precise: ok(Kind::BigFloat, "0.0001"),
            fast: ok(Kind::Float64, "0.0001"),
        },
        TestCase {
            token: "0.00001",
            precise: ok(Kind::BigFloat, "1e-05"),
            fast: ok(Kind::Float64, "1e-05"),
        },
        TestCase {
            token: "1e309",
            precise: ok(Kind::BigFloat, "1e+309"),
            fast: Err(Error::FloatOutOfRange),
        },
        TestCase {
            token: "01.5",
            precise: ok(Kind::BigFloat, "1.5"),
            fast: ok(Kind::Float64, "1.5"),
        },
        TestCase {
            token: "0123456",
            precise: Err(Error::InvalidJson),
            fast: Err(Error::InvalidJson),
        },
        TestCase {
            token: "-0123456",
            precise: Err(Error::InvalidJson),
            fast: Err(Error::InvalidJson),
        },
        TestCase {
            token: "{ foo: bar }",
            precise: Err(Error::NotImplemented),
            fast: Err(Error::NotImplemented),
        },
        TestCase {
            token: "[ foo bar ]",
            precise: Err(Error::NotImplemented),
            fast: Err(Error::NotImplemented),
        },
    ]
}

fn check<T: ScalarValue + Default + ToString>(token: &str, expect: &Expect) {
    let mut value = T::default();
    match (value.decode(token).map(|v| v.kind()), expect) {
        (Ok(kind), Ok((expected, rendered))) => {
            assert_eq!(kind, *expected, "{token}");
            assert!(!value.is_nil() || kind == Kind::Nil, "{token}");
            if let Some(rendered) = rendered {
                assert_eq!(value.to_string(), *rendered, "{token}");
            }
        }
        (Err(err), Err(expected)) => assert_eq!(&err, expected, "{token}"),
        (res, _) => panic!("{token}: unexpected result {res:?}, expected {expect:?}"),
    }
}

#[test]
fn test_decode_precise() {
    for case in test_cases() {
        check::<PreciseValue>(case.token, &case.precise);
    }
}

#[test]
fn test_decode_fast() {
    for case in test_cases() {
        check::<FastValue>(case.token, &case.fast);
    }
}

#[test]
fn test_decode_malformed() {
    let tests = [
        "+123456",
        ".123456",
        "-123,456",
        "-123,456.789",
        "+123456.789",
        "-123,456e7",
        "+123456e7",
        "1.",
        "1e",
        "1e+",
        "-",
        "0x10",
        "NaN",
        "Infinity",
        "",
    ];
    for token in tests {
        assert_eq!(PreciseValue::from_token(token), Err(Error::InvalidJson), "{token}");
        assert_eq!(FastValue::from_token(token), Err(Error::InvalidJson), "{token}");
    }
}

#[test]
fn test_decode_is_repeatable() {
    let mut precise = PreciseValue::default();
    let mut fast = FastValue::default();
    for case in test_cases() {
        if precise.decode(case.token).is_ok() {
            let first = (precise.kind(), precise.to_string());
            precise.decode(case.token).unwrap();
            assert_eq!((precise.kind(), precise.to_string()), first);
        }
        if fast.decode(case.token).is_ok() {
            let first = (fast.kind(), fast.to_string());
            fast.decode(case.token).unwrap();
            assert_eq!((fast.kind(), fast.to_string()), first);
        }
    }
}

#[test]
fn test_decode_keeps_value_on_error() {
    let mut value = FastValue::default();
    value.decode("-42").unwrap();
    assert!(value.decode("-9223372036854775809").is_err());
    assert_eq!(value.as_i64(), Some(-42));

    let mut value = PreciseValue::default();
    value.decode("true").unwrap();
    assert_eq!(value.decode("[1]"), Err(Error::NotImplemented));
    assert_eq!(value.as_bool(), Some(true));
}

#[test]
fn test_decode_int_overflow_kinds() {
    let err = FastValue::from_token("18446744073709551616").unwrap_err();
    assert!(matches!(err, Error::Int(ref e) if *e.kind() == IntErrorKind::PosOverflow));
    let err = FastValue::from_token("-9223372036854775809").unwrap_err();
    assert!(matches!(err, Error::Int(ref e) if *e.kind() == IntErrorKind::NegOverflow));

    let precise = PreciseValue::from_token("-9223372036854775809").unwrap();
    let expected = BigInt::from(i64::MIN) - 1;
    assert_eq!(precise.big_int(), &expected);
}

#[test]
fn test_big_float_accessors() {
    let value = PreciseValue::from_token("-3.14").unwrap();
    let float = value.big_float();
    assert_eq!(float.precision(), jsonscalar::DEFAULT_PRECISION);
    assert!(float.is_sign_negative());
    assert_eq!(float.to_f64(), -3.14);
}

#[test]
fn test_decimal_exponent_limit() {
    let v = PreciseValue::from_token("1e100000").unwrap();
    assert!(v.is_big_float());
    let v = PreciseValue::from_token("0e100001").unwrap();
    assert!(v.big_float().is_zero());

    for token in ["1e100001", "-2.5E-100001"] {
        assert_eq!(
            PreciseValue::from_token(token),
            Err(Error::BigFloat(ParseBigFloatError::ExponentOutOfRange)),
            "{token}"
        );
    }
    assert_eq!(FastValue::from_token("1e100001"), Err(Error::FloatOutOfRange));
    assert_eq!(FastValue::from_token("1e-100001").unwrap().float64(), 0.0);
}

#[test]
fn test_precise_rendering_decodes_back() {
    let tokens = [
        "2.710505431213761085018632002174854278564453125e-20",
        "0.5",
        "1.5e-300",
        "-987654321987654321.987654321987654321",
        "3.4028236692093846346337460743176821145600e38",
    ];
    for token in tokens {
        let value = PreciseValue::from_token(token).unwrap();
        let again = PreciseValue::from_token(&value.to_string()).unwrap();
        assert_eq!(again, value, "{token} renders {value}");
    }
}
