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
use std::io::Write;

use goldenfile::Mint;
use jsonscalar::{FastValue, PreciseValue, Result, ScalarValue};

fn render<T: ScalarValue + Display>(res: Result<T>) -> String {
    match res {
        Ok(value) => format!("{} {}", value.kind(), value),
        Err(err) => format!("error: {err}"),
    }
}

#[test]
fn test_scalar_rendering() {
    let mut mint = Mint::new("tests/it/testdata");
    let mut file = mint.new_goldenfile("scalar.txt").unwrap();
    let cases = &[
        "null",
        "false",
        r#""quoted \"text\"""#,
        "0",
        "-42",
        "12345678901234567890123",
        "0.1",
        "2.5e-3",
        "-1E+10",
        "123456.5",
        "1e-400",
        "1e400",
        "0123",
        "{}",
    ];

    for case in cases {
        writeln!(file, "---------- Input ----------").unwrap();
        writeln!(file, "{case}").unwrap();
        writeln!(file, "---------- Precise --------").unwrap();
        writeln!(file, "{}", render(PreciseValue::from_token(case))).unwrap();
        writeln!(file, "---------- Fast -----------").unwrap();
        writeln!(file, "{}", render(FastValue::from_token(case))).unwrap();
        writeln!(file, "\n").unwrap();
    }
}
