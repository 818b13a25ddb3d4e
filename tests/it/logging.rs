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

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use jsonscalar::{Error, FastValue, PreciseValue};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_rejected_tokens_are_traced() {
    let logs = capture(|| {
        assert_eq!(PreciseValue::from_token("0123"), Err(Error::InvalidJson));
        assert_eq!(FastValue::from_token("[1]"), Err(Error::NotImplemented));
    });
    let lines: Vec<&str> = logs.lines().collect();
    assert_eq!(lines.len(), 2, "{logs}");
    assert!(lines[0].contains("rejected JSON scalar token"));
    assert!(lines[0].contains("precise"));
    assert!(lines[0].contains("0123"));
    assert!(lines[0].contains("invalid JSON"));
    assert!(lines[1].contains("fast"));
    assert!(lines[1].contains("not implemented"));
}

#[test]
fn test_accepted_tokens_are_silent() {
    let logs = capture(|| {
        PreciseValue::from_token("3.14").unwrap();
        FastValue::from_token("null").unwrap();
    });
    assert!(logs.is_empty(), "{logs}");
}
