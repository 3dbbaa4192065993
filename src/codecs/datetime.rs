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

//! Timestamp codec over `chrono::DateTime<Utc>`.
//!
//! Encodes RFC 3339 in UTC. Decoding tries, in this fixed order, first match
//! wins: RFC 3339 with fractional seconds, a bare date at UTC midnight, and
//! a Unix epoch value with up to 9 fractional digits. Anything else fails
//! with `"invalid time value"`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use regex::Regex;

use crate::convert::{FromText, ToText};
use crate::error::Error;
use crate::impl_probe;

impl ToText for DateTime<Utc> {
    fn to_text(&self) -> Result<String, Error> {
        Ok(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl FromText for DateTime<Utc> {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        *self = decode_time(text)?;
        Ok(())
    }
}

impl_probe!(DateTime<Utc>: ToText, FromText);

static UNIX_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,9})?$").expect("hardcoded pattern"));

fn decode_time(text: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    if UNIX_TIMESTAMP.is_match(text) {
        return Ok(decode_unix_timestamp(text));
    }
    Err(Error::InvalidTime)
}

/// `text` must already match [`UNIX_TIMESTAMP`]; parse results are trusted
/// on that basis.
fn decode_unix_timestamp(text: &str) -> DateTime<Utc> {
    let mut parts = text.splitn(2, '.');
    let sec = parts
        .next()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or_default();
    let nsec = parts
        .next()
        .and_then(|fraction| nanosecond_precision(fraction).parse::<u32>().ok())
        .unwrap_or_default();
    DateTime::from_timestamp(sec, nsec).unwrap_or_default()
}

/// Right-pads a fractional-second string to nanosecond precision, e.g.
/// `"812738"` becomes `"812738000"`.
fn nanosecond_precision(fraction: &str) -> String {
    format!("{fraction:0<9}")
}
