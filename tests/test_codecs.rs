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

use chrono::{DateTime, TimeZone, Utc};
use num_complex::{Complex32, Complex64};
use textcodec::{codec, Error};

#[test]
fn test_bool_round_trip() {
    let mut value = true;
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "true");
    c.from_text("false").unwrap();
    drop(c);
    assert!(!value);

    let mut value = false;
    let err = codec(&mut value).unwrap().from_text("yes").unwrap_err();
    assert!(matches!(err, Error::External(_)));
}

#[test]
fn test_bool_accepts_flag_style_values() {
    for text in ["1", "t", "T", "true", "TRUE", "True"] {
        let mut value = false;
        codec(&mut value).unwrap().from_text(text).unwrap();
        assert!(value, "{text:?} must decode to true");
    }
    for text in ["0", "f", "F", "false", "FALSE", "False"] {
        let mut value = true;
        codec(&mut value).unwrap().from_text(text).unwrap();
        assert!(!value, "{text:?} must decode to false");
    }

    // Mixed-case beyond the Title form stays rejected.
    let mut value = false;
    let err = codec(&mut value).unwrap().from_text("tRue").unwrap_err();
    assert!(matches!(err, Error::External(_)));
}

#[test]
fn test_signed_integer_round_trips() {
    let mut value = i8::MIN;
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "-128");
    c.from_text("127").unwrap();
    drop(c);
    assert_eq!(value, 127);

    let mut value = 0i64;
    let mut c = codec(&mut value).unwrap();
    c.from_text("-9223372036854775808").unwrap();
    drop(c);
    assert_eq!(value, i64::MIN);

    let mut value = 0isize;
    codec(&mut value).unwrap().from_text("-3").unwrap();
    assert_eq!(value, -3);
}

#[test]
fn test_unsigned_integer_round_trips() {
    let mut value = u64::MAX;
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "18446744073709551615");

    let err = c.from_text("-1").unwrap_err();
    assert!(matches!(err, Error::External(_)));
    drop(c);
    assert_eq!(value, u64::MAX);

    let mut value = 0usize;
    codec(&mut value).unwrap().from_text("65535").unwrap();
    assert_eq!(value, 65_535);
}

#[test]
fn test_float_formatting_is_round_trip_stable() {
    let mut value = 0.1f64;
    let text = codec(&mut value).unwrap().to_text().unwrap();
    assert_eq!(text, "0.1");

    let mut parsed = 0.0f64;
    codec(&mut parsed).unwrap().from_text(&text).unwrap();
    assert_eq!(parsed, 0.1);

    let mut value = 2.5f32;
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "2.5");
    c.from_text("-0.25").unwrap();
    drop(c);
    assert_eq!(value, -0.25);
}

#[test]
fn test_string_round_trip() {
    let mut value = "hello".to_string();
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "hello");
    c.from_text("").unwrap();
    drop(c);
    assert_eq!(value, "");
}

#[test]
fn test_bytes_use_standard_base64() {
    let mut value = b"hello world".to_vec();
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "aGVsbG8gd29ybGQ=");

    c.from_text("AQID").unwrap();
    drop(c);
    assert_eq!(value, vec![1, 2, 3]);

    let mut value = Vec::new();
    let err = codec(&mut value).unwrap().from_text("!!!").unwrap_err();
    assert!(matches!(err, Error::External(_)));
}

#[test]
fn test_complex_round_trips() {
    let mut value = Complex64::new(3.0, 4.0);
    let mut c = codec(&mut value).unwrap();
    assert_eq!(c.to_text().unwrap(), "3+4i");
    c.from_text("1-2i").unwrap();
    drop(c);
    assert_eq!(value, Complex64::new(1.0, -2.0));

    let mut value = Complex32::new(0.5, 0.0);
    let text = codec(&mut value).unwrap().to_text().unwrap();
    let mut parsed = Complex32::new(0.0, 0.0);
    codec(&mut parsed).unwrap().from_text(&text).unwrap();
    assert_eq!(parsed, Complex32::new(0.5, 0.0));
}

#[test]
fn test_timestamp_decoding_fixtures() {
    let mut value: DateTime<Utc> = Default::default();

    codec(&mut value)
        .unwrap()
        .from_text("2006-01-02T15:04:05Z")
        .unwrap();
    assert_eq!(value, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());

    codec(&mut value).unwrap().from_text("2006-01-02").unwrap();
    assert_eq!(value, Utc.with_ymd_and_hms(2006, 1, 2, 0, 0, 0).unwrap());

    codec(&mut value).unwrap().from_text("1136239445").unwrap();
    assert_eq!(value.timestamp(), 1_136_239_445);
    assert_eq!(value.timestamp_subsec_nanos(), 0);

    codec(&mut value)
        .unwrap()
        .from_text("1136239445.812738")
        .unwrap();
    assert_eq!(value.timestamp(), 1_136_239_445);
    assert_eq!(value.timestamp_subsec_nanos(), 812_738_000);
}

#[test]
fn test_timestamp_rejects_non_matching_text() {
    let mut value: DateTime<Utc> = Default::default();
    let err = codec(&mut value)
        .unwrap()
        .from_text("five minutes ago")
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTime));
    assert_eq!(err.to_string(), "invalid time value");
}

#[test]
fn test_timestamp_encoding_round_trip() {
    let mut value = Utc.with_ymd_and_hms(2021, 4, 21, 4, 35, 33).unwrap();
    let text = codec(&mut value).unwrap().to_text().unwrap();
    assert_eq!(text, "2021-04-21T04:35:33Z");

    let mut parsed: DateTime<Utc> = Default::default();
    codec(&mut parsed).unwrap().from_text(&text).unwrap();
    assert_eq!(parsed, value);
}
