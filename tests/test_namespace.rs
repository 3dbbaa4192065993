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

use std::any::TypeId;

use textcodec::{
    erase, impl_probe, Error, FromText, Namespace, Options, Probe, Target, TextCodec, ToText,
};

// A type that is a complete codec by itself; resolution must hand it back
// unchanged.
struct Celsius(f64);

impl ToText for Celsius {
    fn to_text(&self) -> Result<String, Error> {
        Ok(format!("{}C", self.0))
    }
}

impl FromText for Celsius {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        let digits = text.trim_end_matches('C');
        self.0 = digits.parse().map_err(Error::external)?;
        Ok(())
    }
}

impl_probe!(Celsius: ToText, FromText, TextCodec);

// A type the engine knows nothing about.
struct Opaque;

impl_probe!(Opaque);

fn hex_codec(value: &mut i32) -> Result<Box<dyn TextCodec + '_>, Error> {
    Ok(Box::new(Hex(value)))
}

struct Hex<'a>(&'a mut i32);

impl ToText for Hex<'_> {
    fn to_text(&self) -> Result<String, Error> {
        Ok(format!("{:#x}", self.0))
    }
}

impl FromText for Hex<'_> {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        let digits = text.trim_start_matches("0x");
        *self.0 = i32::from_str_radix(digits, 16).map_err(Error::external)?;
        Ok(())
    }
}

#[test]
fn test_identity_short_circuit() {
    let ns = Namespace::new();
    let mut value = Celsius(21.5);

    let mut codec = ns.codec(&mut value).unwrap();
    assert_eq!(codec.to_text().unwrap(), "21.5C");
    codec.from_text("25C").unwrap();
    drop(codec);
    assert_eq!(value.0, 25.0);
}

#[test]
fn test_identity_beats_custom_registration() {
    fn shadow(_: &mut Celsius) -> Result<Box<dyn TextCodec + '_>, Error> {
        Err(Error::unsupported_type("shadowed"))
    }

    let mut ns = Namespace::new();
    ns.adapt_for::<Celsius>(shadow);

    let mut value = Celsius(0.0);
    let codec = ns.codec(&mut value).unwrap();
    assert_eq!(codec.to_text().unwrap(), "0C");
}

#[test]
fn test_shared_target_is_rejected() {
    let ns = Namespace::new();
    let value = 42i32;

    let err = ns.codec(&value).unwrap_err();
    assert!(matches!(err, Error::NotMutable(_)));
    assert_eq!(err.to_string(), "not a mutable reference: i32");
}

#[test]
fn test_null_target_is_rejected() {
    let ns = Namespace::new();
    let err = ns.codec(Target::Null).unwrap_err();
    assert!(matches!(err, Error::NullTarget));

    // An absent optional field converts to the same rejection.
    let absent: Option<&mut dyn Probe> = None;
    let err = ns.codec(absent).unwrap_err();
    assert!(matches!(err, Error::NullTarget));
}

#[test]
fn test_builtin_resolution() {
    let ns = Namespace::new();
    let mut value = 42i32;

    let mut codec = ns.codec(&mut value).unwrap();
    assert_eq!(codec.to_text().unwrap(), "42");
    codec.from_text("-7").unwrap();
    drop(codec);
    assert_eq!(value, -7);
}

#[test]
fn test_custom_registration_shadows_builtin() {
    let mut ns = Namespace::new();
    ns.adapt_for::<i32>(hex_codec);

    let mut value = 255i32;
    let mut codec = ns.codec(&mut value).unwrap();
    assert_eq!(codec.to_text().unwrap(), "0xff");
    codec.from_text("0x10").unwrap();
    drop(codec);
    assert_eq!(value, 16);
}

#[test]
fn test_undo_adapt_restores_builtin() {
    let mut ns = Namespace::new();
    ns.adapt_for::<i32>(hex_codec);
    ns.undo_adapt_for::<i32>();

    let mut value = 255i32;
    let codec = ns.codec(&mut value).unwrap();
    assert_eq!(codec.to_text().unwrap(), "255");

    // Removing an absent registration is a no-op.
    ns.undo_adapt_for::<i32>();
    ns.undo_adapt_for::<Opaque>();
}

#[test]
fn test_registration_is_per_namespace() {
    let mut ns = Namespace::new();
    ns.adapt_for::<i32>(hex_codec);

    let other = Namespace::new();
    let mut value = 255i32;
    assert_eq!(other.codec(&mut value).unwrap().to_text().unwrap(), "255");
    assert_eq!(
        textcodec::codec(&mut value).unwrap().to_text().unwrap(),
        "255"
    );
}

#[test]
fn test_last_registration_wins() {
    fn decimal(value: &mut i32) -> Result<Box<dyn TextCodec + '_>, Error> {
        Ok(Box::new(value))
    }

    let mut ns = Namespace::new();
    ns.adapt_for::<i32>(hex_codec);
    ns.adapt_for::<i32>(decimal);

    let mut value = 255i32;
    assert_eq!(ns.codec(&mut value).unwrap().to_text().unwrap(), "255");
}

#[test]
fn test_unsupported_type() {
    let ns = Namespace::new();
    let mut value = Opaque;

    let err = ns.codec(&mut value).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(_)));
    assert!(err.to_string().contains("Opaque"));
}

#[test]
fn test_mismatched_registration_reports_both_types() {
    // Register a bool adaptor under i32's type identity; the erased factory
    // must catch the mismatch at resolution time.
    fn flag(value: &mut bool) -> Result<Box<dyn TextCodec + '_>, Error> {
        Ok(Box::new(value))
    }

    let mut ns = Namespace::new();
    let (_, adaptor) = erase::<bool>(flag);
    ns.adapt(TypeId::of::<i32>(), adaptor);

    let mut value = 1i32;
    let err = ns.codec(&mut value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: cannot convert i32 to bool"
    );
}

#[test]
fn test_options_are_combinable() {
    let options = Options::new().no_hybrid().complete_hybrid();
    assert_ne!(options, Options::default());

    let ns = Namespace::new();
    let mut value = 5u8;
    // Options never affect the custom/builtin strategies.
    assert_eq!(
        ns.codec_with(&mut value, options)
            .unwrap()
            .to_text()
            .unwrap(),
        "5"
    );
}
