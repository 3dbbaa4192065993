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

//! Capability traits: the minimal conversion contracts a value may expose.
//!
//! The native family is [`ToText`]/[`FromText`]; their composition is
//! [`TextCodec`], the opaque bidirectional codec handed back to callers. The
//! secondary family, [`MarshalText`]/[`UnmarshalText`], is the byte-based
//! marshal/unmarshal-text pair; the hybrid synthesizer falls back to it when
//! the native capability is absent on a side.

use crate::error::Error;

/// Ability to render the value as a string.
pub trait ToText {
    fn to_text(&self) -> Result<String, Error>;
}

/// Ability to replace the value by parsing a string.
///
/// Implementations mutate `self` in place; the caller's original value
/// observes the change.
pub trait FromText {
    fn from_text(&mut self, text: &str) -> Result<(), Error>;
}

/// A bidirectional string codec.
///
/// Blanket-implemented for every type carrying both sides, so any
/// `ToText + FromText` value is usable as a codec without further ceremony.
pub trait TextCodec: ToText + FromText {}

impl<C: ToText + FromText> TextCodec for C {}

impl core::fmt::Debug for dyn TextCodec + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("dyn TextCodec")
    }
}

/// Secondary to-text capability: marshal the value into a byte sequence.
pub trait MarshalText {
    fn marshal_text(&self) -> Result<Vec<u8>, Error>;
}

/// Secondary from-text capability: replace the value by unmarshaling a byte
/// sequence.
pub trait UnmarshalText {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), Error>;
}

// A mutable borrow of a convertible value is itself convertible. This lets a
// `&mut T` be boxed directly as a `dyn TextCodec` that writes through to the
// caller's value.

impl<C: ToText + ?Sized> ToText for &mut C {
    fn to_text(&self) -> Result<String, Error> {
        (**self).to_text()
    }
}

impl<C: FromText + ?Sized> FromText for &mut C {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        (**self).from_text(text)
    }
}

impl<C: MarshalText + ?Sized> MarshalText for &mut C {
    fn marshal_text(&self) -> Result<Vec<u8>, Error> {
        (**self).marshal_text()
    }
}

impl<C: UnmarshalText + ?Sized> UnmarshalText for &mut C {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), Error> {
        (**self).unmarshal_text(text)
    }
}
