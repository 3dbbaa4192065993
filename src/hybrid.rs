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

//! Hybrid codec synthesis.
//!
//! A hybrid combines independently-detected conversion capabilities into one
//! codec, without requiring the value's type to implement the full
//! [`TextCodec`] contract natively. Each side resolves on its own, with a
//! fixed priority: the native capability first, the marshal-text family as
//! the fallback. A side that resolves to nothing fails with
//! [`Error::CannotToText`]/[`Error::CannotFromText`] when called; it never
//! panics.

use crate::convert::{FromText, ToText};
use crate::error::Error;
use crate::probe::Probe;

/// A codec synthesized from whatever capabilities the probed value exposes.
///
/// Holds the probed handle itself and re-resolves the side on every call;
/// the probe accessors are cheap vtable hits and this keeps both sides
/// backed by one `&mut` borrow.
pub(crate) struct Hybrid<'a> {
    value: &'a mut dyn Probe,
}

impl<'a> Hybrid<'a> {
    /// Tries to synthesize a hybrid codec for the value.
    ///
    /// Returns `None` when the value exposes no capability on either side —
    /// the caller treats that as "next strategy", not as an error.
    pub(crate) fn synthesize(value: &'a mut dyn Probe) -> Option<Hybrid<'a>> {
        let has_to_side = value.as_to_text().is_some() || value.as_marshal_text().is_some();
        let has_from_side =
            value.as_from_text().is_some() || value.as_unmarshal_text().is_some();
        if !has_to_side && !has_from_side {
            return None;
        }
        Some(Hybrid { value })
    }

    /// Checks that both sides are backed, for the `complete_hybrid` option.
    ///
    /// An absent to-text side is reported before an absent from-text side.
    pub(crate) fn validate_complete(&mut self) -> Result<(), Error> {
        if self.value.as_to_text().is_none() && self.value.as_marshal_text().is_none() {
            return Err(Error::CannotToText);
        }
        if self.value.as_from_text().is_none() && self.value.as_unmarshal_text().is_none() {
            return Err(Error::CannotFromText);
        }
        Ok(())
    }
}

impl ToText for Hybrid<'_> {
    fn to_text(&self) -> Result<String, Error> {
        if let Some(native) = self.value.as_to_text() {
            return native.to_text();
        }
        if let Some(marshaler) = self.value.as_marshal_text() {
            let bytes = marshaler.marshal_text()?;
            return String::from_utf8(bytes).map_err(Error::external);
        }
        Err(Error::CannotToText)
    }
}

impl FromText for Hybrid<'_> {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        if let Some(native) = self.value.as_from_text() {
            return native.from_text(text);
        }
        if let Some(unmarshaler) = self.value.as_unmarshal_text() {
            return unmarshaler.unmarshal_text(text.as_bytes());
        }
        Err(Error::CannotFromText)
    }
}
