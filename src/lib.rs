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

//! # textcodec
//!
//! Runtime resolution of bidirectional string codecs for values whose
//! concrete type the caller does not statically know — the situation a
//! configuration loader or CLI-flag binder is in when it holds an erased
//! mutable handle to "some field" and needs to read and write it as text.
//!
//! ## Architecture
//!
//! - **`convert`**: the capability traits — [`ToText`]/[`FromText`] and their
//!   composition [`TextCodec`], plus the secondary [`MarshalText`]/
//!   [`UnmarshalText`] pair
//! - **`probe`**: the [`Probe`] introspection trait, the [`Target`] erased
//!   handle, and the [`impl_probe!`] wiring macro
//! - **`adaptor`**: the typed/erased factory boundary ([`Adaptor`],
//!   [`AnyAdaptor`], [`erase`])
//! - **`codecs`**: builtin leaf codecs for the primitive types and the
//!   process-wide builtin adaptor table
//! - **`hybrid`**: synthesis of a codec from partially-overlapping
//!   capabilities
//! - **`namespace`**: the [`Namespace`] registry and the ordered resolution
//!   algorithm
//! - **`error`**: the [`Error`] taxonomy
//!
//! ## Resolution order
//!
//! [`Namespace::codec`] tries, first success wins:
//!
//! 1. the identity short-circuit — the value already is a full codec;
//! 2. the namespace's own custom registrations;
//! 3. the builtin table (bool, sized integers, floats, complex numbers,
//!    `String`, `Vec<u8>`, `DateTime<Utc>`);
//! 4. hybrid synthesis from the capabilities the value exposes.
//!
//! ## Usage
//!
//! ```
//! use textcodec::codec;
//!
//! let mut port = 8080u16;
//! let mut codec = codec(&mut port)?;
//! assert_eq!(codec.to_text()?, "8080");
//! codec.from_text("9090")?;
//! drop(codec);
//! assert_eq!(port, 9090);
//! # Ok::<(), textcodec::Error>(())
//! ```
//!
//! Custom adaptors are registered on an independent [`Namespace`]:
//!
//! ```
//! use textcodec::{Error, FromText, Namespace, TextCodec, ToText};
//!
//! struct Upper<'a>(&'a mut String);
//!
//! impl ToText for Upper<'_> {
//!     fn to_text(&self) -> Result<String, Error> {
//!         Ok(self.0.to_uppercase())
//!     }
//! }
//!
//! impl FromText for Upper<'_> {
//!     fn from_text(&mut self, text: &str) -> Result<(), Error> {
//!         *self.0 = text.to_lowercase();
//!         Ok(())
//!     }
//! }
//!
//! fn upper(value: &mut String) -> Result<Box<dyn TextCodec + '_>, Error> {
//!     Ok(Box::new(Upper(value)))
//! }
//!
//! let mut ns = Namespace::new();
//! ns.adapt_for::<String>(upper);
//!
//! let mut greeting = "hello".to_string();
//! assert_eq!(ns.codec(&mut greeting)?.to_text()?, "HELLO");
//! # Ok::<(), textcodec::Error>(())
//! ```

pub mod adaptor;
mod codecs;
pub mod convert;
pub mod error;
mod hybrid;
pub mod namespace;
pub mod probe;

pub use adaptor::{erase, Adaptor, AnyAdaptor, AnyMut, ErasedAdaptor};
pub use convert::{FromText, MarshalText, TextCodec, ToText, UnmarshalText};
pub use error::Error;
pub use namespace::{default_namespace, Namespace, Options};
pub use probe::{Probe, Target};

/// Resolves a codec for the target using the process-wide default namespace
/// and default [`Options`].
///
/// The default namespace carries no custom registrations; this resolves
/// through the builtin table and hybrid synthesis only. Use a [`Namespace`]
/// instance to override or extend adaptors.
pub fn codec<'a>(target: impl Into<Target<'a>>) -> Result<Box<dyn TextCodec + 'a>, Error> {
    default_namespace().codec(target)
}

/// Like [`codec`], with explicit [`Options`].
pub fn codec_with<'a>(
    target: impl Into<Target<'a>>,
    options: Options,
) -> Result<Box<dyn TextCodec + 'a>, Error> {
    default_namespace().codec_with(target, options)
}
