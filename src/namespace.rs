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

//! The resolution engine.
//!
//! A [`Namespace`] owns per-instance custom adaptor registrations and
//! resolves a codec for an erased target by trying, in order: the identity
//! short-circuit, its own registrations, the process-wide builtin table, and
//! hybrid synthesis. The first success wins; each strategy runs at most once
//! per call.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::adaptor::{erase, Adaptor, AnyAdaptor, AnyMut};
use crate::codecs::builtin_adaptors;
use crate::convert::TextCodec;
use crate::error::Error;
use crate::hybrid::Hybrid;
use crate::probe::{Probe, Target};

/// Resolution policy, fixed before a resolution call begins.
///
/// Built in the builder style:
///
/// ```
/// use textcodec::Options;
///
/// let options = Options::new().no_hybrid();
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    no_hybrid: bool,
    complete_hybrid: bool,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    /// Skips hybrid synthesis entirely. A type served by neither a custom
    /// nor a builtin adaptor then fails with [`Error::UnsupportedType`],
    /// even when it exposes detectable capabilities.
    pub fn no_hybrid(mut self) -> Options {
        self.no_hybrid = true;
        self
    }

    /// Requires a synthesized hybrid to back both sides. A one-sided hybrid
    /// is rejected with the matching [`Error::CannotToText`] or
    /// [`Error::CannotFromText`] instead of being returned partially usable.
    pub fn complete_hybrid(mut self) -> Options {
        self.complete_hybrid = true;
        self
    }
}

/// A registry of custom type adaptors.
///
/// Registrations are per-instance: adapting a type here never affects other
/// namespaces or the process-wide [`default_namespace`]. Registration takes
/// `&mut self`, so concurrent writes are ruled out at compile time;
/// resolution through `&self` is freely shareable.
#[derive(Default)]
pub struct Namespace {
    adaptors: HashMap<TypeId, AnyAdaptor>,
}

impl Namespace {
    pub fn new() -> Namespace {
        Namespace::default()
    }

    /// Resolves a codec for the target with default [`Options`].
    pub fn codec<'a>(
        &self,
        target: impl Into<Target<'a>>,
    ) -> Result<Box<dyn TextCodec + 'a>, Error> {
        self.codec_with(target, Options::default())
    }

    /// Resolves a codec for the target.
    ///
    /// A target that already satisfies the full codec contract is returned
    /// unchanged. Otherwise the target must be a writable handle
    /// ([`Target::Mut`]); resolution then tries this namespace's custom
    /// registrations, the builtin table, and — unless [`Options::no_hybrid`]
    /// is set — hybrid synthesis. When every strategy falls through, the
    /// call fails with [`Error::UnsupportedType`] naming the type.
    pub fn codec_with<'a>(
        &self,
        target: impl Into<Target<'a>>,
        options: Options,
    ) -> Result<Box<dyn TextCodec + 'a>, Error> {
        let value: &'a mut dyn Probe = match target.into() {
            Target::Mut(value) => value,
            Target::Shared(value) => return Err(Error::not_mutable(value.type_name())),
            Target::Null => return Err(Error::NullTarget),
        };

        // Identity short-circuit. Probed twice: the condition only decides
        // the branch, so the fallthrough path keeps `value` unborrowed.
        if value.as_text_codec().is_some() {
            return identity_codec(value);
        }

        let type_id = value.as_any().type_id();
        let type_name = value.type_name();

        if let Some(adaptor) = self.adaptors.get(&type_id) {
            return adaptor.adapt(AnyMut::from_probe(value));
        }

        if let Some(adaptor) = builtin_adaptors().get(&type_id) {
            return adaptor.adapt(AnyMut::from_probe(value));
        }

        if !options.no_hybrid {
            if let Some(mut hybrid) = Hybrid::synthesize(value) {
                if options.complete_hybrid {
                    hybrid.validate_complete()?;
                }
                return Ok(Box::new(hybrid));
            }
        }

        Err(Error::unsupported_type(type_name))
    }

    /// Registers an erased adaptor for a type, overwriting any previous
    /// registration. Last writer wins; the adaptor is not validated beyond
    /// storage.
    pub fn adapt(&mut self, type_id: TypeId, adaptor: AnyAdaptor) {
        self.adaptors.insert(type_id, adaptor);
    }

    /// Registers a typed factory for `T`, erasing it on the way in.
    pub fn adapt_for<T: 'static>(&mut self, factory: Adaptor<T>) {
        let (type_id, adaptor) = erase::<T>(factory);
        self.adapt(type_id, adaptor);
    }

    /// Removes the registration for a type. Idempotent: removing an absent
    /// registration is a no-op, not an error.
    pub fn undo_adapt(&mut self, type_id: TypeId) {
        self.adaptors.remove(&type_id);
    }

    /// Typed counterpart of [`Namespace::undo_adapt`].
    pub fn undo_adapt_for<T: 'static>(&mut self) {
        self.undo_adapt(TypeId::of::<T>());
    }
}

/// Hands the value back as its own codec. Callers guard on `as_text_codec`
/// being present; the error arm exists only to keep the accessor contract
/// honest if an impl reports inconsistently.
fn identity_codec<'a>(value: &'a mut dyn Probe) -> Result<Box<dyn TextCodec + 'a>, Error> {
    let type_name = value.type_name();
    match value.as_text_codec() {
        Some(codec) => Ok(Box::new(codec)),
        None => Err(Error::unsupported_type(type_name)),
    }
}

static DEFAULT_NAMESPACE: LazyLock<Namespace> = LazyLock::new(Namespace::new);

/// The process-wide default namespace.
///
/// Initialized once on first use and read-only thereafter; builtin types are
/// served through the global builtin table, so this instance carries no
/// registrations of its own. Create a [`Namespace`] to override adaptors.
pub fn default_namespace() -> &'static Namespace {
    &DEFAULT_NAMESPACE
}
