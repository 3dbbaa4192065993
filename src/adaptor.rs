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

//! The typed/erased adaptor boundary.
//!
//! [`erase`] is the only place where static typing crosses into dynamic
//! typing: it captures a concrete `T` at definition time and hides it behind
//! the uniform [`ErasedAdaptor`] object, guarded by a runtime downcast. An
//! erased adaptor is constructed once per type and is immutable afterward.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::convert::TextCodec;
use crate::error::Error;
use crate::probe::Probe;

/// A typed codec factory: borrows a value of a known type and produces a
/// codec wrapping that borrow.
pub type Adaptor<T> = for<'a> fn(&'a mut T) -> Result<Box<dyn TextCodec + 'a>, Error>;

/// A type-erased codec factory, keyed by [`TypeId`] in a registry.
pub type AnyAdaptor = Arc<dyn ErasedAdaptor + Send + Sync>;

/// The uniform calling surface of an erased adaptor.
pub trait ErasedAdaptor {
    /// Produces a codec for the erased value, failing with
    /// [`Error::TypeMismatch`] when its underlying type is not the one this
    /// adaptor was erased from.
    fn adapt<'a>(&self, target: AnyMut<'a>) -> Result<Box<dyn TextCodec + 'a>, Error>;
}

/// An erased mutable handle, carrying the concrete type name so a failed
/// downcast can report what it actually received.
pub struct AnyMut<'a> {
    value: &'a mut dyn Any,
    type_name: &'static str,
}

impl<'a> AnyMut<'a> {
    pub fn new<T: Any>(value: &'a mut T) -> AnyMut<'a> {
        AnyMut {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn from_probe(value: &'a mut dyn Probe) -> AnyMut<'a> {
        let type_name = value.type_name();
        AnyMut {
            value: value.as_any_mut(),
            type_name,
        }
    }

    /// Name of the underlying concrete type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Recovers the typed borrow, failing with [`Error::TypeMismatch`] when
    /// the underlying type is not `T`.
    pub fn downcast<T: Any>(self) -> Result<&'a mut T, Error> {
        let type_name = self.type_name;
        self.value
            .downcast_mut::<T>()
            .ok_or_else(|| Error::type_mismatch(type_name, std::any::type_name::<T>()))
    }
}

struct TypedAdaptor<T> {
    factory: Adaptor<T>,
}

impl<T: Any> ErasedAdaptor for TypedAdaptor<T> {
    fn adapt<'a>(&self, target: AnyMut<'a>) -> Result<Box<dyn TextCodec + 'a>, Error> {
        (self.factory)(target.downcast::<T>()?)
    }
}

/// Wraps a typed factory into its runtime type identity and a type-erased
/// factory.
///
/// Invoking the erased adaptor with a value whose underlying type is not `T`
/// fails with [`Error::TypeMismatch`]; on a match it has no effect beyond
/// calling the wrapped factory.
pub fn erase<T: Any>(factory: Adaptor<T>) -> (TypeId, AnyAdaptor) {
    (TypeId::of::<T>(), Arc::new(TypedAdaptor { factory }))
}
