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

//! Capability introspection.
//!
//! [`Probe`] is the erased view the resolution engine works against. Every
//! accessor defaults to "capability absent"; a type opts a capability in by
//! overriding the matching accessor — usually via [`impl_probe!`], which
//! wires the boilerplate:
//!
//! ```
//! use textcodec::{impl_probe, Error, FromText, ToText};
//!
//! struct Port(u16);
//!
//! impl ToText for Port {
//!     fn to_text(&self) -> Result<String, Error> {
//!         Ok(self.0.to_string())
//!     }
//! }
//!
//! impl FromText for Port {
//!     fn from_text(&mut self, text: &str) -> Result<(), Error> {
//!         self.0 = text.parse().map_err(Error::external)?;
//!         Ok(())
//!     }
//! }
//!
//! impl_probe!(Port: ToText, FromText);
//! ```

use std::any::Any;

use crate::convert::{FromText, MarshalText, TextCodec, ToText, UnmarshalText};

/// The erased view of a value handed to the resolution engine.
///
/// `as_any`/`as_any_mut` bridge to the registry lookups; the remaining
/// accessors report which conversion capabilities the value exposes. An impl
/// that overrides nothing is perfectly valid — such a value can still be
/// served by a custom or builtin adaptor, it just yields nothing to the
/// hybrid synthesizer.
pub trait Probe: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Name of the concrete type, for diagnostics only.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The value already is a full codec; resolution returns it unchanged.
    fn as_text_codec(&mut self) -> Option<&mut dyn TextCodec> {
        None
    }

    /// Native to-text capability.
    fn as_to_text(&self) -> Option<&dyn ToText> {
        None
    }

    /// Native from-text capability.
    fn as_from_text(&mut self) -> Option<&mut dyn FromText> {
        None
    }

    /// Secondary marshal-to-text capability.
    fn as_marshal_text(&self) -> Option<&dyn MarshalText> {
        None
    }

    /// Secondary unmarshal-from-text capability.
    fn as_unmarshal_text(&mut self) -> Option<&mut dyn UnmarshalText> {
        None
    }
}

/// An erased, possibly-unusable handle to a caller's value.
///
/// Binders that hold dynamically-typed field references construct one of
/// these; plain call sites rely on the `From` impls and pass `&mut value`
/// directly. Only [`Target::Mut`] can back a codec: resolution rejects
/// `Shared` with [`Error::NotMutable`] and `Null` with [`Error::NullTarget`].
///
/// [`Error::NotMutable`]: crate::Error::NotMutable
/// [`Error::NullTarget`]: crate::Error::NullTarget
pub enum Target<'a> {
    /// A writable handle; the normal case.
    Mut(&'a mut dyn Probe),
    /// A read-only handle; cannot back a codec.
    Shared(&'a dyn Probe),
    /// No value at all, e.g. an absent optional field.
    Null,
}

impl<'a, T: Probe> From<&'a mut T> for Target<'a> {
    fn from(value: &'a mut T) -> Target<'a> {
        Target::Mut(value)
    }
}

impl<'a, T: Probe> From<&'a T> for Target<'a> {
    fn from(value: &'a T) -> Target<'a> {
        Target::Shared(value)
    }
}

impl<'a> From<&'a mut dyn Probe> for Target<'a> {
    fn from(value: &'a mut dyn Probe) -> Target<'a> {
        Target::Mut(value)
    }
}

impl<'a> From<Option<&'a mut dyn Probe>> for Target<'a> {
    fn from(value: Option<&'a mut dyn Probe>) -> Target<'a> {
        match value {
            Some(value) => Target::Mut(value),
            None => Target::Null,
        }
    }
}

/// Implements [`Probe`] for a type, wiring the listed capability accessors.
///
/// Capabilities are named by their trait: `ToText`, `FromText`,
/// `MarshalText`, `UnmarshalText`, and `TextCodec` (the identity
/// short-circuit). The corresponding trait impls must exist on the type.
///
/// `impl_probe!(MyType)` produces an inert impl: the type can then flow
/// through custom and builtin adaptors but exposes nothing to the hybrid
/// synthesizer.
#[macro_export]
macro_rules! impl_probe {
    ($ty:ty) => {
        $crate::impl_probe!($ty:);
    };
    ($ty:ty : $($capability:ident),* $(,)?) => {
        impl $crate::Probe for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            $($crate::__impl_probe_accessor!($capability);)*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_probe_accessor {
    (ToText) => {
        fn as_to_text(&self) -> ::core::option::Option<&dyn $crate::ToText> {
            ::core::option::Option::Some(self)
        }
    };
    (FromText) => {
        fn as_from_text(&mut self) -> ::core::option::Option<&mut dyn $crate::FromText> {
            ::core::option::Option::Some(self)
        }
    };
    (MarshalText) => {
        fn as_marshal_text(&self) -> ::core::option::Option<&dyn $crate::MarshalText> {
            ::core::option::Option::Some(self)
        }
    };
    (UnmarshalText) => {
        fn as_unmarshal_text(&mut self) -> ::core::option::Option<&mut dyn $crate::UnmarshalText> {
            ::core::option::Option::Some(self)
        }
    };
    (TextCodec) => {
        fn as_text_codec(&mut self) -> ::core::option::Option<&mut dyn $crate::TextCodec> {
            ::core::option::Option::Some(self)
        }
    };
}
