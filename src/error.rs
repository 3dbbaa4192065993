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

use std::borrow::Cow;

use thiserror::Error;

/// Error type for codec resolution and conversion operations.
///
/// Prefer the static constructor functions (`Error::type_mismatch`,
/// `Error::unsupported_type`, ...) over building variants directly; they
/// handle the `Into<Cow>` conversions and keep construction uniform across
/// the codebase.
///
/// Failures produced by an underlying codec implementation itself (a parse
/// error, a failing `MarshalText` impl) are not part of this taxonomy: they
/// pass through unchanged as [`Error::External`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The resolution target is not a mutable reference.
    ///
    /// A codec must be able to write through its target; a shared handle
    /// cannot back one.
    #[error("not a mutable reference: {0}")]
    NotMutable(Cow<'static, str>),

    /// The resolution target is absent.
    #[error("null target: value must be a non-null mutable reference")]
    NullTarget,

    /// A type-erased adaptor was invoked against a value of the wrong
    /// underlying type.
    #[error("type mismatch: cannot convert {actual} to {expected}")]
    TypeMismatch {
        actual: &'static str,
        expected: &'static str,
    },

    /// No resolution strategy produced a codec for the type.
    #[error("unsupported type: {0}")]
    UnsupportedType(Cow<'static, str>),

    /// The to-text side of a codec has no backing capability.
    #[error("cannot convert to text")]
    CannotToText,

    /// The from-text side of a codec has no backing capability.
    #[error("cannot convert from text")]
    CannotFromText,

    /// A timestamp string matched none of the accepted formats.
    #[error("invalid time value")]
    InvalidTime,

    /// An error raised by an underlying provider, propagated unchanged.
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Creates a [`Error::NotMutable`] naming the rejected type.
    #[cold]
    pub fn not_mutable(type_name: impl Into<Cow<'static, str>>) -> Error {
        Error::NotMutable(type_name.into())
    }

    /// Creates a [`Error::TypeMismatch`] carrying both the received and the
    /// expected type names.
    #[cold]
    pub fn type_mismatch(actual: &'static str, expected: &'static str) -> Error {
        Error::TypeMismatch { actual, expected }
    }

    /// Creates an [`Error::UnsupportedType`] naming the unresolvable type.
    #[cold]
    pub fn unsupported_type(type_name: impl Into<Cow<'static, str>>) -> Error {
        Error::UnsupportedType(type_name.into())
    }

    /// Wraps a provider error so it surfaces unchanged through the codec.
    #[cold]
    pub fn external(err: impl Into<anyhow::Error>) -> Error {
        Error::External(err.into())
    }
}
