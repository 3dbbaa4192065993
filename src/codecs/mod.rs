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

//! Builtin leaf codecs and the process-wide builtin adaptor table.
//!
//! Each builtin type implements [`ToText`]/[`FromText`] directly; the table
//! maps its [`TypeId`] to an erased adaptor that hands out a codec wrapping
//! the caller's borrow. The table is populated exactly once, before any
//! resolution can observe it, and is read-only afterward — safe for
//! unsynchronized concurrent reads.

mod bool;
mod bytes;
mod complex;
mod datetime;
mod number;
mod string;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};

use crate::adaptor::{erase, AnyAdaptor};
use crate::convert::{FromText, TextCodec, ToText};
use crate::error::Error;

/// The builtin factory: the borrow itself is the codec, via the `&mut C`
/// blanket impls.
fn borrow_codec<T: ToText + FromText + 'static>(
    value: &mut T,
) -> Result<Box<dyn TextCodec + '_>, Error> {
    Ok(Box::new(value))
}

fn register<T: Any + ToText + FromText>(table: &mut HashMap<TypeId, AnyAdaptor>) {
    let (type_id, adaptor) = erase::<T>(borrow_codec::<T>);
    table.insert(type_id, adaptor);
}

static BUILTIN_ADAPTORS: LazyLock<HashMap<TypeId, AnyAdaptor>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    register::<bool>(&mut table);
    register::<String>(&mut table);
    register::<i8>(&mut table);
    register::<i16>(&mut table);
    register::<i32>(&mut table);
    register::<i64>(&mut table);
    register::<isize>(&mut table);
    register::<u8>(&mut table);
    register::<u16>(&mut table);
    register::<u32>(&mut table);
    register::<u64>(&mut table);
    register::<usize>(&mut table);
    register::<f32>(&mut table);
    register::<f64>(&mut table);
    register::<Complex32>(&mut table);
    register::<Complex64>(&mut table);
    register::<Vec<u8>>(&mut table);
    register::<DateTime<Utc>>(&mut table);
    table
});

pub(crate) fn builtin_adaptors() -> &'static HashMap<TypeId, AnyAdaptor> {
    &BUILTIN_ADAPTORS
}
