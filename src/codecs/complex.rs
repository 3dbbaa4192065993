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

use num_complex::{Complex32, Complex64};

use crate::convert::{FromText, ToText};
use crate::error::Error;
use crate::impl_probe;

// num-complex renders `a+bi` and parses the same form back.

macro_rules! impl_complex_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> Result<String, Error> {
                    Ok(self.to_string())
                }
            }

            impl FromText for $ty {
                fn from_text(&mut self, text: &str) -> Result<(), Error> {
                    *self = text.parse().map_err(Error::external)?;
                    Ok(())
                }
            }

            impl_probe!($ty: ToText, FromText);
        )+
    };
}

impl_complex_codec!(Complex32, Complex64);
