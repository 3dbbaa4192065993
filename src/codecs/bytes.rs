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

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::convert::{FromText, ToText};
use crate::error::Error;
use crate::impl_probe;

// Standard alphabet, not URL-safe.

impl ToText for Vec<u8> {
    fn to_text(&self) -> Result<String, Error> {
        Ok(STANDARD.encode(self))
    }
}

impl FromText for Vec<u8> {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        *self = STANDARD.decode(text).map_err(Error::external)?;
        Ok(())
    }
}

impl_probe!(Vec<u8>: ToText, FromText);
