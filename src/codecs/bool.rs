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

use crate::convert::{FromText, ToText};
use crate::error::Error;
use crate::impl_probe;

impl ToText for bool {
    fn to_text(&self) -> Result<String, Error> {
        Ok(self.to_string())
    }
}

// Accepts the 1/t/T/true/TRUE/True family on either side; encoding always
// emits "true"/"false".
impl FromText for bool {
    fn from_text(&mut self, text: &str) -> Result<(), Error> {
        *self = match text {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => true,
            "0" | "f" | "F" | "false" | "FALSE" | "False" => false,
            _ => {
                return Err(Error::external(anyhow::anyhow!(
                    "invalid bool value: {text:?}"
                )))
            }
        };
        Ok(())
    }
}

impl_probe!(bool: ToText, FromText);
