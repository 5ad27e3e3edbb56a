// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Properties supplied to the [`App`](crate::app::App) by its caller.
//!
//! Every field is required. Deserializing props with a field missing fails with
//! an error naming that field instead of rendering a blank.

use std::error;
use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    pub title: String,
    #[serde(rename = "nm")]
    pub name: String,
    pub nation: String,
}

impl Person {
    pub fn new(
        title: impl Into<String>,
        name: impl Into<String>,
        nation: impl Into<String>,
    ) -> Self {
        Person {
            title: title.into(),
            name: name.into(),
            nation: nation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Props {
    pub name: String,
    pub age: u32,
    pub person: Person,
}

impl Props {
    pub fn new(name: impl Into<String>, age: u32, person: Person) -> Self {
        Props {
            name: name.into(),
            age,
            person,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PropsError> {
        serde_json::from_str(json).map_err(PropsError)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PropsError> {
        serde_json::from_reader(reader).map_err(PropsError)
    }
}

#[derive(Debug)]
pub struct PropsError(serde_json::Error);

impl PropsError {
    /// Whether the input was unreadable, as opposed to malformed or incomplete.
    pub fn is_io(&self) -> bool {
        self.0.is_io()
    }
}

impl fmt::Display for PropsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid props: {}", self.0)
    }
}

impl error::Error for PropsError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}
