// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events delivered by a host to a mounted component.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Click => f.write_str("click"),
        }
    }
}

/// An event aimed at the element carrying the `target` id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    target: String,
}

impl Event {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Event {
            kind,
            target: target.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Event::new(EventKind::Click, target)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}
