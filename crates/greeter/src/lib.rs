// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Greeter
//!
//! _A greeting card that counts clicks._
//!
//! The crate holds one component, [`App`](app::App), and the small host it needs
//! to live in:
//!
//! * [`dom`] is the displayable tree a component renders into, printable as HTML or plain text.
//! * [`state`] holds the [`Counter`](state::Counter) and the [`Then`](state::Then) render signal.
//! * [`runtime`] mounts a [`Component`](runtime::Component), routes events to it and re-renders.
//!
//! ### Example
//!
//! ```
//! use greeter::prelude::*;
//!
//! let props = Props::new("Ada", 30, Person::new("scientist", "Lovelace", "England"));
//! let mut rt = Runtime::<App>::mount(props);
//!
//! rt.dispatch(&Event::click(COUNT_BUTTON)).unwrap();
//!
//! assert!(rt.view().to_string().contains("The first count button is: 1"));
//! ```
//!
//! Rendering never mutates the component. Every re-render is patched into the
//! mounted tree, so rendering twice in a row applies no changes at all.

pub mod app;
pub mod dom;
pub mod event;
pub mod props;
pub mod runtime;
pub mod state;

/// The prelude imports all that's needed to mount and drive the app.
pub mod prelude {
    pub use crate::app::{App, Msg, COUNT_BUTTON};
    pub use crate::dom::{Element, Node};
    pub use crate::event::{Event, EventKind};
    pub use crate::props::{Person, Props, PropsError};
    pub use crate::runtime::{Component, DispatchError, Render, Runtime};
    pub use crate::state::{ShouldRender, Then};
}
