// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single-threaded host for one mounted [`Component`].
//!
//! The runtime is passive: nothing happens until the host calls
//! [`Runtime::dispatch`]. A dispatched event is routed to the listener bound on
//! its target element, the component updates its own state, and if it asks for
//! it the view is rendered again, patched into the mounted tree and every
//! [`on_render`](Runtime::on_render) observer is notified.

use std::error;
use std::fmt;

use crate::dom::Node;
use crate::event::{Event, EventKind};
use crate::state::{ShouldRender, Then};

pub trait Component {
    type Props;

    /// Message bound to listeners in the rendered view and handed back to
    /// [`update`](Component::update) when that listener fires.
    type Message: Clone;

    fn create(props: Self::Props) -> Self;

    fn update(&mut self, msg: Self::Message, event: &Event) -> Then;

    /// Project the current state into a tree. Must not mutate the component.
    fn view(&self) -> Node<Self::Message>;
}

/// Passed to [`on_render`](Runtime::on_render) observers after each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Render {
    /// How many times the component has been rendered, the initial mount included.
    pub count: usize,
    /// Changes applied to the mounted tree by this render.
    pub changes: usize,
}

type Observer<M> = Box<dyn FnMut(&Node<M>, Render)>;

pub struct Runtime<C: Component> {
    component: C,
    mounted: Node<C::Message>,
    renders: usize,
    observers: Vec<Observer<C::Message>>,
}

impl<C: Component> Runtime<C> {
    /// Create the component from `props` and render it for the first time.
    pub fn mount(props: C::Props) -> Self {
        let component = C::create(props);
        let mounted = component.view();

        Runtime {
            component,
            mounted,
            renders: 1,
            observers: Vec::new(),
        }
    }

    /// Subscribe to renders following the initial mount.
    pub fn on_render<F>(&mut self, handler: F)
    where
        F: FnMut(&Node<C::Message>, Render) + 'static,
    {
        self.observers.push(Box::new(handler));
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    /// The currently mounted tree.
    pub fn view(&self) -> &Node<C::Message> {
        &self.mounted
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Deliver `event` to the component.
    ///
    /// Returns whether the view was rendered again, or an error if no element
    /// with the event's target id listens to that kind of event.
    pub fn dispatch(&mut self, event: &Event) -> Result<Then, DispatchError> {
        let msg = self
            .mounted
            .find_listener(event.target(), event.kind())
            .cloned()
            .ok_or_else(|| DispatchError::NoListener {
                kind: event.kind(),
                target: event.target().into(),
            })?;

        let then = self.component.update(msg, event);

        if then.should_render() {
            self.render();
        }

        Ok(then)
    }

    /// Render the component again without an event, returning the number of
    /// changes patched into the mounted tree.
    pub fn refresh(&mut self) -> usize {
        self.render().changes
    }

    fn render(&mut self) -> Render {
        let changes = self.mounted.patch(self.component.view());

        self.renders += 1;

        let render = Render {
            count: self.renders,
            changes,
        };

        for observer in &mut self.observers {
            observer(&self.mounted, render);
        }

        render
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    NoListener { kind: EventKind, target: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoListener { kind, target } => {
                write!(f, "no {kind} listener on element `#{target}`")
            }
        }
    }
}

impl error::Error for DispatchError {}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::dom::Element;

    /// Toggles between two labels, ignoring repeated presses of the same one.
    struct Toggle {
        on: bool,
    }

    #[derive(Clone)]
    enum Msg {
        On,
        Off,
    }

    impl Component for Toggle {
        type Props = bool;
        type Message = Msg;

        fn create(on: bool) -> Self {
            Toggle { on }
        }

        fn update(&mut self, msg: Msg, _: &Event) -> Then {
            let on = matches!(msg, Msg::On);

            if self.on == on {
                return Then::Stop;
            }

            self.on = on;
            Then::Render
        }

        fn view(&self) -> Node<Msg> {
            Element::new("div")
                .child(Element::new("p").child(if self.on { "on" } else { "off" }))
                .child(Element::new("button").attr("id", "on").on(EventKind::Click, Msg::On))
                .child(Element::new("button").attr("id", "off").on(EventKind::Click, Msg::Off))
                .into()
        }
    }

    #[test]
    fn mount_renders_once() {
        let rt = Runtime::<Toggle>::mount(false);

        assert_eq!(rt.renders(), 1);
        assert_eq!(rt.view().text_content(), "off");
    }

    #[test]
    fn dispatch_renders_and_notifies() {
        let mut rt = Runtime::<Toggle>::mount(false);
        let seen = Rc::new(RefCell::new(Vec::new()));

        rt.on_render({
            let seen = seen.clone();
            move |view, render| seen.borrow_mut().push((view.text_content(), render))
        });

        assert_eq!(rt.dispatch(&Event::click("on")), Ok(Then::Render));
        assert_eq!(
            *seen.borrow(),
            [("on".to_string(), Render { count: 2, changes: 1 })]
        );
    }

    #[test]
    fn silent_update_skips_render() {
        let mut rt = Runtime::<Toggle>::mount(false);

        assert_eq!(rt.dispatch(&Event::click("off")), Ok(Then::Stop));
        assert_eq!(rt.renders(), 1);
    }

    #[test]
    fn refresh_without_change_patches_nothing() {
        let mut rt = Runtime::<Toggle>::mount(true);

        assert_eq!(rt.refresh(), 0);
        assert_eq!(rt.renders(), 2);
    }

    #[test]
    fn unknown_target_is_an_error() {
        let mut rt = Runtime::<Toggle>::mount(false);

        let err = rt.dispatch(&Event::click("nope")).unwrap_err();

        assert_eq!(err.to_string(), "no click listener on element `#nope`");
        assert_eq!(rt.renders(), 1);
    }
}
