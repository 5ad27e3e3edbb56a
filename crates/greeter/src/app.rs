// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The greeting card with a click counter.

use crate::dom::{Element, Node};
use crate::event::{Event, EventKind};
use crate::props::Props;
use crate::runtime::Component;
use crate::state::{Counter, Then};

pub const LOGO_SRC: &str = "http://www.flickr.com/photos/drift-words/850446";

/// Id of the button that increments the counter.
pub const COUNT_BUTTON: &str = "count-button";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Increment,
}

#[derive(Debug)]
pub struct App {
    props: Props,
    counter: Counter,
}

impl App {
    pub fn new(props: Props) -> Self {
        App {
            props,
            counter: Counter::new(),
        }
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn counter(&self) -> u64 {
        self.counter.get()
    }

    pub fn handle_click(&mut self, _: &Event) -> Then {
        if self.counter.increment() {
            Then::Render
        } else {
            Then::Stop
        }
    }

    pub fn render(&self) -> Node<Msg> {
        let Props { name, age, person } = &self.props;
        let count = self.counter.get();

        let header = Element::new("div")
            .attr("class", "App-header")
            .child(
                Element::new("img")
                    .attr("src", LOGO_SRC)
                    .attr("class", "App-logo")
                    .attr("alt", "logo"),
            )
            .child(Element::new("h2").child("Hello ").child(name))
            .child(
                Element::new("h3")
                    .child("You are ")
                    .child(*age)
                    .child(" years old"),
            )
            .child(
                Element::new("p")
                    .child("The initial count is ")
                    .child(count),
            )
            .child(
                Element::new("p")
                    .child("my favorite ")
                    .child(&person.title)
                    .child(" was ")
                    .child(&person.name)
                    .child(" of ")
                    .child(&person.nation),
            )
            .child(
                Element::new("p")
                    .child("The first count button is: ")
                    .child(count),
            )
            .child(
                Element::new("button")
                    .attr("id", COUNT_BUTTON)
                    .on(EventKind::Click, Msg::Increment)
                    .child("counter "),
            );

        Element::new("div").attr("class", "App").child(header).into()
    }
}

impl Component for App {
    type Props = Props;
    type Message = Msg;

    fn create(props: Props) -> Self {
        App::new(props)
    }

    fn update(&mut self, msg: Msg, event: &Event) -> Then {
        match msg {
            Msg::Increment => self.handle_click(event),
        }
    }

    fn view(&self) -> Node<Msg> {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Person;
    use crate::runtime::Runtime;

    fn ada() -> Props {
        Props::new("Ada", 30, Person::new("scientist", "Lovelace", "England"))
    }

    fn click() -> Event {
        Event::click(COUNT_BUTTON)
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(App::new(ada()).counter(), 0);
    }

    #[test]
    fn counts_clicks() {
        let mut app = App::new(ada());

        for n in 1..=25 {
            assert_eq!(app.handle_click(&click()), Then::Render);
            assert_eq!(app.counter(), n);
        }
    }

    #[test]
    fn renders_props_and_count() {
        let html = App::new(ada()).render().to_string();

        for needle in [
            "Hello Ada",
            "30 years old",
            "scientist was Lovelace of England",
            "The first count button is: 0",
            "The initial count is 0",
        ] {
            assert!(html.contains(needle), "`{needle}` not in {html}");
        }
    }

    #[test]
    fn renders_in_order() {
        let html = App::new(ada()).render().to_string();

        assert_eq!(
            html,
            concat!(
                "<div class=\"App\"><div class=\"App-header\">",
                "<img src=\"http://www.flickr.com/photos/drift-words/850446\" class=\"App-logo\" alt=\"logo\">",
                "<h2>Hello Ada</h2>",
                "<h3>You are 30 years old</h3>",
                "<p>The initial count is 0</p>",
                "<p>my favorite scientist was Lovelace of England</p>",
                "<p>The first count button is: 0</p>",
                "<button id=\"count-button\">counter </button>",
                "</div></div>",
            )
        );
    }

    #[test]
    fn render_is_idempotent() {
        let app = App::new(ada());
        let mut mounted = app.render();

        assert_eq!(mounted.to_string(), app.render().to_string());
        assert_eq!(mounted.patch(app.render()), 0);
        assert_eq!(app.counter(), 0);
    }

    #[test]
    fn one_click_through_runtime() {
        let mut rt = Runtime::<App>::mount(ada());

        assert_eq!(rt.dispatch(&click()), Ok(Then::Render));

        let html = rt.view().to_string();

        assert!(html.contains("The first count button is: 1"), "{html}");
        assert_eq!(rt.component().counter(), 1);
    }

    #[test]
    fn click_patches_both_counter_paragraphs() {
        let mut rt = Runtime::<App>::mount(ada());
        let seen = std::rc::Rc::new(std::cell::Cell::new(0));

        rt.on_render({
            let seen = seen.clone();
            move |_, render| seen.set(render.changes)
        });

        rt.dispatch(&click()).unwrap();

        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn button_is_wired_to_click() {
        let view = App::new(ada()).render();

        let button = view.find_by_id(COUNT_BUTTON).unwrap();

        assert_eq!(button.tag(), "button");
        assert!(button.listens_to(EventKind::Click));
        assert_eq!(
            view.find_listener(COUNT_BUTTON, EventKind::Click),
            Some(&Msg::Increment)
        );
    }

    #[test]
    fn escapes_props() {
        let props = Props::new("<script>", 1, Person::new("a & b", "c", "d"));
        let html = App::new(props).render().to_string();

        assert!(html.contains("Hello &lt;script&gt;"));
        assert!(html.contains("my favorite a &amp; b was c of d"));
    }
}
