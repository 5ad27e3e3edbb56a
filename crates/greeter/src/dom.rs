// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The displayable tree produced by rendering a component.
//!
//! A [`Node`] is either an [`Element`] or a piece of [`Text`]. Elements can carry
//! listeners that bind an [`EventKind`] to a component message `M`, which is how
//! a rendered button is wired back to the component that rendered it.
//!
//! Mounted trees are never rebuilt from scratch: [`Node::patch`] diffs a fresh
//! render into the mounted tree and only touches what changed.

use std::fmt::{self, Display, Write};

use crate::event::EventKind;

/// Elements that never have children and are written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub struct Text(String);

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text(text.into())
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text(text)
    }
}

macro_rules! impl_int_text {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Text {
                fn from(n: $t) -> Self {
                    Text(itoa::Buffer::new().format(n).to_owned())
                }
            }

            impl<M> From<$t> for Node<M> {
                fn from(n: $t) -> Self {
                    Node::Text(n.into())
                }
            }
        )*
    };
}

impl_int_text!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[derive(Debug, Clone)]
pub struct Element<M> {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node<M>>,
    listeners: Vec<(EventKind, M)>,
}

#[derive(Debug, Clone)]
pub enum Node<M> {
    Element(Element<M>),
    Text(Text),
}

impl<M> Element<M> {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();

        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, old)) => *old = value,
            None => self.attrs.push((name, value)),
        }

        self
    }

    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Bind `msg` to be delivered to the owning component whenever this
    /// element receives an event of the given `kind`.
    pub fn on(mut self, kind: EventKind, msg: M) -> Self {
        self.listeners.push((kind, msg));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node<M>] {
        &self.children
    }

    pub fn listens_to(&self, kind: EventKind) -> bool {
        self.listeners.iter().any(|(k, _)| *k == kind)
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

    fn patch(&mut self, new: Element<M>) -> usize {
        let mut changes = 0;

        if self.attrs != new.attrs {
            self.attrs = new.attrs;
            changes += 1;
        }

        // Listeners are rebound on every render and never count as a change.
        self.listeners = new.listeners;

        if self.children.len() != new.children.len() {
            self.children = new.children;
            return changes + 1;
        }

        for (old, new) in self.children.iter_mut().zip(new.children) {
            changes += old.patch(new);
        }

        changes
    }
}

impl<M> Node<M> {
    /// Diff `new` into `self`, replacing only the parts that differ.
    /// Returns the number of changes applied, `0` meaning the trees were equal.
    pub fn patch(&mut self, new: Node<M>) -> usize {
        match (self, new) {
            (Node::Text(old), Node::Text(new)) => {
                if *old != new {
                    *old = new;
                    1
                } else {
                    0
                }
            }
            (Node::Element(old), Node::Element(new)) if old.tag == new.tag => old.patch(new),
            (this, new) => {
                *this = new;
                1
            }
        }
    }

    /// Find the message bound to `kind` on the element with the given `id` attribute.
    pub fn find_listener(&self, id: &str, kind: EventKind) -> Option<&M> {
        let el = match self {
            Node::Element(el) => el,
            Node::Text(_) => return None,
        };

        if el.get_attr("id") == Some(id) {
            if let Some((_, msg)) = el.listeners.iter().find(|(k, _)| *k == kind) {
                return Some(msg);
            }
        }

        el.children
            .iter()
            .find_map(|child| child.find_listener(id, kind))
    }

    /// Find the first element with the given `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&Element<M>> {
        match self {
            Node::Element(el) if el.get_attr("id") == Some(id) => Some(el),
            Node::Element(el) => el.children.iter().find_map(|child| child.find_by_id(id)),
            Node::Text(_) => None,
        }
    }

    /// All text in document order, with no separators.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text.as_str()),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Plain text rendering for terminals: every element holding only text
    /// becomes a line, images show their `alt` and buttons are bracketed.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_lines(&mut out);
        out
    }

    fn write_lines(&self, out: &mut String) {
        let el = match self {
            Node::Text(text) => {
                out.push_str(text.as_str());
                out.push('\n');
                return;
            }
            Node::Element(el) => el,
        };

        if el.is_void() {
            if let Some(alt) = el.get_attr("alt") {
                let _ = writeln!(out, "[{alt}]");
            }
            return;
        }

        if el.children.iter().all(|c| matches!(c, Node::Text(_))) {
            let line = self.text_content();

            if el.tag == "button" {
                let _ = writeln!(out, "[ {} ]", line.trim());
            } else if !line.is_empty() {
                out.push_str(&line);
                out.push('\n');
            }
            return;
        }

        el.children.iter().for_each(|c| c.write_lines(out));
    }
}

impl<M> From<Element<M>> for Node<M> {
    fn from(el: Element<M>) -> Self {
        Node::Element(el)
    }
}

impl<M> From<Text> for Node<M> {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl<M> From<&str> for Node<M> {
    fn from(text: &str) -> Self {
        Node::Text(text.into())
    }
}

impl<M> From<String> for Node<M> {
    fn from(text: String) -> Self {
        Node::Text(text.into())
    }
}

impl<M> From<&String> for Node<M> {
    fn from(text: &String) -> Self {
        Node::Text(text.as_str().into())
    }
}

/// HTML escaping of text and attribute values.
struct Escape<'a>(&'a str);

impl Display for Escape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;

        while let Some(idx) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..idx])?;
            f.write_str(match rest.as_bytes()[idx] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            })?;
            rest = &rest[idx + 1..];
        }

        f.write_str(rest)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Escape(&self.0).fmt(f)
    }
}

impl<M> Display for Element<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;

        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{}\"", Escape(value))?;
        }

        f.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        for child in &self.children {
            child.fmt(f)?;
        }

        write!(f, "</{}>", self.tag)
    }
}

impl<M> Display for Node<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(text) => text.fmt(f),
        }
    }
}
