//! Declarative element tree produced by views.

use core::fmt;
use std::sync::Arc;

use crate::style::{ClassName, Style};

/// A click handler embedded in an element.
///
/// Shared so a host can take the handler out of the tree and run it after
/// releasing whatever lock guards the tree.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => element.fmt(f),
            Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

/// An element with an optional scoped style and click handler.
///
/// `class` stays empty until a renderer registers `style` in its style sheet.
pub struct Element {
    pub tag: &'static str,
    pub style: Option<Style>,
    pub class: Option<ClassName>,
    pub children: Vec<Node>,
    pub on_click: Option<Handler>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            style: None,
            class: None,
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
            }
        }
    }

    /// Depth-first walk over this element and every descendant element.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(element) = child {
                element.walk(visit);
            }
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        visit(self);
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.walk_mut(visit);
            }
        }
    }

    /// Invoke the click handler, if any. Returns whether one was bound.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(class) = &self.class {
            out.push_str(" class=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(class.as_str()));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("class", &self.class)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
