// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element and node types.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A child of an [`Element`]: either a nested element or a run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Text content.
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

/// A rendered element: a tag, ordered attributes, and children.
///
/// Attribute names are unique; setting an existing name replaces its value in place,
/// so the original insertion order is kept for printing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Set an attribute, builder style.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute only when `value` is `Some`, builder style.
    #[must_use]
    pub fn opt_attr(mut self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.set_attr(name, value);
        }
        self
    }

    /// Set a boolean-valued attribute (`"true"`/`"false"`), builder style.
    #[must_use]
    pub fn bool_attr(self, name: &'static str, value: bool) -> Self {
        self.attr(name, if value { "true" } else { "false" })
    }

    /// Set or replace an attribute.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(n, _)| *n == name)?;
        Some(self.attrs.remove(pos).1)
    }

    /// Look up an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute is present (with any value).
    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attrs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Append a child, builder style.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child only when `child` is `Some`, builder style.
    #[must_use]
    pub fn opt_child(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    /// Append several children, builder style.
    #[must_use]
    pub fn extend<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child, builder style.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// All children, including text runs.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> + '_ {
        self.children.iter().filter_map(|c| match c {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Pre-order traversal of this element and every element below it.
    pub fn walk(&self) -> Walk<'_> {
        let mut stack = Vec::new();
        stack.push(self);
        Walk { stack }
    }

    /// First element (self included) matching `pred`, in pre-order.
    pub fn find(&self, mut pred: impl FnMut(&Self) -> bool) -> Option<&Self> {
        self.walk().find(|el| pred(el))
    }

    /// First element (self included) with the given `role`.
    pub fn find_by_role(&self, role: &str) -> Option<&Self> {
        self.find(|el| el.get_attr("role") == Some(role))
    }

    /// All elements (self included) with the given `role`, in pre-order.
    pub fn find_all_by_role(&self, role: &str) -> Vec<&Self> {
        self.walk()
            .filter(|el| el.get_attr("role") == Some(role))
            .collect()
    }

    /// Concatenated text of all descendant text runs, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

/// Pre-order iterator returned by [`Element::walk`].
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        // Push in reverse so the first child is visited next.
        for child in el.children.iter().rev() {
            if let Node::Element(c) = child {
                self.stack.push(c);
            }
        }
        Some(el)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    for ch in s.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => fmt::Write::write_char(f, ch)?,
        }
    }
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"")?;
            write_escaped(f, value)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => fmt::Display::fmt(el, f),
            Self::Text(t) => write_escaped(f, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn set_attr_replaces_in_place() {
        let mut el = Element::new("button").attr("type", "button").attr("id", "a");
        el.set_attr("type", "submit");
        let attrs: Vec<_> = el.attrs().collect();
        assert_eq!(attrs, vec![("type", "submit"), ("id", "a")]);
        assert_eq!(el.remove_attr("id").as_deref(), Some("a"));
        assert!(!el.has_attr("id"));
    }

    #[test]
    fn walk_is_preorder_and_includes_self() {
        let tree = Element::new("div")
            .attr("id", "root")
            .child(
                Element::new("ul")
                    .attr("id", "list")
                    .child(Element::new("li").attr("id", "first"))
                    .child(Element::new("li").attr("id", "second")),
            )
            .child(Element::new("span").attr("id", "tail"));
        let ids: Vec<_> = tree.walk().filter_map(|el| el.get_attr("id")).collect();
        assert_eq!(ids, vec!["root", "list", "first", "second", "tail"]);
    }

    #[test]
    fn role_queries() {
        let tree = Element::new("ul")
            .attr("role", "listbox")
            .child(Element::new("li").attr("role", "option").text("A"))
            .child(Element::new("li").text("divider"))
            .child(Element::new("li").attr("role", "option").text("B"));
        assert_eq!(tree.find_by_role("listbox").map(Element::tag), Some("ul"));
        assert_eq!(tree.find_all_by_role("option").len(), 2);
        assert!(tree.find_by_role("combobox").is_none());
    }

    #[test]
    fn optional_builders_skip_none() {
        let el = Element::new("p")
            .opt_attr("id", None::<&str>)
            .opt_attr("title", Some("hi"))
            .opt_child(None::<Element>)
            .bool_attr("aria-hidden", false);
        assert_eq!(el.to_string(), r#"<p title="hi" aria-hidden="false"></p>"#);
    }

    #[test]
    fn display_escapes_text_and_attributes() {
        let el = Element::new("span")
            .attr("title", "\"quoted\" & <b>")
            .text("1 < 2 & 3 > 2");
        assert_eq!(
            el.to_string(),
            "<span title=\"&quot;quoted&quot; &amp; &lt;b&gt;\">1 &lt; 2 &amp; 3 &gt; 2</span>"
        );
    }

    #[test]
    fn text_content_concatenates_in_order() {
        let el = Element::new("div")
            .text("a")
            .child(Element::new("b").text("b").child(Element::new("i").text("c")))
            .text("d");
        assert_eq!(el.text_content(), "abcd");
    }
}
