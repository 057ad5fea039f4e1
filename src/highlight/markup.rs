// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A small owned tree over rendered passage markup.
//!
//! Rendered passages are XHTML fragments: inline elements wrapping one word
//! each, grouped into sentence or line containers. We parse them with
//! quick-xml into an owned tree, edit class lists and wrap sibling ranges,
//! and serialize back out.
//!
//! Text and attribute values are kept in their raw, still-escaped form so a
//! parse/serialize round trip never re-escapes entities (`&amp;`, `&nbsp;`).
//! Only [`Element::text_content`] unescapes, for comparison.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use std::fmt::Write as _;

use crate::error::{Result, SearchError};

/// Tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw (escaped) character data.
    Text(String),
    /// Comments, CDATA and processing instructions, serialized verbatim.
    Verbatim(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attribute name and raw (escaped) value, in source order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Written as `<name/>` when it has no children.
    pub self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add `class` unless it is already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let updated = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim_end(), class)
            }
            _ => class.to_string(),
        };
        self.set_attribute("class", updated);
    }

    /// Concatenated, unescaped text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(raw) => out.push_str(&unescape_lossy(raw)),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Verbatim(_) => {}
        }
    }
}

fn unescape_lossy(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::unescape(raw).unwrap_or(Cow::Borrowed(raw))
}

/// An editable passage fragment (zero or more top-level nodes).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Passage {
    pub nodes: Vec<Node>,
}

impl Passage {
    pub fn parse(markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.trim_text(false);

        let mut roots: Vec<Node> = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            let event = reader.read_event().map_err(|e| {
                SearchError::MalformedMarkup(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                ))
            })?;
            let node = match event {
                Event::Start(start) => {
                    stack.push(element_from(&start)?);
                    continue;
                }
                Event::End(_) => match stack.pop() {
                    Some(el) => Node::Element(el),
                    None => {
                        return Err(SearchError::MalformedMarkup(
                            "closing tag without an open element".into(),
                        ))
                    }
                },
                Event::Empty(start) => {
                    let mut el = element_from(&start)?;
                    el.self_closing = true;
                    Node::Element(el)
                }
                Event::Text(text) => Node::Text(lossy(&text.into_inner())),
                Event::CData(data) => {
                    Node::Verbatim(format!("<![CDATA[{}]]>", lossy(&data.into_inner())))
                }
                Event::Comment(comment) => {
                    Node::Verbatim(format!("<!--{}-->", lossy(&comment.into_inner())))
                }
                Event::PI(pi) => Node::Verbatim(format!("<?{}?>", lossy(&pi.into_inner()))),
                Event::DocType(doctype) => {
                    Node::Verbatim(format!("<!DOCTYPE {}>", lossy(&doctype.into_inner())))
                }
                Event::Decl(_) => continue,
                Event::Eof => break,
            };
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => roots.push(node),
            }
        }

        if let Some(open) = stack.last() {
            return Err(SearchError::MalformedMarkup(format!(
                "unclosed <{}> element",
                open.name
            )));
        }
        Ok(Self { nodes: roots })
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_nodes(&self.nodes, &mut out);
        out
    }

    /// Children of the element at `path`; the empty path is the top level.
    pub fn children(&self, path: &[usize]) -> Option<&Vec<Node>> {
        if path.is_empty() {
            return Some(&self.nodes);
        }
        self.element(path).map(|el| &el.children)
    }

    pub fn children_mut(&mut self, path: &[usize]) -> Option<&mut Vec<Node>> {
        if path.is_empty() {
            return Some(&mut self.nodes);
        }
        self.element_mut(path).map(|el| &mut el.children)
    }

    /// Element reached by following child indices from the top level.
    pub fn element(&self, path: &[usize]) -> Option<&Element> {
        let (first, rest) = path.split_first()?;
        let mut current = match self.nodes.get(*first)? {
            Node::Element(el) => el,
            _ => return None,
        };
        for idx in rest {
            current = match current.children.get(*idx)? {
                Node::Element(el) => el,
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn element_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let (first, rest) = path.split_first()?;
        let mut current = match self.nodes.get_mut(*first)? {
            Node::Element(el) => el,
            _ => return None,
        };
        for idx in rest {
            current = match current.children.get_mut(*idx)? {
                Node::Element(el) => el,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Paths of elements accepted by `is_match`, in document order. Matched
    /// elements are not searched further.
    pub fn find_paths<F>(&self, is_match: F) -> Vec<Vec<usize>>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        let mut path = Vec::new();
        find_in(&self.nodes, &is_match, &mut path, &mut found);
        found
    }

    /// Replace children `lo..=hi` of the element at `parent` with a single new
    /// element wrapping them. Returns false when the range is invalid.
    pub fn wrap_children(&mut self, parent: &[usize], lo: usize, hi: usize, wrapper: Element) -> bool {
        let Some(children) = self.children_mut(parent) else {
            return false;
        };
        if lo > hi || hi >= children.len() {
            return false;
        }
        let mut wrapper = wrapper;
        wrapper.self_closing = false;
        wrapper.children = children.drain(lo..=hi).collect();
        children.insert(lo, Node::Element(wrapper));
        true
    }
}

fn find_in<F>(nodes: &[Node], is_match: &F, path: &mut Vec<usize>, found: &mut Vec<Vec<usize>>)
where
    F: Fn(&Element) -> bool,
{
    for (i, node) in nodes.iter().enumerate() {
        if let Node::Element(el) = node {
            path.push(i);
            if is_match(el) {
                found.push(path.clone());
            } else {
                find_in(&el.children, is_match, path, found);
            }
            path.pop();
        }
    }
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| SearchError::MalformedMarkup(e.to_string()))?
        .to_string();
    let mut element = Element::new(name);
    let mut attributes = start.attributes();
    attributes.with_checks(false);
    for attr in attributes {
        let attr = attr.map_err(|e| SearchError::MalformedMarkup(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| SearchError::MalformedMarkup(e.to_string()))?
            .to_string();
        element.attributes.push((key, lossy(&attr.value)));
    }
    Ok(element)
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(raw) | Node::Verbatim(raw) => out.push_str(raw),
            Node::Element(el) => write_element(el, out),
        }
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for (key, value) in &el.attributes {
        let _ = write!(out, " {}=\"{}\"", key, value.replace('"', "&quot;"));
    }
    if el.self_closing && el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    write_nodes(&el.children, out);
    let _ = write!(out, "</{}>", el.name);
}
