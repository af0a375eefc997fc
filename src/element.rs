//! Renderable element tree and the [`IntoElement`] conversion trait.
//!
//! An [`Element`] is what every component, wrapper and render hook returns.
//! It is a plain value: build it, nest it, print it. `Display` renders markup
//! so the output of a whole render pass can be inspected as a string.

use std::borrow::Cow;
use std::fmt;

// ── Element ───────────────────────────────────────────────────────────────────

/// A node in the rendered tree.
///
/// ```rust
/// use canopy::Element;
///
/// let el = Element::node("Greeting")
///     .attr("lang", "en")
///     .child(Element::text("hello"));
///
/// assert_eq!(el.to_string(), r#"<Greeting lang="en">hello</Greeting>"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Element {
    #[default]
    Empty,
    Text(String),
    Node {
        name: Cow<'static, str>,
        attrs: Vec<(String, String)>,
        children: Vec<Element>,
    },
}

impl Element {
    /// A text leaf. Escaped when rendered.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// A named node with no attributes and no children.
    pub fn node(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Node { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Adds an attribute. No-op on `Empty` and `Text`.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Node { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    /// Appends a child. `Empty` children are dropped; no-op on `Empty` and `Text`.
    pub fn child(mut self, child: impl IntoElement) -> Self {
        let child = child.into_element();
        if child.is_empty() {
            return self;
        }
        if let Self::Node { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Appends every child from `iter`.
    pub fn children<I>(self, iter: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoElement,
    {
        iter.into_iter().fold(self, |el, c| el.child(c))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The node name, if this is a node.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Node { name, .. } => Some(name.as_ref()),
            _ => None,
        }
    }

    /// Attribute lookup on a node.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        match self {
            Self::Node { attrs, .. } => attrs.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn child_nodes(&self) -> &[Element] {
        match self {
            Self::Node { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Concatenated text of the whole subtree, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(t) => out.push_str(t),
            Self::Node { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(t) => write_escaped(f, t),
            Self::Node { name, attrs, children } => {
                write!(f, "<{name}")?;
                for (k, v) in attrs {
                    write!(f, " {k}=\"")?;
                    write_escaped(f, v)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                for c in children {
                    write!(f, "{c}")?;
                }
                write!(f, "</{name}>")
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    for ch in s.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            c   => write!(f, "{c}")?,
        }
    }
    Ok(())
}

// ── IntoElement ───────────────────────────────────────────────────────────────

/// Conversion into an [`Element`].
///
/// Lets components return a bare string instead of building a text node.
pub trait IntoElement {
    fn into_element(self) -> Element;
}

impl IntoElement for Element {
    fn into_element(self) -> Element { self }
}

impl IntoElement for &'static str {
    fn into_element(self) -> Element { Element::text(self) }
}

impl IntoElement for String {
    fn into_element(self) -> Element { Element::text(self) }
}

impl IntoElement for () {
    fn into_element(self) -> Element { Element::Empty }
}

impl<T: IntoElement> IntoElement for Option<T> {
    fn into_element(self) -> Element {
        self.map_or(Element::Empty, IntoElement::into_element)
    }
}
