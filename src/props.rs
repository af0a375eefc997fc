//! Property bags handed through a render pass.
//!
//! [`RenderProps`] is what the router supplies once per pass: where we are,
//! what matched, and which components to instantiate. [`Props`] is what each
//! individual component receives.

use std::collections::HashMap;

use crate::component::BoxedComponent;
use crate::context::Context;
use crate::element::Element;

// ── RenderProps ───────────────────────────────────────────────────────────────

/// Per-pass input to a [`Render`](crate::Render) hook.
///
/// Root wrappers receive it by value, may rewrite any field (most commonly
/// [`context`](RenderProps::context)), and pass it on to `render`.
#[derive(Clone, Debug, Default)]
pub struct RenderProps {
    pub(crate) location: String,
    pub(crate) route: String,
    pub(crate) params: HashMap<String, String>,
    pub(crate) components: Vec<BoxedComponent>,
    pub(crate) context: Context,
}

impl RenderProps {
    /// Props for `location` with no matched components.
    pub fn new(location: impl Into<String>) -> Self {
        Self { location: location.into(), ..Self::default() }
    }

    pub fn location(&self) -> &str { &self.location }
    /// The matched route pattern, e.g. `/users/{id}`.
    pub fn route(&self) -> &str { &self.route }
    pub fn params(&self) -> &HashMap<String, String> { &self.params }
    /// Matched components, outermost layout first and the leaf last.
    pub fn components(&self) -> &[BoxedComponent] { &self.components }
    pub fn context(&self) -> &Context { &self.context }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_component(mut self, component: BoxedComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Replaces the context wholesale.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Shorthand for `self.context.with(key, value)`.
    pub fn provide(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context = self.context.with(key, value);
        self
    }
}

// ── Props ─────────────────────────────────────────────────────────────────────

/// Input to one component instantiation.
///
/// Per-element wrappers may inject extra string attributes with
/// [`Props::set`] before passing the props on to `create_element`.
#[derive(Clone, Debug, Default)]
pub struct Props {
    pub(crate) location: String,
    pub(crate) route: String,
    pub(crate) params: HashMap<String, String>,
    pub(crate) context: Context,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) children: Vec<Element>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element props derived from a pass's render props. Components are not
    /// carried over; children start empty.
    pub(crate) fn from_render(props: &RenderProps) -> Self {
        Self {
            location: props.location.clone(),
            route: props.route.clone(),
            params: props.params.clone(),
            context: props.context.clone(),
            attrs: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn location(&self) -> &str { &self.location }
    pub fn route(&self) -> &str { &self.route }
    pub fn context(&self) -> &Context { &self.context }
    pub fn children(&self) -> &[Element] { &self.children }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// An injected attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn provide(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context = self.context.with(key, value);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_props_inherit_render_props() {
        let render = RenderProps::new("/users/7")
            .with_route("/users/{id}")
            .with_param("id", "7")
            .provide("theme", "dark");

        let props = Props::from_render(&render);
        assert_eq!(props.location(), "/users/7");
        assert_eq!(props.route(), "/users/{id}");
        assert_eq!(props.param("id"), Some("7"));
        assert_eq!(props.context().get("theme"), Some("dark"));
        assert!(props.children().is_empty());
    }

    #[test]
    fn with_context_replaces_what_was_provided() {
        let render = RenderProps::new("/")
            .provide("theme", "dark")
            .with_context(Context::new().with("user", "ada"));

        assert_eq!(render.context().get("theme"), None);
        assert_eq!(render.context().get("user"), Some("ada"));
    }

    #[test]
    fn element_provide_extends_inherited_context() {
        let render = RenderProps::new("/").provide("theme", "dark");
        let props = Props::from_render(&render).provide("locale", "fr");

        assert_eq!(props.context().get("theme"), Some("dark"));
        assert_eq!(props.context().get("locale"), Some("fr"));
        assert_eq!(render.context().get("locale"), None);
    }

    #[test]
    fn set_and_get_attributes() {
        let props = Props::new().set("baz_injected", "BAZ");
        assert_eq!(props.get("baz_injected"), Some("BAZ"));
        assert_eq!(props.get("missing"), None);
    }
}
