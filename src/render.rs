//! The two continuations of a render pass.
//!
//! [`Render`] turns a pass's [`RenderProps`] into the whole tree.
//! [`CreateElement`] turns one component plus its [`Props`] into one element.
//! The router calls the first once per pass; the default tree render calls
//! the second once per matched component.
//!
//! Both are cheap to clone (`Arc` inside) and `Send + Sync`, so a composed
//! render hook is built once and shared for the lifetime of the router.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use crate::component::BoxedComponent;
use crate::element::Element;
use crate::props::{Props, RenderProps};

type RenderFn = dyn Fn(RenderProps) -> Element + Send + Sync + 'static;
type CreateElementFn = dyn Fn(BoxedComponent, Props) -> Element + Send + Sync + 'static;

// ── Render ────────────────────────────────────────────────────────────────────

/// A top-level render hook: render props in, element tree out.
///
/// This is what [`compose`](crate::compose) returns and what a
/// [`Router`](crate::Router) invokes. Root-container wrappers receive the next
/// layer as a `&Render` and delegate with [`Render::call`].
#[derive(Clone)]
pub struct Render {
    f: Arc<RenderFn>,
    called: Arc<AtomicBool>,
}

impl Render {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(RenderProps) -> Element + Send + Sync + 'static,
    {
        Self { f: Arc::new(f), called: Arc::new(AtomicBool::new(false)) }
    }

    /// Invokes this layer.
    pub fn call(&self, props: RenderProps) -> Element {
        self.called.store(true, Ordering::Relaxed);
        (self.f)(props)
    }

    /// Same function, fresh "was called" flag. One is made per wrapper
    /// invocation so a skipped continuation can be detected.
    pub(crate) fn tracked(&self) -> Self {
        Self { f: Arc::clone(&self.f), called: Arc::new(AtomicBool::new(false)) }
    }

    pub(crate) fn was_called(&self) -> bool {
        self.called.load(Ordering::Relaxed)
    }
}

/// The base case: [`render_tree`] with native instantiation.
impl Default for Render {
    fn default() -> Self {
        let create_element = CreateElement::native();
        Self::from_fn(move |props| render_tree(props, &create_element))
    }
}

impl fmt::Debug for Render {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Render").finish_non_exhaustive()
    }
}

// ── CreateElement ─────────────────────────────────────────────────────────────

/// Element-creation strategy: component and props in, element out.
///
/// Per-element wrappers receive the next layer as a `&CreateElement` and
/// delegate with [`CreateElement::call`], possibly with a different component
/// or rewritten props.
#[derive(Clone)]
pub struct CreateElement {
    f: Arc<CreateElementFn>,
    called: Arc<AtomicBool>,
}

impl CreateElement {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(BoxedComponent, Props) -> Element + Send + Sync + 'static,
    {
        Self { f: Arc::new(f), called: Arc::new(AtomicBool::new(false)) }
    }

    /// Native instantiation: renders the component and wraps the output in a
    /// node named after it.
    pub fn native() -> Self {
        Self::from_fn(|component, props| {
            trace!(component = component.name(), "instantiating");
            Element::node(component.name().to_owned()).child(component.render(&props))
        })
    }

    pub fn call(&self, component: BoxedComponent, props: Props) -> Element {
        self.called.store(true, Ordering::Relaxed);
        (self.f)(component, props)
    }

    pub(crate) fn tracked(&self) -> Self {
        Self { f: Arc::clone(&self.f), called: Arc::new(AtomicBool::new(false)) }
    }

    pub(crate) fn was_called(&self) -> bool {
        self.called.load(Ordering::Relaxed)
    }
}

impl Default for CreateElement {
    fn default() -> Self { Self::native() }
}

impl fmt::Debug for CreateElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateElement").finish_non_exhaustive()
    }
}

// ── Default tree render ───────────────────────────────────────────────────────

/// Renders the matched component chain using `create_element`.
///
/// The leaf is created first; each enclosing component is then created with
/// the previous element as its only child. Every component gets the pass's
/// location, route, params and context. No components renders
/// [`Element::Empty`].
pub fn render_tree(props: RenderProps, create_element: &CreateElement) -> Element {
    let base = Props::from_render(&props);
    props.components.iter().rev().fold(Element::Empty, |inner, component| {
        create_element.call(Arc::clone(component), base.clone().child(inner))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{boxed, component};

    fn layout() -> BoxedComponent {
        boxed(component("Layout", |p: &Props| {
            Element::node("main").children(p.children().iter().cloned())
        }))
    }

    fn page() -> BoxedComponent {
        boxed(component("Page", |p: &Props| format!("page {}", p.param("id").unwrap_or("?"))))
    }

    #[test]
    fn nests_leaf_inside_layouts() {
        let props = RenderProps::new("/p/3")
            .with_param("id", "3")
            .with_component(layout())
            .with_component(page());

        let tree = render_tree(props, &CreateElement::native());
        assert_eq!(tree.to_string(), "<Layout><main><Page>page 3</Page></main></Layout>");
    }

    #[test]
    fn no_components_renders_empty() {
        assert_eq!(Render::default().call(RenderProps::new("/")), Element::Empty);
    }

    #[test]
    fn call_marks_continuation_used() {
        let render = Render::default().tracked();
        assert!(!render.was_called());
        render.call(RenderProps::new("/"));
        assert!(render.was_called());
    }

    #[test]
    fn tracked_copies_do_not_share_the_flag() {
        let create = CreateElement::native();
        let a = create.tracked();
        let b = create.tracked();
        a.call(page(), Props::new());
        assert!(a.was_called());
        assert!(!b.was_called());
    }
}
