//! Component trait and type erasure.
//!
//! # How components are stored
//!
//! A route table holds components of *different* types side by side, and a
//! per-element wrapper may swap one component for another mid-pass. Both need
//! a single uniform type, so every component is erased behind
//! `dyn ErasedComponent` and shared through an `Arc`:
//!
//! ```text
//! fn home(props: &Props) -> Element { … }     ← user writes this
//!        ↓ router.on("/", home)
//! home.into_boxed_component()                 ← Component blanket impl
//!        ↓
//! Arc::new(FnComponent(home))                 ← heap-allocated wrapper
//!        ↓  stored as BoxedComponent = Arc<dyn ErasedComponent>
//! component.render(&props)  at render time    ← one vtable dispatch
//! ```
//!
//! Cloning a [`BoxedComponent`] is one atomic increment.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::element::{Element, IntoElement};
use crate::props::Props;

// ── Internal types ────────────────────────────────────────────────────────────

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` because it appears in [`BoxedComponent`], which
/// wrappers receive and pass on.
#[doc(hidden)]
pub trait ErasedComponent {
    /// Display name, used as the node name on native instantiation.
    fn name(&self) -> &str;
    fn render(&self, props: &Props) -> Element;
}

/// A type-erased component reference.
pub type BoxedComponent = Arc<dyn ErasedComponent + Send + Sync + 'static>;

impl fmt::Debug for dyn ErasedComponent + Send + Sync + 'static {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Component").field(&self.name()).finish()
    }
}

// ── Public Component trait ────────────────────────────────────────────────────

/// Implemented for every valid component.
///
/// Satisfied by any function with the signature
///
/// ```text
/// fn name(props: &Props) -> impl IntoElement
/// ```
///
/// and by [`Named`] values built with [`component`]. Sealed: only the impls in
/// this module exist.
pub trait Component: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_component(self) -> BoxedComponent;
}

mod private {
    pub trait Sealed {}
}

impl<F, R> private::Sealed for F
where
    F: Fn(&Props) -> R + Send + Sync + 'static,
    R: IntoElement,
{
}

impl<F, R> Component for F
where
    F: Fn(&Props) -> R + Send + Sync + 'static,
    R: IntoElement,
{
    fn into_boxed_component(self) -> BoxedComponent {
        Arc::new(FnComponent { name: Cow::Borrowed(short_type_name::<F>()), f: self })
    }
}

/// A component with an explicit display name. Built by [`component`].
pub struct Named<F> {
    name: Cow<'static, str>,
    f: F,
}

/// Gives `f` an explicit display name.
///
/// Closures have no usable item name, so name them when they are rendered
/// natively:
///
/// ```rust
/// use canopy::{component, Props};
///
/// let banner = component("Banner", |_: &Props| "welcome");
/// ```
pub fn component<F, R>(name: impl Into<Cow<'static, str>>, f: F) -> Named<F>
where
    F: Fn(&Props) -> R + Send + Sync + 'static,
    R: IntoElement,
{
    Named { name: name.into(), f }
}

impl<F> private::Sealed for Named<F> {}

impl<F, R> Component for Named<F>
where
    F: Fn(&Props) -> R + Send + Sync + 'static,
    R: IntoElement,
{
    fn into_boxed_component(self) -> BoxedComponent {
        Arc::new(FnComponent { name: self.name, f: self.f })
    }
}

/// Boxes any component. Handy inside wrappers that substitute components.
pub fn boxed(component: impl Component) -> BoxedComponent {
    component.into_boxed_component()
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

struct FnComponent<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F, R> ErasedComponent for FnComponent<F>
where
    F: Fn(&Props) -> R,
    R: IntoElement,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props) -> Element {
        (self.f)(props).into_element()
    }
}

/// `my_crate::pages::home` → `home`, `my_crate::list<alloc::string::String>` →
/// `list`. Closures have no item name and fall back to `Component`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    if full.contains("{{closure}}") {
        return "Component";
    }
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
