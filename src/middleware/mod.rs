//! Middleware descriptors.
//!
//! A [`Middleware`] is a name plus up to two optional wrappers:
//!
//! | Capability | Signature | Runs |
//! |---|---|---|
//! | **root container** | `(RenderProps, &Render) -> Element` | once per render pass, around the whole tree |
//! | **container** | `(BoxedComponent, Props, &CreateElement) -> Element` | once per component instantiation |
//!
//! A middleware may provide either, both, or neither. Whatever it provides
//! must call through to the continuation it is handed; anything nested
//! further in is skipped otherwise.
//!
//! ```rust
//! use canopy::{Element, Middleware};
//!
//! let theme = Middleware::new("theme")
//!     .root_container(|props, render| {
//!         Element::node("ThemeProvider").child(render.call(props.provide("theme", "dark")))
//!     });
//!
//! let tagged = Middleware::new("tagged")
//!     .container(|component, props, create_element| {
//!         create_element.call(component, props.set("tagged", "yes"))
//!     });
//! # let _ = (theme, tagged);
//! ```
//!
//! Fold them into one render hook with [`compose`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::component::BoxedComponent;
use crate::element::{Element, IntoElement};
use crate::props::{Props, RenderProps};
use crate::render::{CreateElement, Render};

mod compose;

pub use compose::compose;

pub(crate) type RootContainerFn = dyn Fn(RenderProps, &Render) -> Element + Send + Sync + 'static;
pub(crate) type ContainerFn =
    dyn Fn(BoxedComponent, Props, &CreateElement) -> Element + Send + Sync + 'static;

/// One middleware descriptor. Immutable once built; cheap to clone.
#[derive(Clone)]
pub struct Middleware {
    name: Cow<'static, str>,
    root_container: Option<Arc<RootContainerFn>>,
    container: Option<Arc<ContainerFn>>,
}

impl Middleware {
    /// A middleware that opts out of both chains. `name` shows up in
    /// diagnostics.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), root_container: None, container: None }
    }

    /// Sets the root-container wrapper, replacing any previous one.
    pub fn root_container<F, R>(mut self, f: F) -> Self
    where
        F: Fn(RenderProps, &Render) -> R + Send + Sync + 'static,
        R: IntoElement,
    {
        let wrapper: Arc<RootContainerFn> =
            Arc::new(move |props: RenderProps, render: &Render| f(props, render).into_element());
        self.root_container = Some(wrapper);
        self
    }

    /// Sets the per-element wrapper, replacing any previous one.
    pub fn container<F, R>(mut self, f: F) -> Self
    where
        F: Fn(BoxedComponent, Props, &CreateElement) -> R + Send + Sync + 'static,
        R: IntoElement,
    {
        let wrapper: Arc<ContainerFn> = Arc::new(
            move |component: BoxedComponent, props: Props, create_element: &CreateElement| {
                f(component, props, create_element).into_element()
            },
        );
        self.container = Some(wrapper);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_root_container(&self) -> bool {
        self.root_container.is_some()
    }

    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware")
            .field("name", &self.name)
            .field("root_container", &self.has_root_container())
            .field("container", &self.has_container())
            .finish()
    }
}
