//! Radix-tree route table and render entry point.
//!
//! Maps a location to the component chain that renders it, then hands the
//! resulting [`RenderProps`] to the render hook. Lookup is O(path-length) via
//! [`matchit`]. There is no history, no navigation, no nested route config:
//! layouts wrap every route, leaves are registered per path.

use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::component::{BoxedComponent, Component};
use crate::error::Error;
use crate::element::Element;
use crate::props::RenderProps;
use crate::render::Render;

/// The application router.
///
/// Build it once at startup; call [`Router::render`] once per pass.
/// Every builder method returns `self` so registrations chain naturally.
///
/// ```rust
/// use canopy::{Props, Router};
///
/// fn user(props: &Props) -> String {
///     format!("user {}", props.param("id").unwrap_or("?"))
/// }
///
/// let router = Router::new().on("/users/{id}", user);
/// let page = router.render("/users/42").unwrap();
/// assert_eq!(page.to_string(), "<user>user 42</user>");
/// ```
pub struct Router {
    routes: MatchitRouter<(String, BoxedComponent)>,
    layouts: Vec<BoxedComponent>,
    render: Render,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: MatchitRouter::new(), layouts: Vec::new(), render: Render::default() }
    }

    /// Register a leaf component for a path. `{name}` segments become params.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid pattern or conflicts with an existing
    /// route.
    pub fn on(mut self, path: &str, component: impl Component) -> Self {
        self.routes
            .insert(path, (path.to_owned(), component.into_boxed_component()))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Register a layout that wraps every route. The first layout registered
    /// is outermost.
    pub fn layout(mut self, component: impl Component) -> Self {
        self.layouts.push(component.into_boxed_component());
        self
    }

    /// Replace the render hook, typically with the result of
    /// [`compose`](crate::compose).
    pub fn render_with(mut self, render: Render) -> Self {
        self.render = render;
        self
    }

    /// Resolves `path` to the props of one render pass.
    pub fn resolve(&self, path: &str) -> Result<RenderProps, Error> {
        let matched = self.routes.at(path).map_err(|_| Error::NoMatch(path.to_owned()))?;
        let (route, leaf) = matched.value;

        let mut props = RenderProps::new(path).with_route(route.as_str());
        for (k, v) in matched.params.iter() {
            props = props.with_param(k, v);
        }
        for layout in &self.layouts {
            props = props.with_component(layout.clone());
        }
        Ok(props.with_component(leaf.clone()))
    }

    /// Resolves `path` and runs one render pass through the render hook.
    pub fn render(&self, path: &str) -> Result<Element, Error> {
        let props = self.resolve(path)?;
        debug!(path, route = props.route(), components = props.components().len(), "render pass");
        Ok(self.render.call(props))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
