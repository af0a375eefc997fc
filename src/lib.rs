//! # canopy
//!
//! Middleware composition for component-tree routers.
//! A list of middleware goes in; one render hook comes out.
//!
//! ## The contract
//!
//! A render pass has two call sites a middleware may want to wrap:
//!
//! - **the whole tree**, once per pass: inject context, add providers, rewrite
//!   the render props (`root_container`)
//! - **each component**, once per instantiation: swap the component, inject
//!   props (`container`)
//!
//! [`compose`] folds both right-to-left into two independent continuation
//! chains. The first middleware is outermost. A middleware that skips a
//! capability is skipped by that chain and nothing else.
//!
//! Context is explicit. Values a wrapper provides travel down inside
//! [`RenderProps`] and [`Props`]; there is no ambient lookup.
//!
//! ## Quick start
//!
//! ```rust
//! use canopy::{Element, Middleware, Props, Router, compose};
//!
//! fn greeting(props: &Props) -> String {
//!     let user = props.context().get("user").unwrap_or("stranger");
//!     let tone = props.get("tone").unwrap_or("plain");
//!     format!("hello {user} ({tone})")
//! }
//!
//! let session = Middleware::new("session")
//!     .root_container(|props, render| {
//!         Element::node("Session").child(render.call(props.provide("user", "ada")))
//!     });
//!
//! let friendly = Middleware::new("friendly")
//!     .container(|component, props, create_element| {
//!         create_element.call(component, props.set("tone", "warm"))
//!     });
//!
//! let router = Router::new()
//!     .on("/", greeting)
//!     .render_with(compose([session, friendly]));
//!
//! let page = router.render("/").unwrap();
//! assert_eq!(page.text_content(), "hello ada (warm)");
//! ```

mod component;
mod context;
mod element;
mod error;
mod props;
mod render;
mod router;

pub mod middleware;

#[doc(hidden)]
pub use component::ErasedComponent;
pub use component::{BoxedComponent, Component, Named, boxed, component};
pub use context::Context;
pub use element::{Element, IntoElement};
pub use error::Error;
pub use middleware::{Middleware, compose};
pub use props::{Props, RenderProps};
pub use render::{CreateElement, Render, render_tree};
pub use router::Router;
