//! Minimal canopy example — a layout, two routes and three middleware.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! Prints the markup of each render pass. Try dropping a middleware from the
//! `compose` call and watch the output change.

use canopy::{Element, Middleware, Props, Router, boxed, component, compose};

fn main() {
    tracing_subscriber::fmt::init();

    let render = compose([
        // wraps the whole tree once per pass
        Middleware::new("theme").root_container(|props, render| {
            Element::node("ThemeProvider")
                .attr("theme", "dark")
                .child(render.call(props.provide("theme", "dark")))
        }),
        Middleware::new("session").root_container(|props, render| {
            render.call(props.provide("user", "alice"))
        }),
        // runs once per component
        Middleware::new("guard").container(|target, props, create_element| {
            if target.name() == "admin" && props.context().get("user") != Some("root") {
                return create_element.call(boxed(component("Forbidden", forbidden)), props);
            }
            create_element.call(target, props)
        }),
    ]);

    let router = Router::new()
        .layout(shell)
        .on("/users/{id}", user)
        .on("/admin", admin)
        .render_with(render);

    for path in ["/users/42", "/admin", "/missing"] {
        match router.render(path) {
            Ok(page) => println!("{path}\n  {page}\n"),
            Err(e) => println!("{path}\n  error: {e}\n"),
        }
    }
}

fn shell(props: &Props) -> Element {
    Element::node("body")
        .attr("data-theme", props.context().get("theme").unwrap_or("light"))
        .children(props.children().iter().cloned())
}

// GET /users/{id}
fn user(props: &Props) -> String {
    let id = props.param("id").unwrap_or("unknown");
    let viewer = props.context().get("user").unwrap_or("anonymous");
    format!("user {id}, viewed by {viewer}")
}

fn admin(_: &Props) -> &'static str {
    "admin panel"
}

fn forbidden(_: &Props) -> &'static str {
    "403"
}
