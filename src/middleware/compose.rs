//! Folding middleware into a single render hook.
//!
//! Two independent right folds:
//!
//! ```text
//! create_element = m0.container(m1.container(… native …))
//! render         = m0.root_container(m1.root_container(… render_tree(create_element) …))
//! ```
//!
//! The first middleware is outermost, the last wraps the base case directly.
//! Middleware without a given capability is skipped for that fold only.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};

use super::{ContainerFn, Middleware, RootContainerFn};
use crate::render::{CreateElement, Render, render_tree};

/// Composes `middleware` into one render hook.
///
/// Pure: nothing runs until the returned [`Render`] is called. Build it once
/// and hand it to [`Router::render_with`](crate::Router::render_with).
///
/// ```rust
/// use canopy::{Element, Middleware, RenderProps, compose};
///
/// let render = compose([
///     Middleware::new("outer").root_container(|p, r| Element::node("Outer").child(r.call(p))),
///     Middleware::new("inner").root_container(|p, r| Element::node("Inner").child(r.call(p))),
/// ]);
///
/// assert_eq!(render.call(RenderProps::new("/")).to_string(), "<Outer><Inner></Inner></Outer>");
/// ```
pub fn compose<I>(middleware: I) -> Render
where
    I: IntoIterator<Item = Middleware>,
{
    let middleware: Vec<Middleware> = middleware.into_iter().collect();

    let containers: Vec<(Cow<'static, str>, Arc<ContainerFn>)> = middleware.iter()
        .filter_map(|m| Some((m.name.clone(), Arc::clone(m.container.as_ref()?))))
        .collect();
    let root_containers: Vec<(Cow<'static, str>, Arc<RootContainerFn>)> = middleware.iter()
        .filter_map(|m| Some((m.name.clone(), Arc::clone(m.root_container.as_ref()?))))
        .collect();

    debug!(
        middleware = middleware.len(),
        root_layers = root_containers.len(),
        element_layers = containers.len(),
        "composing middleware"
    );

    let create_element = containers.into_iter().rev()
        .fold(CreateElement::native(), |next, (name, container)| {
            CreateElement::from_fn(move |component, props| {
                let next = next.tracked();
                let element = container(component, props, &next);
                if !next.was_called() {
                    warn!(middleware = %name, chain = "container", "create_element not called, inner layers skipped");
                }
                element
            })
        });

    let base = Render::from_fn(move |props| render_tree(props, &create_element));

    root_containers.into_iter().rev()
        .fold(base, |next, (name, root_container)| {
            Render::from_fn(move |props| {
                let next = next.tracked();
                let element = root_container(props, &next);
                if !next.was_called() {
                    warn!(middleware = %name, chain = "root_container", "render not called, inner layers skipped");
                }
                element
            })
        })
}

#[cfg(test)]
mod tests {
    use std::fmt::{self, Write as _};
    use std::sync::Mutex;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::component::{BoxedComponent, boxed, component};
    use crate::element::Element;
    use crate::props::{Props, RenderProps};

    fn leaf() -> BoxedComponent {
        boxed(component("Leaf", |p: &Props| {
            format!("{}|{}", p.context().get("layer").unwrap_or("-"), p.get("tag").unwrap_or("-"))
        }))
    }

    /// Records every `warn` event as `field=value` pairs.
    #[derive(Clone, Default)]
    struct Warnings(Arc<Mutex<Vec<String>>>);

    struct Fields<'a>(&'a mut String);

    impl Visit for Fields<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            let _ = write!(self.0, "{}={:?} ", field.name(), value);
        }
    }

    impl<S: Subscriber> Layer<S> for Warnings {
        fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
            if *event.metadata().level() != Level::WARN {
                return;
            }
            let mut line = String::new();
            event.record(&mut Fields(&mut line));
            self.0.lock().unwrap().push(line);
        }
    }

    impl Warnings {
        fn during<T>(&self, f: impl FnOnce() -> T) -> T {
            let subscriber = tracing_subscriber::registry().with(self.clone());
            tracing::subscriber::with_default(subscriber, f)
        }

        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    fn pass() -> RenderProps {
        RenderProps::new("/").with_component(leaf())
    }

    fn wrap_root(name: &'static str) -> Middleware {
        Middleware::new(name).root_container(move |p: RenderProps, r: &Render| {
            Element::node(name).child(r.call(p.provide("layer", name)))
        })
    }

    fn wrap_element(name: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Middleware {
        Middleware::new(name).container(move |c, p: Props, ce: &CreateElement| {
            log.lock().unwrap().push(name);
            Element::node(name).child(ce.call(c, p.set("tag", name)))
        })
    }

    #[test]
    fn empty_sequence_is_the_base_case() {
        let composed = compose([]).call(pass());
        let base = Render::default().call(pass());
        assert_eq!(composed, base);
        assert_eq!(composed.to_string(), "<Leaf>-|-</Leaf>");
    }

    #[test]
    fn containers_run_outer_to_inner_in_input_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let render = compose([
            wrap_element("E0", Arc::clone(&log)),
            wrap_element("E1", Arc::clone(&log)),
            wrap_element("E2", Arc::clone(&log)),
        ]);

        let tree = render.call(pass());
        assert_eq!(*log.lock().unwrap(), ["E0", "E1", "E2"]);
        // the innermost wrapper's rewrite wins
        assert_eq!(tree.to_string(), "<E0><E1><E2><Leaf>-|E2</Leaf></E2></E1></E0>");
    }

    #[test]
    fn chains_only_count_their_own_capability() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let render = compose([
            wrap_root("R0"),
            wrap_element("E0", Arc::clone(&log)),
            Middleware::new("inert"),
            wrap_root("R1"),
        ]);

        let tree = render.call(pass());
        assert_eq!(*log.lock().unwrap(), ["E0"]);
        assert_eq!(tree.to_string(), "<R0><R1><E0><Leaf>R1|E0</Leaf></E0></R1></R0>");
    }

    #[test]
    fn order_changes_nesting_and_visible_context() {
        let ab = compose([wrap_root("A"), wrap_root("B")]).call(pass());
        let ba = compose([wrap_root("B"), wrap_root("A")]).call(pass());

        assert_eq!(ab.to_string(), "<A><B><Leaf>B|-</Leaf></B></A>");
        assert_eq!(ba.to_string(), "<B><A><Leaf>A|-</Leaf></A></B>");
    }

    #[test]
    fn container_may_swap_the_component() {
        let swap = Middleware::new("swap").container(|_, p, ce: &CreateElement| {
            ce.call(boxed(component("Other", |_: &Props| "swapped")), p)
        });
        let tree = compose([swap]).call(pass());
        assert_eq!(tree.to_string(), "<Other>swapped</Other>");
    }

    #[test]
    fn skipped_continuation_truncates_the_chain() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let stop = Middleware::new("stop").root_container(|_, _: &Render| Element::node("Static"));
        let render = compose([wrap_root("A"), stop, wrap_element("E", Arc::clone(&log))]);

        let warnings = Warnings::default();
        let tree = warnings.during(|| render.call(pass()));
        assert_eq!(tree.to_string(), "<A><Static></Static></A>");
        assert!(log.lock().unwrap().is_empty());

        let lines = warnings.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("middleware=stop"), "{lines:?}");
        assert!(lines[0].contains(r#"chain="root_container""#), "{lines:?}");
    }

    #[test]
    fn skipped_create_element_is_reported() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let hide = Middleware::new("hide")
            .container(|_, _, _: &CreateElement| Element::node("Hidden"));
        let render = compose([hide, wrap_element("E", Arc::clone(&log))]);

        let warnings = Warnings::default();
        let tree = warnings.during(|| render.call(pass()));
        assert_eq!(tree.to_string(), "<Hidden></Hidden>");
        assert!(log.lock().unwrap().is_empty());

        let lines = warnings.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("middleware=hide"), "{lines:?}");
        assert!(lines[0].contains(r#"chain="container""#), "{lines:?}");
    }

    #[test]
    fn complete_chains_emit_no_warnings() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let render = compose([wrap_root("A"), wrap_element("E", Arc::clone(&log))]);

        let warnings = Warnings::default();
        warnings.during(|| render.call(pass()));
        assert!(warnings.lines().is_empty());
    }

    #[test]
    fn composed_render_is_reusable() {
        let render = compose([wrap_root("A")]);
        let first = render.call(pass());
        let second = render.clone().call(pass());
        assert_eq!(first, second);
    }
}
