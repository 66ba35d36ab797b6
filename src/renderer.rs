//! Renderer abstraction for the Props a view produces.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Receives every Props value the [`Provider`](crate::Provider) renders.
///
/// [`DomRenderer`](crate::DomRenderer) mounts an element tree into a
/// [`Document`](crate::Document). Implement this trait to target anything else.
///
/// # Example
///
/// ```rust
/// use counter_mvu::Renderer;
///
/// struct ConsoleRenderer;
///
/// impl Renderer<i64> for ConsoleRenderer {
///     fn render(&mut self, count: i64) {
///         println!("count: {count}");
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props, replacing whatever was rendered before.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so hand one clone to the provider
/// and keep another for assertions.
///
/// # Example
///
/// ```rust
/// use counter_mvu::{counter_reducer, Action, Context, CounterState, Provider, TestRenderer};
///
/// let renderer = TestRenderer::new();
/// let mut provider = Provider::new(
///     CounterState::default(),
///     counter_reducer,
///     |cx: &Context<'_, CounterState, Action>| cx.state.count,
///     renderer.clone(),
/// );
/// provider.mount();
///
/// renderer.with_renders(|renders| {
///     assert_eq!(renders[0], 0);
/// });
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: Arc::clone(&self.renders),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self {
            renders: Arc::default(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestRenderer<Props> {
    pub fn new() -> Self {
        Self::default()
    }

    /// This renderer behind a trait object, for providers whose renderer type
    /// is chosen at runtime. Captures still land in this renderer.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send>
    where
        Props: Send + 'static,
    {
        Box::new(self.clone())
    }

    /// How many times the provider has rendered: once for `mount`, then once per action.
    pub fn count(&self) -> usize {
        self.with_renders(<[Props]>::len)
    }

    /// Inspect every captured render, oldest first.
    ///
    /// Click handlers inside the Props only queue actions on the provider, so
    /// calling them from `f` is safe.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Props]) -> R,
    {
        f(&self.renders.lock())
    }

    /// Inspect the most recent render, or `None` before the provider mounts.
    pub fn with_latest<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Props) -> R,
    {
        self.renders.lock().last().map(f)
    }
}
