//! The provider that owns the shared state and drives re-rendering.

use core::fmt;
use core::marker::PhantomData;

use flume::Receiver;
use tracing::{debug, trace};

use crate::{Dispatch, Reducer, Renderer};

/// The ambient `{state, dispatch}` pair handed to every view.
///
/// Views never own the state. They read it through this context and request
/// changes through [`Context::dispatch`].
pub struct Context<'a, S, A: Send> {
    pub state: &'a S,
    pub dispatch: &'a Dispatch<A>,
}

impl<S, A: Send> Clone for Context<'_, S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A: Send> Copy for Context<'_, S, A> {}

/// A view derives renderable Props from the current context.
///
/// Closures taking a `&Context` implement this trait.
pub trait View<S, A: Send, Props> {
    fn view(&self, cx: &Context<'_, S, A>) -> Props;
}

impl<S, A: Send, Props, F> View<S, A, Props> for F
where
    F: Fn(&Context<'_, S, A>) -> Props,
{
    fn view(&self, cx: &Context<'_, S, A>) -> Props {
        self(cx)
    }
}

/// Owns exactly one `(state, dispatch)` pair and re-renders its view on every action.
///
/// The provider is the single source of truth:
/// 1. [`mount`](Self::mount) renders the view of the initial state
/// 2. views call [`Dispatch::dispatch`] from their handlers, which queues the action
/// 3. [`process_pending`](Self::process_pending) reduces each queued action in order
///    and renders once per action
///
/// There is no deduplication. An action that leaves the state unchanged still
/// produces a render.
///
/// # Type Parameters
///
/// * `S` - The state type
/// * `A` - The action type
/// * `Props` - What the view produces and the renderer consumes
/// * `R` - The reducer (implements [`Reducer`])
/// * `V` - The view (implements [`View`])
/// * `Render` - The renderer (implements [`Renderer`])
pub struct Provider<S, A, Props, R, V, Render>
where
    A: Send,
    R: Reducer<S, A>,
    V: View<S, A, Props>,
    Render: Renderer<Props>,
{
    reducer: R,
    view: V,
    renderer: Render,
    state: S,
    dispatch: Dispatch<A>,
    action_receiver: Receiver<A>,
    _props: PhantomData<Props>,
}

impl<S, A, Props, R, V, Render> Provider<S, A, Props, R, V, Render>
where
    A: Send + fmt::Debug,
    R: Reducer<S, A>,
    V: View<S, A, Props>,
    Render: Renderer<Props>,
{
    /// Create a provider. Nothing is rendered until [`mount`](Self::mount).
    ///
    /// # Arguments
    ///
    /// * `initial_state` - The state before any action
    /// * `reducer` - The only function allowed to compute new state
    /// * `view` - Derives Props from the context
    /// * `renderer` - Receives every Props value the view produces
    pub fn new(initial_state: S, reducer: R, view: V, renderer: Render) -> Self {
        let (action_sender, action_receiver) = flume::unbounded();

        Provider {
            reducer,
            view,
            renderer,
            state: initial_state,
            dispatch: Dispatch::new(action_sender),
            action_receiver,
            _props: PhantomData,
        }
    }

    /// Render the view of the current state.
    pub fn mount(&mut self) {
        debug!("mounting provider");
        self.render();
    }

    /// Reduce and render every queued action, in dispatch order.
    ///
    /// Actions dispatched while processing are handled in the same call.
    /// Returns how many actions were processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_receiver.try_recv() {
            self.step(action);
            processed += 1;
        }
        processed
    }

    /// The ambient pair for this provider.
    pub fn context(&self) -> Context<'_, S, A> {
        Context {
            state: &self.state,
            dispatch: &self.dispatch,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// A new handle onto this provider's action queue.
    pub fn dispatcher(&self) -> Dispatch<A> {
        self.dispatch.clone()
    }

    /// End the provider's lifetime and return the final state.
    ///
    /// Queued actions that were never processed are dropped.
    pub fn unmount(self) -> S {
        let dropped = self.action_receiver.len();
        debug!(dropped, "unmounting provider");
        self.state
    }

    fn step(&mut self, action: A) {
        debug!(?action, "processing action");
        self.state = self.reducer.reduce(&self.state, action);
        self.render();
    }

    fn render(&mut self) {
        let props = self.view.view(&Context {
            state: &self.state,
            dispatch: &self.dispatch,
        });
        trace!("rendering");
        self.renderer.render(props);
    }
}
