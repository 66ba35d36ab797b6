//! Action dispatch handle for embedding callbacks in views.

use flume::Sender;
use tracing::trace;

use crate::error::ActionError;
use crate::reducer::Action;

/// Submits actions to the provider that created it.
///
/// Clone this handle into the click handlers of your view. Dispatching only
/// queues the action; the provider reduces it and re-renders on its next
/// [`process_pending`](crate::Provider::process_pending).
///
/// # Example
///
/// ```rust
/// use counter_mvu::{counter_reducer, Action, CounterState, Context, Provider, Renderer};
///
/// struct Discard;
/// impl Renderer<i64> for Discard {
///     fn render(&mut self, _count: i64) {}
/// }
///
/// let view = |cx: &Context<'_, CounterState, Action>| cx.state.count;
/// let mut provider = Provider::new(CounterState::default(), counter_reducer, view, Discard);
/// provider.mount();
///
/// let dispatch = provider.dispatcher();
/// dispatch.dispatch(Action::Increment);
/// dispatch.dispatch(Action::Increment);
///
/// assert_eq!(provider.process_pending(), 2);
/// assert_eq!(provider.state().count, 2);
/// ```
pub struct Dispatch<A: Send>(Sender<A>);

impl<A: Send> Clone for Dispatch<A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<A: Send> Dispatch<A> {
    pub(crate) fn new(sender: Sender<A>) -> Self {
        Self(sender)
    }

    /// Queue an action.
    ///
    /// Once the owning provider is gone the action is discarded.
    pub fn dispatch(&self, action: A) {
        if self.0.send(action).is_err() {
            trace!("provider unmounted, discarding action");
        }
    }
}

impl Dispatch<Action> {
    /// Decode an action from its JSON wire form and queue it.
    pub fn dispatch_json(&self, json: &str) -> Result<(), ActionError> {
        self.dispatch(Action::from_json(json)?);
        Ok(())
    }
}
