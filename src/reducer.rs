//! The counter state, its actions, and the reducer that connects them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ActionError;

/// Pure state transition: `(State, Action) -> State`.
///
/// The reducer is the only place state changes. Any `Fn(&State, Action) -> State`
/// is a reducer through the blanket implementation, so a plain function works:
///
/// ```rust
/// use counter_mvu::{counter_reducer, Action, CounterState, Reducer};
///
/// let next = counter_reducer.reduce(&CounterState::default(), Action::Increment);
/// assert_eq!(next.count, 1);
/// ```
pub trait Reducer<S, A> {
    /// Compute the next state. Must not perform side effects.
    fn reduce(&self, state: &S, action: A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, A) -> S,
{
    fn reduce(&self, state: &S, action: A) -> S {
        self(state, action)
    }
}

/// State owned by the counter provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

/// A request to change the counter.
///
/// On the wire an action is `{"type": "INCREMENT"}` or `{"type": "DECREMENT"}`.
/// Any other tag decodes to [`Action::Unrecognized`], which the reducer ignores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Increment,
    Decrement,
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// Decode an action from its JSON wire form.
    ///
    /// Unknown tags are not an error. Malformed JSON or a missing `type` is.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        serde_json::from_str(json).map_err(|source| ActionError::Malformed { source })
    }

    /// The wire tag, or `None` for an unrecognized action.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Action::Increment => Some("INCREMENT"),
            Action::Decrement => Some("DECREMENT"),
            Action::Unrecognized => None,
        }
    }
}

/// The counter reducer.
///
/// Arithmetic wraps at the `i64` boundary instead of panicking.
pub fn counter_reducer(state: &CounterState, action: Action) -> CounterState {
    match action {
        Action::Increment => CounterState {
            count: state.count.wrapping_add(1),
        },
        Action::Decrement => CounterState {
            count: state.count.wrapping_sub(1),
        },
        Action::Unrecognized => {
            debug!(count = state.count, "ignoring unrecognized action");
            *state
        }
    }
}
